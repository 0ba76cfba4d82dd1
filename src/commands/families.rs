use crate::config::load_config;
use anyhow::Result;
use std::path::Path;

/// One line per family: name, function, handler, mode, accepted arities.
pub fn list_families(config: Option<&Path>) -> Result<()> {
    let generator = load_config(config)?;
    for line in family_lines(&generator.families) {
        println!("{}", line);
    }
    Ok(())
}

pub fn family_lines(families: &[crate::core::Family]) -> Vec<String> {
    families
        .iter()
        .map(|family| {
            let window = family.mode.arity_window();
            format!(
                "{:<26} {}<{}> mode={} arity={}..={}{}",
                family.name,
                family.function,
                family.handler,
                family.mode,
                window.start(),
                window.end(),
                if family.cleanup { " cleanup" } else { "" }
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Family;

    #[test]
    fn test_family_lines_show_arity_window() {
        let lines = family_lines(&Family::builtin());
        assert_eq!(lines.len(), 5);
        let chain = lines
            .iter()
            .find(|l| l.starts_with("chain-handlers "))
            .unwrap();
        assert!(chain.contains("chainHandlers<Handler>"));
        assert!(chain.contains("arity=2..=32"));
        assert!(lines[0].ends_with(" cleanup"));
    }
}
