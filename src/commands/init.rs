use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = r#"# handler-typings configuration

# Largest handler chain to generate an overload for (1..=32; chain-handlers needs 2)
max_arity = 9

# Families are emitted in the order listed here.
# mode: state-only | state-and-error-union | state-intersection-and-error-union | result-wrapped

[[families]]
name = "compose-message-handlers"
function = "composeMessageHandlers"
handler = "MessageHandler"
mode = "state-and-error-union"
cleanup = true

[[families]]
name = "augment-message-handlers"
function = "augmentMessageHandlers"
handler = "MessageHandler"
mode = "state-intersection-and-error-union"
cleanup = true

[[families]]
name = "augment-request-handlers"
function = "augmentRequestHandlers"
handler = "RequestHandler"
mode = "state-intersection-and-error-union"

[[families]]
name = "chain-handlers"
function = "chainHandlers"
handler = "Handler"
mode = "state-only"

[[families]]
name = "chain-result-handlers"
function = "chainResultHandlers"
handler = "Handler"
mode = "result-wrapped"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, GeneratorConfig};
    use std::path::Path;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let parsed = parse_config(DEFAULT_CONFIG, Path::new(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(parsed, GeneratorConfig::default());
    }
}
