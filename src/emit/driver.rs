//! Emission driver: validates the arity window once, then walks every
//! requested family in order, one overload per arity, ascending.

use super::render::render_signature;
use super::signature::{assemble, Signature};
use crate::core::Family;
use crate::errors::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// One rendered overload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub family: String,
    pub function: String,
    pub arity: usize,
    pub declaration: String,
}

/// Check `max_arity` against every family's window before anything is built.
pub fn validate(max_arity: i64, families: &[Family]) -> Result<usize> {
    let mut seen = HashSet::new();
    let mut validated = None;
    for family in families {
        family.validate()?;
        if !seen.insert(family.name.as_str()) {
            return Err(Error::invalid_family(&family.name, "family defined more than once"));
        }
        let window = family.mode.arity_window();
        let value = usize::try_from(max_arity)
            .ok()
            .filter(|value| window.contains(value))
            .ok_or_else(|| Error::InvalidArity {
                value: max_arity,
                family: family.name.clone(),
                min: *window.start(),
                max: *window.end(),
            })?;
        validated = Some(value);
    }
    validated.ok_or(Error::NoFamilies)
}

pub fn arities(family: &Family, max_arity: usize) -> RangeInclusive<usize> {
    family.mode.min_arity()..=max_arity
}

/// Signatures of one family in ascending arity. `max_arity` must already be validated.
pub fn family_signatures(family: &Family, max_arity: usize) -> impl Iterator<Item = Signature> + '_ {
    arities(family, max_arity).map(move |arity| {
        debug!(family = %family.name, arity, "assembling overload");
        assemble(family, arity)
    })
}

/// Build every overload of every family, families in the order given.
pub fn emit(max_arity: i64, families: &[Family]) -> Result<Vec<Declaration>> {
    let max_arity = validate(max_arity, families)?;
    let declarations: Vec<Declaration> = families
        .iter()
        .flat_map(|family| {
            family_signatures(family, max_arity).map(move |signature| Declaration {
                family: family.name.clone(),
                function: signature.function.clone(),
                arity: signature.chain.arity,
                declaration: render_signature(&signature),
            })
        })
        .collect();
    info!(
        families = families.len(),
        overloads = declarations.len(),
        max_arity,
        "generated overload declarations"
    );
    Ok(declarations)
}

/// Declarations separated by blank lines, newline-terminated.
pub fn join_declarations(declarations: &[Declaration]) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let mut out = declarations
        .iter()
        .map(|d| d.declaration.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EmissionMode, MAX_SUPPORTED_ARITY};

    fn chain_families() -> Vec<Family> {
        Family::builtin()
            .into_iter()
            .filter(|f| f.name.starts_with("chain"))
            .collect()
    }

    #[test]
    fn test_rejects_non_positive_arity() {
        for value in [0, -3] {
            let err = emit(value, &Family::builtin()).unwrap_err();
            assert!(matches!(err, Error::InvalidArity { value: v, .. } if v == value));
        }
    }

    #[test]
    fn test_rejects_arity_below_mode_minimum() {
        let err = emit(1, &chain_families()).unwrap_err();
        match err {
            Error::InvalidArity { family, min, .. } => {
                assert_eq!(family, "chain-handlers");
                assert_eq!(min, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_arity_above_ceiling() {
        let too_large = MAX_SUPPORTED_ARITY as i64 + 1;
        assert!(emit(too_large, &Family::builtin()).is_err());
        assert!(emit(MAX_SUPPORTED_ARITY as i64, &Family::builtin()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_family_names() {
        let mut families = chain_families();
        families.push(families[0].clone());
        assert!(matches!(
            validate(3, &families),
            Err(Error::InvalidFamily { .. })
        ));
    }

    #[test]
    fn test_state_only_window_starts_at_two() {
        let family = Family::new("f", "chain", "Handler", EmissionMode::StateOnly, false);
        let decls = emit(2, std::slice::from_ref(&family)).unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].arity, 2);
    }

    #[test]
    fn test_families_emit_back_to_back_in_ascending_arity() {
        let decls = emit(4, &chain_families()).unwrap();
        let order: Vec<(&str, usize)> = decls
            .iter()
            .map(|d| (d.function.as_str(), d.arity))
            .collect();
        assert_eq!(
            order,
            [
                ("chainHandlers", 2),
                ("chainHandlers", 3),
                ("chainHandlers", 4),
                ("chainResultHandlers", 1),
                ("chainResultHandlers", 2),
                ("chainResultHandlers", 3),
                ("chainResultHandlers", 4),
            ]
        );
    }

    #[test]
    fn test_join_declarations_separates_with_blank_lines() {
        let decls = emit(2, &chain_families()).unwrap();
        let text = join_declarations(&decls);
        assert_eq!(text.matches("\n\nexport function").count(), decls.len() - 1);
        assert!(text.ends_with(">\n"));
        assert_eq!(join_declarations(&[]), "");
    }

    #[test]
    fn test_rejects_empty_family_list() {
        assert!(matches!(emit(3, &[]), Err(Error::NoFamilies)));
    }
}
