use serde::{Deserialize, Serialize};

use crate::core::Family;
use crate::errors::{Error, Result};

pub const DEFAULT_MAX_ARITY: i64 = 9;

pub fn default_max_arity() -> i64 {
    DEFAULT_MAX_ARITY
}

/// Root configuration structure for the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Largest chain length to generate an overload for.
    /// Kept signed so that non-positive values reach validation with their
    /// original value instead of failing to deserialize.
    #[serde(default = "default_max_arity")]
    pub max_arity: i64,

    /// Families in emission order
    #[serde(default = "Family::builtin")]
    pub families: Vec<Family>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_arity: DEFAULT_MAX_ARITY,
            families: Family::builtin(),
        }
    }
}

impl GeneratorConfig {
    /// Override `max_arity` when a value was given on the command line.
    pub fn with_max_arity(mut self, max_arity: Option<i64>) -> Self {
        if let Some(value) = max_arity {
            self.max_arity = value;
        }
        self
    }

    /// Families named in `names`, in the requested order; all families when empty.
    pub fn select(&self, names: &[String]) -> Result<Vec<Family>> {
        if names.is_empty() {
            return Ok(self.families.clone());
        }
        names
            .iter()
            .map(|name| {
                self.families
                    .iter()
                    .find(|family| &family.name == name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownFamily(name.clone()))
            })
            .collect()
    }
}
