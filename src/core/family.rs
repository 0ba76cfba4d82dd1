use super::mode::EmissionMode;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// One overload set: every arity of a single exported function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Selector used on the command line and in logs.
    pub name: String,
    /// Exported function name, e.g. `composeMessageHandlers`.
    pub function: String,
    /// Base handler type, e.g. `MessageHandler`.
    pub handler: String,
    pub mode: EmissionMode,
    /// Append the `composeCleanupErrors` reduction parameter.
    #[serde(default)]
    pub cleanup: bool,
}

impl Family {
    pub fn new(
        name: &str,
        function: &str,
        handler: &str,
        mode: EmissionMode,
        cleanup: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            function: function.to_string(),
            handler: handler.to_string(),
            mode,
            cleanup,
        }
    }

    /// Built-in families in default emission order.
    pub fn builtin() -> Vec<Family> {
        vec![
            Family::new(
                "compose-message-handlers",
                "composeMessageHandlers",
                "MessageHandler",
                EmissionMode::StateAndErrorUnion,
                true,
            ),
            Family::new(
                "augment-message-handlers",
                "augmentMessageHandlers",
                "MessageHandler",
                EmissionMode::StateIntersectionAndErrorUnion,
                true,
            ),
            Family::new(
                "augment-request-handlers",
                "augmentRequestHandlers",
                "RequestHandler",
                EmissionMode::StateIntersectionAndErrorUnion,
                false,
            ),
            Family::new(
                "chain-handlers",
                "chainHandlers",
                "Handler",
                EmissionMode::StateOnly,
                false,
            ),
            Family::new(
                "chain-result-handlers",
                "chainResultHandlers",
                "Handler",
                EmissionMode::ResultWrapped,
                false,
            ),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_family(&self.name, "family name is empty"));
        }
        for (field, value) in [("function", &self.function), ("handler", &self.handler)] {
            if !is_identifier(value) {
                return Err(Error::invalid_family(
                    &self.name,
                    format!("{} '{}' is not a valid identifier", field, value),
                ));
            }
        }
        if self.cleanup && !self.mode.has_error_union() {
            return Err(Error::invalid_family(
                &self.name,
                format!("mode {} has no errors to reduce; remove `cleanup`", self.mode),
            ));
        }
        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
