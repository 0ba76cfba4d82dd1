use super::names::Naming;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Largest chain length any mode will generate.
pub const MAX_SUPPORTED_ARITY: usize = 32;

/// How a chain of handlers threads state and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmissionMode {
    /// State replaced at each step, no error channel.
    StateOnly,
    /// State replaced at each step, errors accumulate as a union.
    StateAndErrorUnion,
    /// Each step conjoins new state onto `ExistingState`, errors accumulate.
    StateIntersectionAndErrorUnion,
    /// Each handler returns `Result<Next, Errors>` instead of a parallel error parameter.
    ResultWrapped,
}

impl EmissionMode {
    pub const ALL: [EmissionMode; 4] = [
        EmissionMode::StateOnly,
        EmissionMode::StateAndErrorUnion,
        EmissionMode::StateIntersectionAndErrorUnion,
        EmissionMode::ResultWrapped,
    ];

    pub fn naming(self) -> Naming {
        match self {
            Self::StateIntersectionAndErrorUnion => Naming::Augmenting,
            _ => Naming::Plain,
        }
    }

    /// A state-only chain of one handler is the handler itself.
    pub fn min_arity(self) -> usize {
        match self {
            Self::StateOnly => 2,
            _ => 1,
        }
    }

    pub fn arity_window(self) -> RangeInclusive<usize> {
        self.min_arity()..=MAX_SUPPORTED_ARITY
    }

    pub fn has_error_union(self) -> bool {
        !matches!(self, Self::StateOnly)
    }

    /// Intersection chains prepend a fixed initial handler outside the loop.
    pub fn has_initial_handler(self) -> bool {
        matches!(self, Self::StateIntersectionAndErrorUnion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StateOnly => "state-only",
            Self::StateAndErrorUnion => "state-and-error-union",
            Self::StateIntersectionAndErrorUnion => "state-intersection-and-error-union",
            Self::ResultWrapped => "result-wrapped",
        }
    }
}

impl fmt::Display for EmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated overload: a chain of `arity` handlers in the given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSpec {
    pub arity: usize,
    pub mode: EmissionMode,
}

impl ChainSpec {
    pub fn new(arity: usize, mode: EmissionMode) -> Self {
        Self { arity, mode }
    }

    /// Number of entries in the handlers list.
    pub fn clause_count(&self) -> usize {
        if self.mode.has_initial_handler() {
            self.arity + 1
        } else {
            self.arity
        }
    }

    /// Index of the last state variable introduced by the chain.
    pub fn final_state_index(&self) -> usize {
        self.arity + 1
    }

    /// Index of the last error variable introduced by the chain.
    pub fn final_error_index(&self) -> usize {
        if self.mode.has_initial_handler() {
            self.arity + 1
        } else {
            self.arity
        }
    }
}
