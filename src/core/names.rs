//! Type-variable naming.
//!
//! Every generated declaration names its type variables from a position in the
//! handler chain. Two conventions exist:
//!
//! - `Plain`: `State{n}` / `Error{n}`, positions start at 1
//! - `Augmenting`: `ExistingState` for state position 0, then `NewState{n}` /
//!   `Errors{n}`
//!
//! Names are a pure function of `(kind, index, convention)`, so two distinct
//! variables never render to the same identifier within one declaration.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    State,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Naming {
    /// `State1, Error1, State2, ...`
    Plain,
    /// `ExistingState, NewState1, Errors1, ...`
    Augmenting,
}

impl Naming {
    pub fn state(self, index: usize) -> TypeVar {
        TypeVar::new(VarKind::State, index, self)
    }

    pub fn error(self, index: usize) -> TypeVar {
        TypeVar::new(VarKind::Error, index, self)
    }

    /// The fixed starting state of an augmenting chain.
    pub fn existing_state(self) -> TypeVar {
        TypeVar::new(VarKind::State, 0, self)
    }
}

/// A generic type variable bound to one chain position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeVar {
    pub kind: VarKind,
    pub index: usize,
    pub naming: Naming,
}

impl TypeVar {
    pub const fn new(kind: VarKind, index: usize, naming: Naming) -> Self {
        Self {
            kind,
            index,
            naming,
        }
    }

    pub fn name(&self) -> String {
        match (self.naming, self.kind) {
            (Naming::Plain, VarKind::State) => format!("State{}", self.index),
            (Naming::Plain, VarKind::Error) => format!("Error{}", self.index),
            (Naming::Augmenting, VarKind::State) if self.index == 0 => "ExistingState".to_string(),
            (Naming::Augmenting, VarKind::State) => format!("NewState{}", self.index),
            (Naming::Augmenting, VarKind::Error) => format!("Errors{}", self.index),
        }
    }

    /// True when `next` is the error variable declared alongside this state.
    pub fn pairs_with(&self, next: &TypeVar) -> bool {
        self.kind == VarKind::State
            && next.kind == VarKind::Error
            && self.index == next.index
            && self.naming == next.naming
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_plain_names() {
        assert_eq!(Naming::Plain.state(3).name(), "State3");
        assert_eq!(Naming::Plain.error(1).name(), "Error1");
    }

    #[test]
    fn test_augmenting_names() {
        assert_eq!(Naming::Augmenting.existing_state().name(), "ExistingState");
        assert_eq!(Naming::Augmenting.state(2).name(), "NewState2");
        assert_eq!(Naming::Augmenting.error(2).name(), "Errors2");
    }

    #[test]
    fn test_names_never_collide_within_a_convention() {
        for naming in [Naming::Plain, Naming::Augmenting] {
            let mut seen = HashSet::new();
            for index in 0..=40 {
                assert!(seen.insert(naming.state(index).name()));
                assert!(seen.insert(naming.error(index).name()));
            }
        }
    }

    #[test]
    fn test_pairs_with_requires_same_index() {
        let naming = Naming::Plain;
        assert!(naming.state(2).pairs_with(&naming.error(2)));
        assert!(!naming.state(2).pairs_with(&naming.error(3)));
        assert!(!naming.error(2).pairs_with(&naming.state(2)));
    }
}
