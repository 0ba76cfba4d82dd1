//! Generator for overloaded handler-composition type declarations.
//!
//! A statically typed signature cannot describe "a chain of any number of
//! handlers", so one declaration is generated per chain length up to a
//! configured maximum. Each declaration threads state (replaced or
//! intersected) and a cumulative error union through its handlers.
//!
//! ```rust
//! use handler_typings::core::{EmissionMode, Family};
//! use handler_typings::emit::{emit, join_declarations};
//!
//! let family = Family::new("chain", "chainHandlers", "Handler", EmissionMode::StateOnly, false);
//! let declarations = emit(2, &[family]).unwrap();
//! let text = join_declarations(&declarations);
//! assert!(text.contains("Handler<State1, State2>,"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod emit;
pub mod errors;
pub mod io;
pub mod observability;

pub use crate::config::GeneratorConfig;
pub use crate::core::{ChainSpec, EmissionMode, Family, Naming, TypeExpr, TypeVar};
pub use crate::emit::{assemble, emit, join_declarations, Declaration, Signature};
pub use crate::errors::{Error, Result};
