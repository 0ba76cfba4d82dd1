//! Overload emission.
//!
//! `clause` builds individual handler entries, `signature` assembles them into
//! one declaration per arity, `driver` walks families and arities, and
//! `render` is the single step that produces surface syntax.

pub mod clause;
pub mod driver;
pub mod render;
pub mod signature;

pub use clause::{build_clause, build_clauses, cumulative_errors, HandlerClause};
pub use driver::{emit, family_signatures, join_declarations, validate, Declaration};
pub use render::{render_inline, render_signature};
pub use signature::{assemble, Signature};
