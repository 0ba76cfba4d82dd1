pub mod family;
pub mod mode;
pub mod names;
pub mod types;

pub use family::Family;
pub use mode::{ChainSpec, EmissionMode, MAX_SUPPORTED_ARITY};
pub use names::{Naming, TypeVar, VarKind};
pub use types::{Param, TypeExpr};
