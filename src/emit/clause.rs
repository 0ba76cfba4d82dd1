//! Handler clause construction.
//!
//! A clause is one entry of the `handlers` tuple. Errors accumulate: the clause
//! at position `j` exposes every error introduced at or before `j`, because a
//! chain that has run `j - 1` steps may already have failed on any of them.
//! Intersection chains number their clauses from 0 (the fixed initial
//! handler) and therefore expose errors through `j + 1`.

use crate::core::{ChainSpec, EmissionMode, Naming, TypeExpr};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerClause {
    pub input: TypeExpr,
    pub output: TypeExpr,
    pub error: Option<TypeExpr>,
    /// Failure travels inside `Result<output, error>` instead of a third argument.
    pub result_wrapped: bool,
}

impl HandlerClause {
    pub fn to_type(&self, handler: &str) -> TypeExpr {
        let mut args = vec![self.input.clone()];
        match &self.error {
            Some(error) if self.result_wrapped => args.push(TypeExpr::generic(
                "Result",
                vec![self.output.clone(), error.clone()],
            )),
            Some(error) => {
                args.push(self.output.clone());
                args.push(error.clone());
            }
            None => args.push(self.output.clone()),
        }
        TypeExpr::generic(handler, args)
    }
}

/// Clause positions for a chain, in emission order.
pub fn positions(spec: &ChainSpec) -> RangeInclusive<usize> {
    let first = if spec.mode.has_initial_handler() { 0 } else { 1 };
    first..=spec.arity
}

/// Union of error variables `1..=through`, in introduction order.
pub fn cumulative_errors(naming: Naming, through: usize) -> TypeExpr {
    TypeExpr::union((1..=through).map(|k| naming.error(k)))
}

/// `ExistingState & NewState1 & ... & NewState{through}`.
pub fn accumulated_state(naming: Naming, through: usize) -> TypeExpr {
    TypeExpr::intersection(
        std::iter::once(naming.existing_state()).chain((1..=through).map(|k| naming.state(k))),
    )
}

/// Build the clause at `position`.
pub fn build_clause(mode: EmissionMode, position: usize) -> HandlerClause {
    let naming = mode.naming();
    let j = position;
    match mode {
        EmissionMode::StateOnly => HandlerClause {
            input: naming.state(j).into(),
            output: naming.state(j + 1).into(),
            error: None,
            result_wrapped: false,
        },
        EmissionMode::StateAndErrorUnion | EmissionMode::ResultWrapped => HandlerClause {
            input: naming.state(j).into(),
            output: naming.state(j + 1).into(),
            error: Some(cumulative_errors(naming, j)),
            result_wrapped: mode == EmissionMode::ResultWrapped,
        },
        EmissionMode::StateIntersectionAndErrorUnion => HandlerClause {
            input: accumulated_state(naming, j),
            output: naming.state(j + 1).into(),
            error: Some(cumulative_errors(naming, j + 1)),
            result_wrapped: false,
        },
    }
}

pub fn build_clauses(spec: &ChainSpec) -> Vec<HandlerClause> {
    positions(spec)
        .map(|position| build_clause(spec.mode, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::render::render_inline;

    fn rendered(mode: EmissionMode, position: usize) -> String {
        render_inline(&build_clause(mode, position).to_type("Handler"))
    }

    #[test]
    fn test_state_only_clause_has_no_error_argument() {
        assert_eq!(
            rendered(EmissionMode::StateOnly, 2),
            "Handler<State2, State3>"
        );
    }

    #[test]
    fn test_error_union_accumulates() {
        assert_eq!(
            rendered(EmissionMode::StateAndErrorUnion, 1),
            "Handler<State1, State2, Error1>"
        );
        assert_eq!(
            rendered(EmissionMode::StateAndErrorUnion, 3),
            "Handler<State3, State4, Error1 | Error2 | Error3>"
        );
    }

    #[test]
    fn test_initial_intersection_clause() {
        assert_eq!(
            rendered(EmissionMode::StateIntersectionAndErrorUnion, 0),
            "Handler<ExistingState, NewState1, Errors1>"
        );
        assert_eq!(
            rendered(EmissionMode::StateIntersectionAndErrorUnion, 2),
            "Handler<ExistingState & NewState1 & NewState2, NewState3, Errors1 | Errors2 | Errors3>"
        );
    }

    #[test]
    fn test_result_wrapped_clause() {
        assert_eq!(
            rendered(EmissionMode::ResultWrapped, 1),
            "Handler<State1, Result<State2, Error1>>"
        );
        assert_eq!(
            rendered(EmissionMode::ResultWrapped, 2),
            "Handler<State2, Result<State3, Error1 | Error2>>"
        );
    }

    #[test]
    fn test_positions_start_at_zero_for_intersection_chains() {
        let spec = ChainSpec::new(3, EmissionMode::StateIntersectionAndErrorUnion);
        assert_eq!(positions(&spec), 0..=3);
        assert_eq!(build_clauses(&spec).len(), spec.clause_count());

        let spec = ChainSpec::new(3, EmissionMode::StateOnly);
        assert_eq!(positions(&spec), 1..=3);
        assert_eq!(build_clauses(&spec).len(), spec.clause_count());
    }
}
