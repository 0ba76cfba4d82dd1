use super::clause::{build_clauses, cumulative_errors, HandlerClause};
use crate::core::{ChainSpec, EmissionMode, Family, Param, TypeExpr, TypeVar};
use std::collections::BTreeSet;

pub const HANDLERS_PARAM: &str = "handlers";
pub const CLEANUP_PARAM: &str = "composeCleanupErrors";

/// A fully built overload declaration, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub function: String,
    pub handler: String,
    pub chain: ChainSpec,
    pub generic_params: Vec<TypeVar>,
    pub handler_clauses: Vec<HandlerClause>,
    /// Parameters after `handlers`.
    pub extra_params: Vec<Param>,
    pub return_type: HandlerClause,
}

impl Signature {
    /// Variables used anywhere outside the generic parameter list.
    pub fn referenced_vars(&self) -> BTreeSet<TypeVar> {
        let handler_types = self
            .handler_clauses
            .iter()
            .chain(std::iter::once(&self.return_type))
            .map(|clause| clause.to_type(&self.handler));
        let extra_types = self.extra_params.iter().map(|p| p.ty.clone());
        handler_types
            .chain(extra_types)
            .flat_map(|ty| ty.type_vars())
            .collect()
    }

    pub fn final_error_union(&self) -> Option<&TypeExpr> {
        self.return_type.error.as_ref()
    }
}

/// Build the overload of `family` for a chain of `arity` handlers.
///
/// `arity` must lie within the mode's arity window; the driver checks this
/// before any signature is assembled.
pub fn assemble(family: &Family, arity: usize) -> Signature {
    debug_assert!(family.mode.arity_window().contains(&arity));
    let chain = ChainSpec::new(arity, family.mode);
    let return_type = return_clause(&chain);

    let extra_params = match (&return_type.error, family.cleanup) {
        (Some(errors), true) => vec![cleanup_param(errors)],
        _ => Vec::new(),
    };

    Signature {
        function: family.function.clone(),
        handler: family.handler.clone(),
        chain,
        generic_params: generic_params(&chain),
        handler_clauses: build_clauses(&chain),
        extra_params,
        return_type,
    }
}

fn generic_params(chain: &ChainSpec) -> Vec<TypeVar> {
    let naming = chain.mode.naming();
    let last = chain.final_state_index();
    match chain.mode {
        EmissionMode::StateOnly => (1..=last).map(|j| naming.state(j)).collect(),
        EmissionMode::StateAndErrorUnion | EmissionMode::ResultWrapped => (1..last)
            .flat_map(|j| [naming.state(j), naming.error(j)])
            .chain(std::iter::once(naming.state(last)))
            .collect(),
        EmissionMode::StateIntersectionAndErrorUnion => std::iter::once(naming.existing_state())
            .chain((1..=last).flat_map(|j| [naming.state(j), naming.error(j)]))
            .collect(),
    }
}

fn return_clause(chain: &ChainSpec) -> HandlerClause {
    let naming = chain.mode.naming();
    let last = chain.final_state_index();
    let (input, output) = match chain.mode {
        EmissionMode::StateIntersectionAndErrorUnion => (
            naming.existing_state().into(),
            TypeExpr::intersection((1..=last).map(|j| naming.state(j))),
        ),
        _ => (naming.state(1).into(), naming.state(last).into()),
    };
    HandlerClause {
        input,
        output,
        error: chain
            .mode
            .has_error_union()
            .then(|| cumulative_errors(naming, chain.final_error_index())),
        result_wrapped: chain.mode == EmissionMode::ResultWrapped,
    }
}

/// `(errors: ReadonlyArray<Readonly<E>>) => Awaitable<E>` over the full union.
fn cleanup_param(errors: &TypeExpr) -> Param {
    let collected = TypeExpr::generic(
        "ReadonlyArray",
        vec![TypeExpr::generic("Readonly", vec![errors.clone()])],
    );
    Param::new(
        CLEANUP_PARAM,
        TypeExpr::function(
            vec![Param::new("errors", collected)],
            TypeExpr::generic("Awaitable", vec![errors.clone()]),
        ),
    )
}
