//! Abstract representation of generated type expressions.
//!
//! Builders compose `TypeExpr` values; `crate::emit::render` is the only place
//! that turns them into surface syntax.

use super::names::TypeVar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A generic parameter of the enclosing declaration.
    Var(TypeVar),
    /// A fixed, externally declared type such as `Awaitable`.
    Named(String),
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
    Generic(String, Vec<TypeExpr>),
    Function {
        params: Vec<Param>,
        returns: Box<TypeExpr>,
    },
}

/// A named parameter, used both for function-type parameters and for the
/// parameters of the generated declaration itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl From<TypeVar> for TypeExpr {
    fn from(var: TypeVar) -> Self {
        TypeExpr::Var(var)
    }
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self::Generic(name.into(), args)
    }

    /// Union of `members`; a single member collapses to itself.
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TypeExpr>,
    {
        collapse(members, TypeExpr::Union)
    }

    /// Intersection of `members`; a single member collapses to itself.
    pub fn intersection<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TypeExpr>,
    {
        collapse(members, TypeExpr::Intersection)
    }

    pub fn function(params: Vec<Param>, returns: TypeExpr) -> Self {
        Self::Function {
            params,
            returns: Box::new(returns),
        }
    }

    /// Members of a union, or the expression itself when it is not one.
    pub fn union_members(&self) -> Vec<&TypeExpr> {
        match self {
            TypeExpr::Union(members) => members.iter().collect(),
            other => vec![other],
        }
    }

    /// Members of an intersection, or the expression itself when it is not one.
    pub fn intersection_members(&self) -> Vec<&TypeExpr> {
        match self {
            TypeExpr::Intersection(members) => members.iter().collect(),
            other => vec![other],
        }
    }

    /// Every type variable referenced, in left-to-right order, duplicates kept.
    pub fn type_vars(&self) -> Vec<TypeVar> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<TypeVar>) {
        match self {
            TypeExpr::Var(var) => out.push(*var),
            TypeExpr::Named(_) => {}
            TypeExpr::Union(members) | TypeExpr::Intersection(members) => {
                members.iter().for_each(|m| m.collect_vars(out));
            }
            TypeExpr::Generic(_, args) => args.iter().for_each(|a| a.collect_vars(out)),
            TypeExpr::Function { params, returns } => {
                params.iter().for_each(|p| p.ty.collect_vars(out));
                returns.collect_vars(out);
            }
        }
    }
}

fn collapse<I>(members: I, wrap: fn(Vec<TypeExpr>) -> TypeExpr) -> TypeExpr
where
    I: IntoIterator,
    I::Item: Into<TypeExpr>,
{
    let mut members: Vec<TypeExpr> = members.into_iter().map(Into::into).collect();
    // An empty union would be `never`; callers always supply at least one member.
    debug_assert!(!members.is_empty(), "empty union or intersection");
    if members.len() == 1 {
        members.remove(0)
    } else {
        wrap(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::names::Naming;

    #[test]
    fn test_single_member_union_collapses() {
        let var = Naming::Plain.error(1);
        assert_eq!(TypeExpr::union([var]), TypeExpr::Var(var));
    }

    #[test]
    fn test_union_keeps_construction_order() {
        let naming = Naming::Plain;
        let union = TypeExpr::union((1..=3).map(|i| naming.error(i)));
        let names: Vec<String> = union.type_vars().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["Error1", "Error2", "Error3"]);
        assert_eq!(union.union_members().len(), 3);
    }

    #[test]
    fn test_type_vars_walks_function_types() {
        let err = Naming::Plain.error(2);
        let expr = TypeExpr::function(
            vec![Param::new("errors", TypeExpr::generic("ReadonlyArray", vec![err.into()]))],
            TypeExpr::generic("Awaitable", vec![err.into()]),
        );
        assert_eq!(expr.type_vars(), vec![err, err]);
    }
}
