//! Surface syntax for generated declarations.
//!
//! Inline expressions render through `Display` on `TypeExpr`; whole
//! declarations through `Display` on `Signature`, laid out one generic
//! parameter group, handler clause and return argument per line.

use super::signature::{Signature, HANDLERS_PARAM};
use crate::core::{Param, TypeExpr};
use std::fmt::{self, Display, Formatter, Write};

const INDENT: &str = "    ";

pub fn render_inline(expr: &TypeExpr) -> String {
    expr.to_string()
}

pub fn render_signature(signature: &Signature) -> String {
    signature.to_string()
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Var(var) => write!(f, "{}", var),
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Union(members) => {
                write_joined(f, members, " | ", |m| matches!(m, TypeExpr::Function { .. }))
            }
            TypeExpr::Intersection(members) => write_joined(f, members, " & ", |m| {
                matches!(m, TypeExpr::Union(_) | TypeExpr::Function { .. })
            }),
            TypeExpr::Generic(name, args) => {
                write!(f, "{}<", name)?;
                write_joined(f, args, ", ", |_| false)?;
                f.write_char('>')
            }
            TypeExpr::Function { params, returns } => {
                f.write_char('(')?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", param.name, param.ty)?;
                }
                write!(f, ") => {}", returns)
            }
        }
    }
}

fn write_joined(
    f: &mut Formatter<'_>,
    members: &[TypeExpr],
    separator: &str,
    needs_parens: impl Fn(&TypeExpr) -> bool,
) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if needs_parens(member) {
            write!(f, "({})", member)?;
        } else {
            write!(f, "{}", member)?;
        }
    }
    Ok(())
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "export function {}<", self.function)?;
        self.write_generic_params(f)?;
        writeln!(f, ">(")?;

        writeln!(f, "{INDENT}{}: [", HANDLERS_PARAM)?;
        for clause in &self.handler_clauses {
            writeln!(f, "{INDENT}{INDENT}{},", clause.to_type(&self.handler))?;
        }
        write!(f, "{INDENT}]")?;
        for param in &self.extra_params {
            writeln!(f, ",")?;
            write_param_block(f, param)?;
        }
        writeln!(f)?;

        write!(f, "): ")?;
        write_return_type(f, &self.return_type.to_type(&self.handler))
    }
}

impl Signature {
    /// A state variable shares its line with the error variable of the same index.
    fn write_generic_params(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        let mut vars = self.generic_params.iter().peekable();
        while let Some(var) = vars.next() {
            match vars.next_if(|next| var.pairs_with(next)) {
                Some(error) => lines.push(format!("{}, {}", var, error)),
                None => lines.push(var.name()),
            }
        }
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            let separator = if i == last { "" } else { "," };
            writeln!(f, "{INDENT}{}{}", line, separator)?;
        }
        Ok(())
    }
}

fn write_param_block(f: &mut Formatter<'_>, param: &Param) -> fmt::Result {
    match &param.ty {
        TypeExpr::Function { params, returns } => {
            writeln!(f, "{INDENT}{}: (", param.name)?;
            for (i, inner) in params.iter().enumerate() {
                if i > 0 {
                    writeln!(f, ",")?;
                }
                write!(f, "{INDENT}{INDENT}{}: {}", inner.name, inner.ty)?;
            }
            writeln!(f)?;
            write!(f, "{INDENT}) => {}", returns)
        }
        ty => write!(f, "{INDENT}{}: {}", param.name, ty),
    }
}

fn write_return_type(f: &mut Formatter<'_>, ty: &TypeExpr) -> fmt::Result {
    match ty {
        TypeExpr::Generic(name, args) => {
            writeln!(f, "{}<", name)?;
            for (i, arg) in args.iter().enumerate() {
                let separator = if i + 1 == args.len() { "" } else { "," };
                writeln!(f, "{INDENT}{}{}", arg, separator)?;
            }
            f.write_char('>')
        }
        other => write!(f, "{}", other),
    }
}
