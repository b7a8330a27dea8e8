//! Helpers for inspecting the argument shape of a call expression: positional
//! and keyword lookup against a canonical parameter order, and literal
//! equality against a parameter's documented default.

use rustpython_ast::{Constant, Expr, ExprCall, ExprConstant, ExprUnaryOp, Keyword, UnaryOp};

/// The documented default value of a standard-library parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterDefault {
    NoneLiteral,
    True,
    Str(&'static str),
    Int(i64),
}

/// Return the [`Keyword`] with the given name, or `None` if no such keyword
/// exists.
pub(crate) fn find_keyword<'a>(call: &'a ExprCall, name: &str) -> Option<&'a Keyword> {
    call.keywords
        .iter()
        .find(|keyword| keyword.arg.as_ref().is_some_and(|arg| arg.as_str() == name))
}

/// Return the positional argument at the given index. Positions beyond the
/// first starred argument no longer map to parameters and yield `None`.
pub(crate) fn find_positional(call: &ExprCall, position: usize) -> Option<&Expr> {
    call.args
        .iter()
        .take_while(|expr| !matches!(expr, Expr::Starred(_)))
        .nth(position)
}

/// Return the value passed for an argument that may be given either as a
/// keyword or at the given position.
pub(crate) fn find_argument_value<'a>(
    call: &'a ExprCall,
    name: &str,
    position: usize,
) -> Option<&'a Expr> {
    find_keyword(call, name)
        .map(|keyword| &keyword.value)
        .or_else(|| find_positional(call, position))
}

/// Returns `true` if any positional argument is a starred (splat) expression.
pub(crate) fn has_starred_argument(call: &ExprCall) -> bool {
    call.args.iter().any(|expr| matches!(expr, Expr::Starred(_)))
}

/// Returns `true` if the expression is the literal spelling of the given
/// default, making an explicitly-passed keyword semantically equivalent to an
/// omitted one.
pub(crate) fn is_default(expr: &Expr, default: ParameterDefault) -> bool {
    match default {
        ParameterDefault::NoneLiteral => matches!(
            expr,
            Expr::Constant(ExprConstant {
                value: Constant::None,
                ..
            })
        ),
        ParameterDefault::True => matches!(
            expr,
            Expr::Constant(ExprConstant {
                value: Constant::Bool(true),
                ..
            })
        ),
        ParameterDefault::Str(expected) => matches!(
            expr,
            Expr::Constant(ExprConstant {
                value: Constant::Str(value),
                ..
            }) if value.as_str() == expected
        ),
        ParameterDefault::Int(expected) => is_int_literal(expr, expected),
    }
}

fn is_int_literal(expr: &Expr, expected: i64) -> bool {
    if expected < 0 {
        if let Expr::UnaryOp(ExprUnaryOp {
            op: UnaryOp::USub,
            operand,
            ..
        }) = expr
        {
            return is_int_literal(operand, -expected);
        }
        return false;
    }
    matches!(
        expr,
        Expr::Constant(ExprConstant {
            value: Constant::Int(value),
            ..
        // The backing bigint type is opaque; compare through its decimal form.
        }) if value.to_string() == expected.to_string()
    )
}

/// Returns `true` if the call's arguments cannot be mapped back onto the
/// canonical parameter list: more positional arguments than parameters, a
/// starred argument or `**kwargs` (statically unmappable), a keyword that
/// names no parameter, or a keyword colliding with an already-filled
/// position.
pub(crate) fn is_malformed_call(call: &ExprCall, parameters: &[&str]) -> bool {
    if call.args.len() > parameters.len() || has_starred_argument(call) {
        return true;
    }
    let filled = call.args.len();
    for keyword in &call.keywords {
        let Some(arg) = keyword.arg.as_ref() else {
            // `**kwargs` cannot be mapped statically.
            return true;
        };
        match parameters.iter().position(|parameter| *parameter == arg.as_str()) {
            None => return true,
            Some(position) if position < filled => return true,
            Some(_) => {}
        }
    }
    false
}
