//! Fixability of `os.path.join` and `os.sep.join`.

use itertools::Itertools;
use rustpython_ast::{Expr, ExprCall, ExprList, ExprTuple};

use pathlint_diagnostics::{DiagnosticKind, Fixability, UnfixableReason};

use crate::analyze::arguments::has_starred_argument;
use crate::registry::Rule;

/// `os.path.join` is always rewritable; a starred argument just selects the
/// `joinpath()` spelling over the `/` operator.
pub(super) fn os_path_join(call: &ExprCall) -> DiagnosticKind {
    let joiner = if has_starred_argument(call) {
        "`joinpath()`"
    } else {
        "the `/` operator"
    };
    DiagnosticKind::new(
        Rule::OsPathJoin.to_str(),
        format!("`os.path.join()` should be replaced by `Path` with {joiner}"),
        Fixability::Fixable,
    )
}

/// `os.sep.join` rewrites cleanly only when called with a single two-element
/// list or tuple literal; a starred argument or any other shape does not.
pub(super) fn os_sep_join(call: &ExprCall) -> DiagnosticKind {
    DiagnosticKind::new(
        Rule::OsSepJoin.to_str(),
        "`os.sep.join()` should be replaced by `Path` with the `/` operator",
        fixability(call),
    )
}

fn fixability(call: &ExprCall) -> Fixability {
    if has_starred_argument(call) {
        return Fixability::Unfixable(UnfixableReason::StarredArgument);
    }
    let Ok(argument) = call.args.iter().exactly_one() else {
        return Fixability::Unfixable(UnfixableReason::MalformedCallShape);
    };
    let elements = match argument {
        Expr::List(ExprList { elts, .. }) | Expr::Tuple(ExprTuple { elts, .. }) => elts,
        _ => return Fixability::Unfixable(UnfixableReason::MalformedCallShape),
    };
    if elements.iter().any(|elt| matches!(elt, Expr::Starred(_))) {
        Fixability::Unfixable(UnfixableReason::StarredArgument)
    } else if elements.len() == 2 {
        Fixability::Fixable
    } else {
        Fixability::Unfixable(UnfixableReason::MalformedCallShape)
    }
}
