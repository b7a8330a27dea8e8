//! Fixability of the builtin `open()`.
//!
//! Canonical signature as of Python 3.11:
//!
//! ```text
//!      0     1         2             3              4            5
//! open(file, mode='r', buffering=-1, encoding=None, errors=None, newline=None,
//!      6             7
//!      closefd=True, opener=None)
//! ```
//!
//! `Path.open(mode='r', buffering=-1, encoding=None, errors=None,
//! newline=None)` covers everything up to `newline`; `closefd` and `opener`
//! have no equivalent, and a file-descriptor or byte-string path cannot
//! become a `Path` at all.

use rustpython_ast::ExprCall;

use pathlint_diagnostics::{DiagnosticKind, Fixability, UnfixableReason};

use crate::analyze::arguments::{
    find_argument_value, is_default, is_malformed_call, ParameterDefault,
};
use crate::analyze::typing::{is_bytes, is_int};
use crate::registry::Rule;
use crate::semantic::SemanticModel;

/// Parameters in canonical order, with the documented default for each.
/// An explicitly-passed default is equivalent to omission.
const OPEN_PARAMETERS: [(&str, Option<ParameterDefault>); 8] = [
    ("file", None),
    ("mode", Some(ParameterDefault::Str("r"))),
    ("buffering", Some(ParameterDefault::Int(-1))),
    ("encoding", Some(ParameterDefault::NoneLiteral)),
    ("errors", Some(ParameterDefault::NoneLiteral)),
    ("newline", Some(ParameterDefault::NoneLiteral)),
    ("closefd", Some(ParameterDefault::True)),
    ("opener", Some(ParameterDefault::NoneLiteral)),
];

/// Index of the first parameter `Path.open` does not accept.
const FIRST_UNSUPPORTED: usize = 6;

pub(super) fn builtin_open<'a>(
    call: &'a ExprCall,
    semantic: &SemanticModel<'a>,
) -> DiagnosticKind {
    DiagnosticKind::new(
        Rule::BuiltinOpen.to_str(),
        format!(
            "`open()` should be replaced by `{}`",
            Rule::BuiltinOpen.replacement()
        ),
        fixability(call, semantic),
    )
}

fn fixability<'a>(call: &'a ExprCall, semantic: &SemanticModel<'a>) -> Fixability {
    let parameters: Vec<&str> = OPEN_PARAMETERS.iter().map(|(name, _)| *name).collect();
    if is_malformed_call(call, &parameters) {
        return Fixability::Unfixable(UnfixableReason::MalformedCallShape);
    }

    // `closefd` and `opener` block the rewrite unless spelled at their
    // documented defaults.
    for (position, (name, default)) in OPEN_PARAMETERS
        .iter()
        .enumerate()
        .skip(FIRST_UNSUPPORTED)
    {
        let Some(default) = default else { continue };
        if find_argument_value(call, name, position).is_some_and(|expr| !is_default(expr, *default))
        {
            return Fixability::Unfixable(UnfixableReason::UnsupportedKeyword);
        }
    }

    // Only positive evidence of an incompatible path argument blocks the
    // rewrite; an unknown type is presumed fixable.
    if let Some(file) = find_argument_value(call, "file", 0) {
        if is_int(file, semantic) {
            return Fixability::Unfixable(UnfixableReason::FileDescriptor);
        }
        if is_bytes(file, semantic) {
            return Fixability::Unfixable(UnfixableReason::BytesPath);
        }
    }
    Fixability::Fixable
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use pathlint_diagnostics::{Fixability, UnfixableReason};

    use crate::settings::CheckerSettings;
    use crate::test::{test_snippet, verdicts};

    fn open_fixability(source: &str) -> Fixability {
        let diagnostics = test_snippet(source, &CheckerSettings::default());
        let verdicts = verdicts(&diagnostics);
        assert_eq!(verdicts.len(), 1, "expected exactly one diagnostic");
        assert_eq!(verdicts[0].0, "builtin-open");
        verdicts[0].1
    }

    #[test_case("open(p)"; "bare")]
    #[test_case("with open(p) as fp:\n    fp.read()"; "with statement")]
    #[test_case("open(p).close()"; "chained")]
    #[test_case("open(p, mode='r', buffering=-1, encoding=None, errors=None, newline=None, closefd=True, opener=None)"; "all defaults spelled as keywords")]
    #[test_case("open(p, 'r', - 1, None, None, None, True, None)"; "all defaults spelled positionally")]
    #[test_case("open(p, 'w', encoding='utf8')"; "supported keywords")]
    fn fixable_forms(source: &str) {
        assert_eq!(open_fixability(source), Fixability::Fixable);
    }

    #[test_case("open(p, closefd=False)"; "closefd false")]
    #[test_case("open(p, closefd=flag)"; "closefd non-literal")]
    #[test_case("open(p, opener=custom_fn)"; "opener variable")]
    #[test_case("open(p, 'r', - 1, None, None, None, False, opener)"; "closefd false positionally")]
    fn unsupported_keywords(source: &str) {
        assert_eq!(
            open_fixability(source),
            Fixability::Unfixable(UnfixableReason::UnsupportedKeyword)
        );
    }

    #[test_case("open(1)"; "int literal")]
    #[test_case("open(1, 'w')"; "int literal with mode")]
    #[test_case("x = 2\nopen(x)"; "int variable")]
    #[test_case("def foo(y: int):\n    open(y)"; "int parameter")]
    #[test_case("def f() -> int:\n    return 1\nopen(f())"; "int return type")]
    fn file_descriptors(source: &str) {
        assert_eq!(
            open_fixability(source),
            Fixability::Unfixable(UnfixableReason::FileDescriptor)
        );
    }

    #[test_case("open(b\"foo\")"; "bytes literal")]
    #[test_case("byte_str = b\"bar\"\nopen(byte_str)"; "bytes variable")]
    #[test_case("def bytes_str_func() -> bytes:\n    return b\"foo\"\nopen(bytes_str_func())"; "bytes return type")]
    fn bytes_paths(source: &str) {
        assert_eq!(
            open_fixability(source),
            Fixability::Unfixable(UnfixableReason::BytesPath)
        );
    }

    #[test_case("open(y)"; "unbound variable")]
    #[test_case("def f():\n    return make_path()\nopen(f())"; "unannotated return")]
    fn unknown_types_are_presumed_fixable(source: &str) {
        assert_eq!(open_fixability(source), Fixability::Fixable);
    }

    #[test_case("open(p, 'r', -1, None, None, None, True, None, extra)"; "positional beyond the canonical list")]
    #[test_case("open(p, 'r', mode='w')"; "keyword colliding with a filled position")]
    #[test_case("open(p, buffer=-1)"; "unknown keyword")]
    #[test_case("open(p, **kwargs)"; "double splat")]
    fn malformed_shapes(source: &str) {
        assert_eq!(
            open_fixability(source),
            Fixability::Unfixable(UnfixableReason::MalformedCallShape)
        );
    }
}
