//! Helper functions for the tests of rule implementations.

use std::path::Path;

use rustpython_ast::{Expr, ExprCall, Mod};
use rustpython_parser::Mode;

use pathlint_diagnostics::{Diagnostic, Fixability};

use crate::settings::CheckerSettings;

pub(crate) fn test_resource_path(path: impl AsRef<Path>) -> std::path::PathBuf {
    Path::new("./resources/test/").join(path)
}

/// Run the checker over an inline snippet.
pub(crate) fn test_snippet(contents: &str, settings: &CheckerSettings) -> Vec<Diagnostic> {
    let result = crate::check_source(Path::new("<test>"), contents, settings);
    assert!(result.error.is_none(), "syntax error in test snippet");
    result.data
}

/// Collapse diagnostics to `(rule code, fixability)` pairs, in source order.
pub(crate) fn verdicts(diagnostics: &[Diagnostic]) -> Vec<(String, Fixability)> {
    diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.kind.name.clone(), diagnostic.kind.fixability))
        .collect()
}

pub(crate) fn parse_expression(source: &str) -> Expr {
    let parsed = rustpython_parser::parse(source, Mode::Expression, "<test>")
        .expect("source should be a valid expression");
    match parsed {
        Mod::Expression(module) => *module.body,
        _ => panic!("expected an expression"),
    }
}

pub(crate) fn parse_call(source: &str) -> ExprCall {
    match parse_expression(source) {
        Expr::Call(call) => call,
        _ => panic!("expected a call expression"),
    }
}
