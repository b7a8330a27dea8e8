use std::path::Path;

use anyhow::{Context, Result};
use log::error;
use rustpython_ast::{Mod, Suite};
use rustpython_parser::{Mode, ParseError};

use pathlint_diagnostics::Diagnostic;

use crate::settings::CheckerSettings;

/// A [`Result`]-like type that returns both data and an error. Used to hand
/// back whatever was produced even in the face of a parse error.
pub struct LinterResult<T> {
    pub data: T,
    pub error: Option<ParseError>,
}

impl<T> LinterResult<T> {
    const fn new(data: T, error: Option<ParseError>) -> Self {
        Self { data, error }
    }
}

/// Generate diagnostics for an already-parsed module, ordered by source
/// position.
pub fn check_ast(python_ast: &Suite, settings: &CheckerSettings) -> Vec<Diagnostic> {
    crate::checkers::ast::check_ast(python_ast, settings)
}

/// Generate diagnostics from source code contents. A file that fails to
/// parse yields no diagnostics; the parse error itself is the parser's to
/// report.
pub fn check_source(
    path: &Path,
    source: &str,
    settings: &CheckerSettings,
) -> LinterResult<Vec<Diagnostic>> {
    match rustpython_parser::parse(source, Mode::Module, &path.to_string_lossy()) {
        Ok(Mod::Module(module)) => LinterResult::new(check_ast(&module.body, settings), None),
        Ok(_) => LinterResult::new(vec![], None),
        Err(parse_error) => {
            error!("Failed to parse {}: {parse_error}", path.display());
            LinterResult::new(vec![], Some(parse_error))
        }
    }
}

/// Read a file from disk and check it.
pub fn check_file(path: &Path, settings: &CheckerSettings) -> Result<LinterResult<Vec<Diagnostic>>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(check_source(path, &source, settings))
}
