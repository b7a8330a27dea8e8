//! Detection of legacy `os` / `os.path` / `open()` calls that have a
//! `pathlib` equivalent.
//!
//! The table is exact on the resolved qualified path; there is no prefix or
//! fuzzy matching, and an unresolvable callee is silently no match.

use rustpython_ast::{ExprCall, Ranged};

use pathlint_diagnostics::{Diagnostic, DiagnosticKind, Fixability};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::settings::types::PythonVersion;

mod join;
mod open;

pub(crate) fn replaceable_by_pathlib<'a>(checker: &mut Checker<'a>, call: &'a ExprCall) {
    let Some(qualified_name) = checker.semantic().resolve_qualified_name(&call.func) else {
        return;
    };
    let diagnostic_kind = match qualified_name.segments() {
        ["os", "path", "abspath"] => name_match(Rule::OsPathAbspath),
        ["os", "chmod"] => name_match(Rule::OsChmod),
        ["os", "makedirs"] => name_match(Rule::OsMakedirs),
        ["os", "mkdir"] => name_match(Rule::OsMkdir),
        ["os", "rename"] => name_match(Rule::OsRename),
        ["os", "replace"] => name_match(Rule::OsReplace),
        ["os", "rmdir"] => name_match(Rule::OsRmdir),
        ["os", "remove"] => name_match(Rule::OsRemove),
        ["os", "unlink"] => name_match(Rule::OsUnlink),
        ["os", "getcwd" | "getcwdb"] => name_match(Rule::OsGetcwd),
        ["os", "path", "exists"] => name_match(Rule::OsPathExists),
        ["os", "path", "expanduser"] => name_match(Rule::OsPathExpanduser),
        ["os", "path", "isdir"] => name_match(Rule::OsPathIsdir),
        ["os", "path", "isfile"] => name_match(Rule::OsPathIsfile),
        ["os", "path", "islink"] => name_match(Rule::OsPathIslink),
        // `Path.readlink()` only exists on Python 3.9+.
        ["os", "readlink"] => {
            if checker.settings().target_version < PythonVersion::Py39 {
                return;
            }
            name_match(Rule::OsReadlink)
        }
        ["os", "stat"] => name_match(Rule::OsStat),
        ["os", "path", "isabs"] => name_match(Rule::OsPathIsabs),
        ["os", "path", "join"] => join::os_path_join(call),
        ["os", "sep", "join"] => join::os_sep_join(call),
        ["os", "path", "basename"] => name_match(Rule::OsPathBasename),
        ["os", "path", "dirname"] => name_match(Rule::OsPathDirname),
        ["os", "path", "samefile"] => name_match(Rule::OsPathSamefile),
        ["os", "path", "splitext"] => name_match(Rule::OsPathSplitext),
        ["os", "path", "getsize"] => name_match(Rule::OsPathGetsize),
        ["os", "path", "getatime"] => name_match(Rule::OsPathGetatime),
        ["os", "path", "getmtime"] => name_match(Rule::OsPathGetmtime),
        ["os", "path", "getctime"] => name_match(Rule::OsPathGetctime),
        ["" | "builtins", "open"] => open::builtin_open(call, checker.semantic()),
        ["py", "path", "local"] => DiagnosticKind::new(
            Rule::PyPath.to_str(),
            "`py.path.local` is in maintenance mode, use `pathlib` instead",
            Fixability::Fixable,
        ),
        ["glob", function @ ("glob" | "iglob")] => DiagnosticKind::new(
            Rule::Glob.to_str(),
            format!("`glob.{function}()` should be replaced by `Path.glob()` or `Path.rglob()`"),
            Fixability::Fixable,
        ),
        ["os", "listdir"] => name_match(Rule::OsListdir),
        _ => return,
    };
    checker.report_diagnostic(Diagnostic::new(diagnostic_kind, call.func.range()));
}

/// A rule with no argument constraints: fixable on the bare name match,
/// with extraneous arguments ignored (name-based detection ignores arity).
fn name_match(rule: Rule) -> DiagnosticKind {
    DiagnosticKind::new(
        rule.to_str(),
        format!(
            "`{}()` should be replaced by `{}`",
            rule.legacy_call(),
            rule.replacement()
        ),
        Fixability::Fixable,
    )
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use pathlint_diagnostics::{Fixability, UnfixableReason};

    use crate::settings::types::PythonVersion;
    use crate::settings::CheckerSettings;
    use crate::test::{test_snippet, verdicts};

    const FIXABLE: Fixability = Fixability::Fixable;

    #[test_case("import os\nos.mkdir(p)", "os-mkdir"; "mkdir")]
    #[test_case("import os\nos.rmdir(p)", "os-rmdir"; "rmdir")]
    #[test_case("import os\nos.unlink(p)", "os-unlink"; "unlink")]
    #[test_case("import os\nos.getcwd()", "os-getcwd"; "getcwd")]
    #[test_case("import os\nos.getcwdb(p)", "os-getcwd"; "getcwdb with extraneous argument")]
    #[test_case("import os\nos.stat(p)", "os-stat"; "stat")]
    #[test_case("import os.path\nos.path.exists(p)", "os-path-exists"; "submodule attribute chase")]
    #[test_case("import os\nos.listdir(p)", "os-listdir"; "listdir")]
    #[test_case("import glob\nglob.glob(p)", "glob"; "glob")]
    #[test_case("import glob\nglob.iglob(p)", "glob"; "iglob")]
    #[test_case("import py\npy.path.local(p)", "py-path"; "py path local")]
    fn name_matches_are_always_fixable(source: &str, expected: &str) {
        let diagnostics = test_snippet(source, &CheckerSettings::default());
        assert_eq!(verdicts(&diagnostics), [(expected.to_string(), FIXABLE)]);
    }

    #[test_case("import os\nos.getcwd(p)"; "extraneous argument on a zero-argument api")]
    fn arity_is_ignored(source: &str) {
        let diagnostics = test_snippet(source, &CheckerSettings::default());
        assert_eq!(
            verdicts(&diagnostics),
            [("os-getcwd".to_string(), FIXABLE)]
        );
    }

    #[test_case("import os.path as osp\nosp.exists(p)"; "import as")]
    #[test_case("from os import path as osp\nosp.exists(p)"; "from import as")]
    #[test_case("from os import path\npath.exists(p)"; "from import")]
    fn aliases_resolve_to_the_same_rule(source: &str) {
        let diagnostics = test_snippet(source, &CheckerSettings::default());
        assert_eq!(
            verdicts(&diagnostics),
            [("os-path-exists".to_string(), FIXABLE)]
        );
    }

    #[test_case("os = get_module()\nos.mkdir(p)"; "alias reassigned")]
    #[test_case("def open(p):\n    pass\nopen(p)"; "open shadowed by a function")]
    #[test_case("open = gzip.open\nopen(p)"; "open shadowed by a variable")]
    #[test_case("import os\nfp.read()"; "unresolvable callee")]
    #[test_case("import os\nos.path.nonsense(p)"; "unknown member")]
    fn no_match_emits_nothing(source: &str) {
        assert!(test_snippet(source, &CheckerSettings::default()).is_empty());
    }

    #[test]
    fn builtins_open_is_recognized() {
        let diagnostics = test_snippet("import builtins\nbuiltins.open(p)", &CheckerSettings::default());
        assert_eq!(
            verdicts(&diagnostics),
            [("builtin-open".to_string(), FIXABLE)]
        );
    }

    #[test]
    fn readlink_is_gated_on_the_target_version() {
        let source = "import os\nos.readlink(p)";
        let settings = CheckerSettings::default().with_target_version(PythonVersion::Py38);
        assert!(test_snippet(source, &settings).is_empty());

        let settings = CheckerSettings::default().with_target_version(PythonVersion::Py39);
        assert_eq!(
            verdicts(&test_snippet(source, &settings)),
            [("os-readlink".to_string(), FIXABLE)]
        );
    }

    #[test_case("import os\nos.sep.join([p, q])"; "list literal")]
    #[test_case("import os\nos.sep.join((p, q))"; "tuple literal")]
    fn sep_join_of_a_pair_is_fixable(source: &str) {
        assert_eq!(
            verdicts(&test_snippet(source, &CheckerSettings::default())),
            [("os-sep-join".to_string(), FIXABLE)]
        );
    }

    #[test_case("import os\nos.sep.join(p, *q)", UnfixableReason::StarredArgument; "starred argument")]
    #[test_case("import os\nos.sep.join([p, *q])", UnfixableReason::StarredArgument; "starred element")]
    #[test_case("import os\nos.sep.join([p, q, r])", UnfixableReason::MalformedCallShape; "three elements")]
    #[test_case("import os\nos.sep.join(parts)", UnfixableReason::MalformedCallShape; "non-literal argument")]
    fn sep_join_unfixable_shapes(source: &str, reason: UnfixableReason) {
        assert_eq!(
            verdicts(&test_snippet(source, &CheckerSettings::default())),
            [("os-sep-join".to_string(), Fixability::Unfixable(reason))]
        );
    }

    #[test_case("import os\nos.path.join(p, q)"; "plain")]
    #[test_case("import os\nos.path.join(p, *q)"; "starred selects joinpath")]
    fn path_join_is_always_fixable(source: &str) {
        assert_eq!(
            verdicts(&test_snippet(source, &CheckerSettings::default())),
            [("os-path-join".to_string(), FIXABLE)]
        );
    }
}
