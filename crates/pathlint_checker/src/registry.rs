use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use pathlint_diagnostics::DiagnosticKind;

/// The fixed table of recognized legacy file-system calls. Every variant maps
/// one fully-qualified standard-library function onto its `pathlib`
/// replacement.
#[repr(u16)]
#[derive(
    Eq,
    Hash,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    OsPathAbspath,
    OsChmod,
    OsMakedirs,
    OsMkdir,
    OsRename,
    OsReplace,
    OsRmdir,
    OsRemove,
    OsUnlink,
    OsGetcwd,
    OsPathExists,
    OsPathExpanduser,
    OsPathIsdir,
    OsPathIsfile,
    OsPathIslink,
    OsReadlink,
    OsStat,
    OsPathIsabs,
    OsPathJoin,
    OsSepJoin,
    OsPathBasename,
    OsPathDirname,
    OsPathSamefile,
    OsPathSplitext,
    OsPathGetsize,
    OsPathGetatime,
    OsPathGetmtime,
    OsPathGetctime,
    BuiltinOpen,
    PyPath,
    Glob,
    OsListdir,
}

#[derive(thiserror::Error, Debug)]
pub enum FromCodeError {
    #[error("unknown rule code")]
    Unknown,
}

impl Rule {
    pub fn to_str(&self) -> &'static str {
        self.into()
    }

    pub fn from_code(code: &str) -> Result<Self, FromCodeError> {
        code.parse().map_err(|_| FromCodeError::Unknown)
    }

    /// The legacy call this rule matches, for display.
    pub const fn legacy_call(&self) -> &'static str {
        match self {
            Rule::OsPathAbspath => "os.path.abspath",
            Rule::OsChmod => "os.chmod",
            Rule::OsMakedirs => "os.makedirs",
            Rule::OsMkdir => "os.mkdir",
            Rule::OsRename => "os.rename",
            Rule::OsReplace => "os.replace",
            Rule::OsRmdir => "os.rmdir",
            Rule::OsRemove => "os.remove",
            Rule::OsUnlink => "os.unlink",
            Rule::OsGetcwd => "os.getcwd",
            Rule::OsPathExists => "os.path.exists",
            Rule::OsPathExpanduser => "os.path.expanduser",
            Rule::OsPathIsdir => "os.path.isdir",
            Rule::OsPathIsfile => "os.path.isfile",
            Rule::OsPathIslink => "os.path.islink",
            Rule::OsReadlink => "os.readlink",
            Rule::OsStat => "os.stat",
            Rule::OsPathIsabs => "os.path.isabs",
            Rule::OsPathJoin => "os.path.join",
            Rule::OsSepJoin => "os.sep.join",
            Rule::OsPathBasename => "os.path.basename",
            Rule::OsPathDirname => "os.path.dirname",
            Rule::OsPathSamefile => "os.path.samefile",
            Rule::OsPathSplitext => "os.path.splitext",
            Rule::OsPathGetsize => "os.path.getsize",
            Rule::OsPathGetatime => "os.path.getatime",
            Rule::OsPathGetmtime => "os.path.getmtime",
            Rule::OsPathGetctime => "os.path.getctime",
            Rule::BuiltinOpen => "open",
            Rule::PyPath => "py.path.local",
            Rule::Glob => "glob.glob",
            Rule::OsListdir => "os.listdir",
        }
    }

    /// The `pathlib` API that replaces the matched call, for display.
    pub const fn replacement(&self) -> &'static str {
        match self {
            Rule::OsPathAbspath => "Path.resolve()",
            Rule::OsChmod => "Path.chmod()",
            Rule::OsMakedirs => "Path.mkdir(parents=True)",
            Rule::OsMkdir => "Path.mkdir()",
            Rule::OsRename => "Path.rename()",
            Rule::OsReplace => "Path.replace()",
            Rule::OsRmdir => "Path.rmdir()",
            Rule::OsRemove | Rule::OsUnlink => "Path.unlink()",
            Rule::OsGetcwd => "Path.cwd()",
            Rule::OsPathExists => "Path.exists()",
            Rule::OsPathExpanduser => "Path.expanduser()",
            Rule::OsPathIsdir => "Path.is_dir()",
            Rule::OsPathIsfile => "Path.is_file()",
            Rule::OsPathIslink => "Path.is_symlink()",
            Rule::OsReadlink => "Path.readlink()",
            Rule::OsStat => "Path.stat()",
            Rule::OsPathIsabs => "Path.is_absolute()",
            Rule::OsPathJoin | Rule::OsSepJoin => "Path with `/` operator",
            Rule::OsPathBasename => "Path.name",
            Rule::OsPathDirname => "Path.parent",
            Rule::OsPathSamefile => "Path.samefile()",
            Rule::OsPathSplitext => "Path.suffix and Path.stem",
            Rule::OsPathGetsize => "Path.stat().st_size",
            Rule::OsPathGetatime => "Path.stat().st_atime",
            Rule::OsPathGetmtime => "Path.stat().st_mtime",
            Rule::OsPathGetctime => "Path.stat().st_ctime",
            Rule::BuiltinOpen => "Path.open()",
            Rule::PyPath => "Path",
            Rule::Glob => "Path.glob() or Path.rglob()",
            Rule::OsListdir => "Path.iterdir()",
        }
    }
}

pub trait AsRule {
    fn rule(&self) -> Result<Rule, FromCodeError>;
}

impl AsRule for DiagnosticKind {
    fn rule(&self) -> Result<Rule, FromCodeError> {
        Rule::from_code(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use strum::IntoEnumIterator;

    use super::Rule;

    #[test]
    fn check_code_serialization() {
        for rule in Rule::iter() {
            assert!(
                Rule::from_code(&rule.to_string()).is_ok(),
                "{rule:?} could not be round-trip serialized."
            );
        }
    }

    #[test]
    fn serde_codes_match_strum_codes() {
        for rule in Rule::iter() {
            let json = serde_json::to_string(&rule).expect("rule should serialize");
            assert_eq!(json, format!("\"{rule}\""));
        }
    }

    #[test]
    fn rule_size() {
        assert_eq!(2, size_of::<Rule>());
    }
}
