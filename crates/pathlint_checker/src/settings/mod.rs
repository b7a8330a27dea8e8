use self::types::PythonVersion;

pub mod types;

#[derive(Debug, Default)]
pub struct CheckerSettings {
    pub target_version: PythonVersion,
}

impl CheckerSettings {
    pub fn new() -> Self {
        Self {
            target_version: PythonVersion::default(),
        }
    }

    #[must_use]
    pub fn with_target_version(mut self, target_version: PythonVersion) -> Self {
        self.target_version = target_version;
        self
    }
}
