use std::fmt;

/// A dot-separated path identifying a standard-library symbol independent of
/// local aliasing, like `os.path.join`.
///
/// Builtins carry a leading empty segment (`["", "open"]`) so that they never
/// collide with a single-segment module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName<'a> {
    segments: Vec<&'a str>,
}

impl<'a> QualifiedName<'a> {
    /// Create a [`QualifiedName`] for an unbound name that falls back to the
    /// builtin namespace.
    pub fn builtin(name: &'a str) -> Self {
        debug_assert!(!name.contains('.'));
        Self {
            segments: vec!["", name],
        }
    }

    /// Create a [`QualifiedName`] from a dotted import path, like `os.path`.
    pub fn from_dotted_name(name: &'a str) -> Self {
        Self {
            segments: name.split('.').collect(),
        }
    }

    /// Extend the path by one attribute access, like `os.path` → `os.path.join`.
    #[must_use]
    pub fn append_member(mut self, member: &'a str) -> Self {
        self.segments.push(member);
        self
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn is_builtin(&self) -> bool {
        self.segments.first() == Some(&"")
    }
}

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = match self.segments.as_slice() {
            ["", rest @ ..] => rest,
            segments => segments,
        };
        let mut first = true;
        for segment in segments {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::QualifiedName;

    #[test]
    fn from_dotted_name_splits_segments() {
        let name = QualifiedName::from_dotted_name("os.path");
        assert_eq!(name.segments(), ["os", "path"]);
        assert_eq!(name.to_string(), "os.path");
    }

    #[test]
    fn builtins_are_marked_with_an_empty_segment() {
        let name = QualifiedName::builtin("open");
        assert!(name.is_builtin());
        assert_eq!(name.segments(), ["", "open"]);
        assert_eq!(name.to_string(), "open");
    }

    #[test]
    fn append_member_extends_the_path() {
        let name = QualifiedName::from_dotted_name("os.path").append_member("join");
        assert_eq!(name.segments(), ["os", "path", "join"]);
    }
}
