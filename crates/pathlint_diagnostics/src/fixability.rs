use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Whether a matched call site can be rewritten to the equivalent `pathlib`
/// call without a behavior change. A call is presumed fixable unless the
/// analysis produced positive evidence of an incompatibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, is_macro::Is, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fixability {
    Fixable,
    Unfixable(UnfixableReason),
}

/// The concrete incompatibility that blocks a rewrite.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum UnfixableReason {
    /// The path argument is provably an integer file descriptor.
    #[strum(serialize = "file-descriptor")]
    FileDescriptor,
    /// The path argument is provably a byte string.
    #[strum(serialize = "bytes-path")]
    BytesPath,
    /// A keyword the `pathlib` API does not support is set to a non-default
    /// value (`closefd`, `opener`).
    #[strum(serialize = "unsupported-keyword")]
    UnsupportedKeyword,
    /// The call uses a starred argument that would have to be unpacked.
    #[strum(serialize = "starred-argument")]
    StarredArgument,
    /// The arguments cannot be mapped back to the canonical parameter order.
    #[strum(serialize = "malformed-call-shape")]
    MalformedCallShape,
}

impl Fixability {
    /// The reason blocking the rewrite, if any.
    pub const fn reason(self) -> Option<UnfixableReason> {
        match self {
            Fixability::Fixable => None,
            Fixability::Unfixable(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{Fixability, UnfixableReason};

    #[test]
    fn reason_codes_round_trip() {
        for reason in UnfixableReason::iter() {
            assert_eq!(
                UnfixableReason::from_str(&reason.to_string()),
                Ok(reason),
                "{reason:?} could not be round-trip serialized."
            );
        }
    }

    #[test]
    fn fixable_has_no_reason() {
        assert_eq!(Fixability::Fixable.reason(), None);
        assert_eq!(
            Fixability::Unfixable(UnfixableReason::BytesPath).reason(),
            Some(UnfixableReason::BytesPath)
        );
        assert!(Fixability::Fixable.is_fixable());
    }
}
