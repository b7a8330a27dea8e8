pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use fixability::{Fixability, UnfixableReason};

mod diagnostic;
mod fixability;
