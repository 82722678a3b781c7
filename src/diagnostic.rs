//! Structured diagnostics handed to the host.
//!
//! A decode deposits at most one warning per condition (a nonzero storage
//! type, skipped out-of-range palette indices) and, on failure, exactly one
//! error record. The host decides how
//! to render them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::RixError;

/// Tag of the warning emitted when pixels referenced a palette slot that
/// does not exist.
pub const INVALID_COLORMAP_INDEX: &str = "InvalidColormapIndex";

/// Tag of the warning emitted when the header's storage type is not 0 (plain
/// uncompressed indices).
pub const UNKNOWN_STORAGE_TYPE: &str = "UnknownStorageType";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// One diagnostic record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable machine-readable tag, e.g. `"UnexpectedEndOfFile"`.
    pub tag: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub fn warning(tag: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            tag,
            message: message.into(),
        }
    }

    /// Error record for a failed decode.
    pub fn from_error(err: &RixError) -> Self {
        Self {
            severity: Severity::Error,
            tag: err.tag(),
            message: err.to_string(),
        }
    }
}

/// Receiver of diagnostic records.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that drops every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Sink that forwards records to the [`log`] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{}: {}", diagnostic.tag, diagnostic.message),
            Severity::Error => log::error!("{}: {}", diagnostic.tag, diagnostic.message),
        }
    }
}
