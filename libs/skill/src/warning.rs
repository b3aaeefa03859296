use std::fmt;

use tracing::warn;

/// Categories of non-fatal platform recommendation breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A value falls outside the platform's recommended bounds.
    FieldConstraint,
    /// The field is accepted by this builder but not honored by the platform.
    UnsupportedField,
}

/// A soft violation recorded while constructing a component.
///
/// Warnings never block construction or serialization; the offending value is
/// kept exactly as the caller supplied it. Each warning is stored on the
/// owning component and mirrored onto the `tracing` warn channel the moment
/// it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn field_constraint(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::FieldConstraint,
            message: message.into(),
        }
    }

    pub fn unsupported_field(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::UnsupportedField,
            message: message.into(),
        }
    }

    pub(crate) fn record(self, sink: &mut Vec<Warning>) {
        warn!(kind = ?self.kind, "{}", self.message);
        sink.push(self);
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
