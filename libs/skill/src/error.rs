use thiserror::Error;

/// Failures raised while building or serializing a skill response.
///
/// The two variants are deliberate: coercion failures mean the caller handed
/// in a value that has no canonical form, structure failures mean a mandatory
/// platform contract cannot be satisfied. Neither is retryable.
#[derive(Debug, Error)]
pub enum SkillError {
    /// A loosely typed input could not be coerced into the canonical type.
    #[error("cannot convert `{value}` into {target}")]
    Conversion {
        value: String,
        target: &'static str,
    },
    /// A mandatory cross-field or cardinality contract was violated.
    #[error("{0}")]
    Structure(String),
}

impl SkillError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        SkillError::Structure(message.into())
    }

    pub(crate) fn conversion(value: impl ToString, target: &'static str) -> Self {
        SkillError::Conversion {
            value: value.to_string(),
            target,
        }
    }
}
