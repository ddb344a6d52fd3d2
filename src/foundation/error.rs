/// Convenience result type used across framesmith.
pub type FramesmithResult<T> = Result<T, FramesmithError>;

/// Top-level error taxonomy used by compiler APIs.
///
/// Only the first three variants are raised by a compile itself; every other anomaly in a
/// report is absorbed by per-field defaulting.
#[derive(thiserror::Error, Debug)]
pub enum FramesmithError {
    /// No report document was supplied at all.
    #[error("missing payload: no report document was supplied")]
    MissingPayload,

    /// The resolved screen list is empty.
    #[error("no screens found: the report contains no screens to render")]
    NoScreensFound,

    /// Neither the primary nor the fallback font family could be readied by the host.
    #[error("font resource unavailable: {0}")]
    FontResourceUnavailable(String),

    /// Invalid configuration or explicitly validated values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramesmithError {
    /// Build a [`FramesmithError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramesmithError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FramesmithError::FontResourceUnavailable`] value.
    pub fn font_unavailable(msg: impl Into<String>) -> Self {
        Self::FontResourceUnavailable(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
