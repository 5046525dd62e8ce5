use thiserror::Error;

/// Errors surfaced by the surface-generation core.
///
/// Two kinds suffice: caller-supplied parameters that violate a
/// precondition, and internally detected degenerate numeric conditions.
/// Neither is recovered locally and no partial result accompanies either.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A precondition on caller input was violated (non-positive point
    /// counts, non-positive lengths, negative rms height).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A degenerate numeric condition was detected mid-pipeline, with the
    /// failing stage named so the caller can identify where it arose.
    #[error("numerical error in {stage}: {reason}")]
    Numerical {
        stage: &'static str,
        reason: String,
    },
}

impl SurfaceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn numerical(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Numerical {
            stage,
            reason: reason.into(),
        }
    }
}
