use thiserror::Error;

/// Why a single operation call failed.
///
/// Callers on the host side never see this type; the service boundary turns
/// it into the operation's fallback value. It is kept intact up to that
/// point so the full detail can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Argument outside the operation's domain (negative n, NaN, ...)
    #[error("{op}: {message}")]
    Domain { op: &'static str, message: String },

    /// Argument inside the domain but above the configured work bound
    #[error("{op}: input {value} exceeds limit {limit}")]
    TooLarge {
        op: &'static str,
        value: i64,
        limit: i64,
    },

    /// Unexpected fault inside the computation (caught panic, kernel error)
    #[error("internal fault: {0}")]
    Internal(String),

    /// The process-wide runtime failed to initialize
    #[error("core not initialized: {0}")]
    Uninitialized(String),
}

impl CoreError {
    pub fn domain(op: &'static str, message: impl Into<String>) -> Self {
        CoreError::Domain {
            op,
            message: message.into(),
        }
    }

    pub fn too_large(op: &'static str, value: i64, limit: i64) -> Self {
        CoreError::TooLarge { op, value, limit }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
