use thiserror::Error;

/// Result type for bouquet operations
pub type Result<T> = std::result::Result<T, BouquetError>;

/// Errors that can occur while assembling bouquets
#[derive(Error, Debug)]
pub enum BouquetError {
    /// A specification line did not describe a bouquet
    #[error("Malformed bouquet specification {line:?}: {reason}")]
    MalformedSpec { line: String, reason: String },

    /// An arrival line did not describe a flower
    #[error("Malformed flower record {line:?}: {reason}")]
    MalformedArrival { line: String, reason: String },

    /// The storage counter went past its ceiling
    #[error("No more available space in storage")]
    StorageExhausted { capacity: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BouquetError {
    /// Create a malformed specification error
    pub fn malformed_spec(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSpec {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed arrival error
    pub fn malformed_arrival(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedArrival {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for the one condition that terminates a run
    #[must_use]
    pub const fn is_storage_exhausted(&self) -> bool {
        matches!(self, Self::StorageExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_exhausted_message_is_fixed() {
        let err = BouquetError::StorageExhausted { capacity: 256 };
        assert_eq!(err.to_string(), "No more available space in storage");
        assert!(err.is_storage_exhausted());
    }

    #[test]
    fn malformed_messages_name_the_line() {
        let err = BouquetError::malformed_arrival("7Q", "expected <kind><Size>");
        assert!(err.to_string().contains("\"7Q\""));
        assert!(!err.is_storage_exhausted());
    }
}
