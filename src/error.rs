use std::fmt;

/// Result type for featvis operations
pub type Result<T> = std::result::Result<T, FeatVisError>;

/// Main error type for the featvis library
#[derive(Debug, Clone, PartialEq)]
pub enum FeatVisError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Index past the end of an axis
    IndexOutOfBounds {
        axis: String,
        index: usize,
        len: usize,
    },

    /// Layer missing from the branch table
    UnknownLayer(String),

    /// Branch name that is not one of 1x1, 3x3, 5x5, pool_reduce
    UnknownBranch(String),

    /// Named tensor could not be fetched from the model
    TensorAccess {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for FeatVisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatVisError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            FeatVisError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            FeatVisError::IndexOutOfBounds { axis, index, len } => {
                write!(f, "Index {} out of bounds for {} axis of length {}", index, axis, len)
            }
            FeatVisError::UnknownLayer(layer) => write!(f, "Unknown layer: {}", layer),
            FeatVisError::UnknownBranch(branch) => write!(f, "Unknown branch: {}", branch),
            FeatVisError::TensorAccess { name, reason } => {
                write!(f, "Failed to fetch tensor '{}': {}", name, reason)
            }
            FeatVisError::IoError(msg) => write!(f, "IO error: {}", msg),
            FeatVisError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FeatVisError {}

// Conversion from std::io::Error
impl From<std::io::Error> for FeatVisError {
    fn from(err: std::io::Error) -> Self {
        FeatVisError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FeatVisError {
    fn from(err: serde_json::Error) -> Self {
        FeatVisError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl FeatVisError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        FeatVisError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        FeatVisError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn index_out_of_bounds<S: Into<String>>(axis: S, index: usize, len: usize) -> Self {
        FeatVisError::IndexOutOfBounds {
            axis: axis.into(),
            index,
            len,
        }
    }

    pub fn tensor_access<S: Into<String>>(name: S, reason: S) -> Self {
        FeatVisError::TensorAccess {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
