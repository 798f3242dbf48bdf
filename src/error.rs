//! Unified error handling for Arena Engine
//!
//! Only structural failures travel through these types. Recoverable decode
//! problems (missing parameters, malformed tiles) are logged and substituted
//! where they happen and never become an EngineError.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for Arena Engine
#[derive(Debug)]
pub enum EngineError {
    // World Errors
    VoxelOutOfBounds {
        pos: (i32, i32, i32),
        dims: (usize, usize, usize),
    },
    DefinitionOutOfRange {
        kind: String,
        id: usize,
        count: usize,
    },
    CatalogFull {
        kind: String,
        max: usize,
    },
    InvalidLayerSize {
        layer: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
    GenerationFailed {
        stage: String,
        reason: String,
    },

    // Resource Errors
    BufferAccess {
        index: usize,
        size: usize,
    },
    InvalidTexture {
        id: String,
        reason: String,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System Errors
    InitializationError(String),
    IoError {
        path: String,
        error: String,
    },
    ValidationFailed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::VoxelOutOfBounds { pos, dims } => write!(
                f,
                "Voxel position {:?} out of bounds for grid {:?}",
                pos, dims
            ),
            EngineError::DefinitionOutOfRange { kind, id, count } => write!(
                f,
                "{} definition ID {} out of range (catalog holds {})",
                kind, id, count
            ),
            EngineError::CatalogFull { kind, max } => {
                write!(f, "{} catalog full: at most {} definitions", kind, max)
            }
            EngineError::InvalidLayerSize {
                layer,
                expected,
                found,
            } => write!(
                f,
                "Layer {} has size {:?}, expected {:?}",
                layer, found, expected
            ),
            EngineError::GenerationFailed { stage, reason } => {
                write!(f, "Generation failed during {}: {}", stage, reason)
            }

            EngineError::BufferAccess { index, size } => write!(
                f,
                "Buffer access out of bounds: index {} >= size {}",
                index, size
            ),
            EngineError::InvalidTexture { id, reason } => {
                write!(f, "Invalid texture {}: {}", id, reason)
            }

            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            EngineError::InitializationError(msg) => write!(f, "Initialization error: {}", msg),
            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            EngineError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl StdError for EngineError {}

/// Type alias for Results in Arena Engine
pub type EngineResult<T> = Result<T, EngineError>;

impl From<rayon::ThreadPoolBuildError> for EngineError {
    fn from(error: rayon::ThreadPoolBuildError) -> Self {
        EngineError::InitializationError(format!("render thread pool: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::VoxelOutOfBounds {
            pos: (4, 1, -1),
            dims: (4, 3, 4),
        };
        assert_eq!(
            err.to_string(),
            "Voxel position (4, 1, -1) out of bounds for grid (4, 3, 4)"
        );

        let err = EngineError::DefinitionOutOfRange {
            kind: "voxel".to_string(),
            id: 9,
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "voxel definition ID 9 out of range (catalog holds 3)"
        );
    }
}
