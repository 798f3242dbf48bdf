/// World Error Handling
///
/// Generator-level failures. These are structural problems with the inputs
/// (missing chunk layouts, impossible dungeon shapes) that stop a generation
/// call outright. Everything recoverable is logged and substituted instead.
use crate::error::{EngineError, EngineResult};

/// Result type for generation entry points
pub type GenerationResult<T> = EngineResult<T>;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("dungeon of {width}x{depth} chunks cannot hold {levels} distinct level transitions")]
    DegenerateDungeon {
        width: usize,
        depth: usize,
        levels: usize,
    },

    #[error("dungeon chunk pool has {found} layouts, expected {expected}")]
    ChunkPoolSize { expected: usize, found: usize },

    #[error("city block layout '{0}' not available")]
    MissingCityBlock(String),

    #[error("wilderness block {0} has no chunk layout")]
    MissingWildBlock(u16),

    #[error("table '{table}' has {found} entries, expected at least {expected}")]
    TableTooShort {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl From<GenerationError> for EngineError {
    fn from(err: GenerationError) -> Self {
        let stage = match &err {
            GenerationError::DegenerateDungeon { .. } | GenerationError::ChunkPoolSize { .. } => {
                "dungeon"
            }
            GenerationError::MissingCityBlock(_) => "city",
            GenerationError::MissingWildBlock(_) => "wilderness",
            GenerationError::TableTooShort { .. } => "tables",
            GenerationError::InvalidLayout(_) => "layout",
        };
        EngineError::GenerationFailed {
            stage: stage.to_string(),
            reason: err.to_string(),
        }
    }
}
