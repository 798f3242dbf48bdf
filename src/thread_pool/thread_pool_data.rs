//! Thread Pool Data Structures
//!
//! Pure data structures for the render worker pool.
//! No methods, just data.

use rayon::ThreadPool;
use std::ops::Range;

/// Worker pool a renderer dispatches its row bands onto
pub struct RenderThreadPool {
    pub pool: ThreadPool,
    pub thread_count: usize,
}

/// Rows [rows.start, rows.end) owned by one worker for a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBand {
    pub worker: usize,
    pub rows: Range<usize>,
}

impl std::fmt::Debug for RenderThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderThreadPool")
            .field("thread_count", &self.thread_count)
            .finish()
    }
}
