//! Render worker pool
//!
//! A rayon pool sized to the hardware (or the configured count) plus the
//! row-band partition each frame is split into.

pub mod thread_pool_data;
pub mod thread_pool_operations;

pub use thread_pool_data::{RenderThreadPool, RowBand};
pub use thread_pool_operations::{compute_row_bands, create_render_thread_pool, resolve_thread_count};
