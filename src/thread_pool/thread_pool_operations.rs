//! Thread Pool Operations
//!
//! Pool construction and the static row-band split used by the renderer.

use super::thread_pool_data::{RenderThreadPool, RowBand};
use crate::error::{EngineError, EngineResult};
use rayon::ThreadPoolBuilder;

/// Requested count, or the hardware parallelism when absent. Never below 1.
pub fn resolve_thread_count(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(num_cpus::get).max(1)
}

pub fn create_render_thread_pool(requested: Option<usize>) -> EngineResult<RenderThreadPool> {
    if requested == Some(0) {
        return Err(EngineError::InitializationError(
            "render thread count must be at least 1".to_string(),
        ));
    }

    let thread_count = resolve_thread_count(requested);
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .thread_name(|idx| format!("render-worker-{}", idx))
        .build()?;

    log::info!(
        "[thread_pool::create_render_thread_pool] {} render worker(s)",
        thread_count
    );
    Ok(RenderThreadPool { pool, thread_count })
}

/// Split `height` rows into `band_count` contiguous bands with proportional
/// rounding: band i covers [round(i*h/n), round((i+1)*h/n)). Bands cover
/// every row exactly once; some are empty when there are more bands than rows.
pub fn compute_row_bands(height: usize, band_count: usize) -> Vec<RowBand> {
    let band_count = band_count.max(1);
    let boundary = |i: usize| ((i as f64 * height as f64) / band_count as f64).round() as usize;

    (0..band_count)
        .map(|worker| RowBand {
            worker,
            rows: boundary(worker)..boundary(worker + 1).min(height),
        })
        .collect()
}
