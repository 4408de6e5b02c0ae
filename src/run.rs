//! Generation scheduler.
//!
//! Drives bulk row production: emits the header once, fans row indices
//! out across worker tasks, serializes sink writes, flushes on a fixed
//! cadence, and optionally paces emission with a per-row delay.
//!
//! Each row's RNG seed is derived from the base seed and the row
//! index, so row content is a pure function of its index and is
//! reproducible regardless of worker count or chunk placement;
//! emission ORDER across workers is unspecified. With the
//! default single worker, output is strictly ordered. Pacing is meant
//! for simulating steady streaming sources and is best combined with a
//! single worker: concurrent sleeping workers do not produce one
//! globally steady rate.

use crate::estimate;
use crate::sink::SharedSink;
use anyhow::ensure;
use datagen_rowgen::RowGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Rows between flushes when no pacing delay is configured.
pub const FLUSH_EVERY_ROWS: u64 = 1000;

/// Scheduler options, fixed before a run starts.
#[derive(Debug, Clone)]
pub struct RunOpts {
    /// Number of parallel worker tasks.
    pub workers: usize,
    /// Per-row delay; non-zero pacing forces a flush after every row.
    pub pacing_delay: Duration,
    /// Base RNG seed; each row derives its own RNG seed from this and
    /// the row index.
    pub seed: u64,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            workers: 1,
            pacing_delay: Duration::ZERO,
            seed: 42,
        }
    }
}

/// Metrics from one generation run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Data rows written (the header line is not counted).
    pub rows_written: u64,
    /// Wall-clock duration of the run.
    pub total_duration: Duration,
}

impl RunMetrics {
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Generate exactly `row_count` rows.
pub async fn run_with_row_count(
    rowgen: Arc<RowGenerator>,
    sink: SharedSink,
    row_count: u64,
    opts: RunOpts,
) -> anyhow::Result<RunMetrics> {
    ensure!(opts.workers >= 1, "at least one worker is required");

    let start = Instant::now();

    // Header first, exactly once, before any data row.
    if let Some(header) = rowgen.header_line() {
        sink.lock().await.write_line(&header)?;
    }

    let mut handles = Vec::with_capacity(opts.workers);
    for (worker_id, range) in chunk_indices(row_count, opts.workers).into_iter().enumerate() {
        let rowgen = Arc::clone(&rowgen);
        let sink = Arc::clone(&sink);
        let opts = opts.clone();
        handles.push(tokio::spawn(async move {
            generate_range(rowgen, sink, range, worker_id as u64, opts).await
        }));
    }

    let mut rows_written = 0u64;
    for handle in handles {
        rows_written += handle.await??;
    }

    // Final flush regardless of where the last batch boundary fell.
    sink.lock().await.flush()?;

    let metrics = RunMetrics {
        rows_written,
        total_duration: start.elapsed(),
    };
    tracing::info!(
        "Generated {} rows in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.total_duration,
        metrics.rows_per_second()
    );
    Ok(metrics)
}

/// Estimate a row count for the megabyte target, then generate it.
///
/// The estimate is fully computed before generation begins.
pub async fn run_with_byte_budget(
    rowgen: Arc<RowGenerator>,
    sink: SharedSink,
    megabytes: u64,
    opts: RunOpts,
) -> anyhow::Result<RunMetrics> {
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let row_count = estimate::estimate_row_count(megabytes, &rowgen, &mut rng);
    tracing::info!(
        "Estimated {} rows for a {} MB target",
        row_count,
        megabytes
    );
    run_with_row_count(rowgen, sink, row_count, opts).await
}

/// Per-row RNG seed, derived from the base seed and the row index.
/// Golden-ratio multiplication spreads consecutive indices across the
/// seed space, and ties row content to the index alone rather than to
/// worker count or chunk placement.
fn row_seed(base_seed: u64, index: u64) -> u64 {
    base_seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// One worker: generate its contiguous index range and append each line
/// to the shared sink.
async fn generate_range(
    rowgen: Arc<RowGenerator>,
    sink: SharedSink,
    range: RangeInclusive<u64>,
    worker_id: u64,
    opts: RunOpts,
) -> anyhow::Result<u64> {
    let pacing = !opts.pacing_delay.is_zero();
    let mut written = 0u64;

    for index in range {
        let mut rng = StdRng::seed_from_u64(row_seed(opts.seed, index));
        let line = rowgen.generate_line(index, &mut rng);
        {
            let mut sink = sink.lock().await;
            sink.write_line(&line)?;
            written += 1;
            // Pacing trades throughput for a steady emission rate and
            // forces a flush on every row.
            if pacing || written % FLUSH_EVERY_ROWS == 0 {
                sink.flush()?;
            }
        }
        if pacing {
            tokio::time::sleep(opts.pacing_delay).await;
        }
        if written % 100_000 == 0 {
            tracing::debug!("worker {} wrote {} rows", worker_id, written);
        }
    }

    Ok(written)
}

/// Split `1..=row_count` into up to `workers` contiguous chunks.
fn chunk_indices(row_count: u64, workers: usize) -> Vec<RangeInclusive<u64>> {
    let workers = workers as u64;
    let base = row_count / workers;
    let remainder = row_count % workers;

    let mut chunks = Vec::new();
    let mut start = 1u64;
    for worker in 0..workers {
        let len = base + u64::from(worker < remainder);
        if len == 0 {
            continue;
        }
        chunks.push(start..=start + len - 1);
        start += len;
    }
    chunks
}
