//! Repeated timed runs of one strategy

use super::engine::Graph;
use super::types::MstStrategy;
use crate::error::Result;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Timing summary for repeated runs of one strategy
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub strategy: MstStrategy,
    /// Bucket count, for strategies that use one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<usize>,
    pub iterations: u32,
    pub mean_micros: f64,
    pub total_micros: f64,
    pub solution_edges: usize,
    pub solution_weight: f64,
}

impl BenchmarkResult {
    pub fn mean(&self) -> Duration {
        Duration::from_secs_f64(self.mean_micros / 1_000_000.0)
    }
}

impl Graph {
    /// Run `strategy` `iterations` times and report the mean wall-clock time.
    ///
    /// The solution of the last run stays on the graph.
    pub fn benchmark(
        &mut self,
        strategy: MstStrategy,
        bucket: usize,
        iterations: u32,
    ) -> Result<BenchmarkResult> {
        if iterations == 0 {
            crate::bail_invalid!("iterations", "0 (must be at least 1)");
        }

        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            self.solve(strategy, bucket)?;
            total += start.elapsed();
        }

        let total_micros = total.as_secs_f64() * 1_000_000.0;
        let result = BenchmarkResult {
            strategy,
            bucket: strategy.uses_buckets().then_some(bucket),
            iterations,
            mean_micros: total_micros / f64::from(iterations),
            total_micros,
            solution_edges: self.solution().len(),
            solution_weight: self.total_weight(),
        };
        debug!(
            strategy = strategy.as_str(),
            iterations,
            mean_micros = result.mean_micros,
            "benchmark"
        );
        Ok(result)
    }
}
