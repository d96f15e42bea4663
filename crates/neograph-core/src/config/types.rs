use crate::graph::MstStrategy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUCKET_COUNT: usize = 10;
pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Solver defaults, overridden by command-line flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Strategy used when `--strategy` is absent
    pub strategy: MstStrategy,
    /// Bucket count for the bucketed strategies
    pub bucket: usize,
    /// Runs averaged by `bench`
    pub iterations: u32,
    pub canvas: CanvasConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: MstStrategy::default(),
            bucket: DEFAULT_BUCKET_COUNT,
            iterations: DEFAULT_ITERATIONS,
            canvas: CanvasConfig::default(),
        }
    }
}

/// Area random point sets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}
