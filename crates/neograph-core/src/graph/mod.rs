//! Graph model and MST strategies

pub mod algos;
pub mod bench;
pub mod engine;
pub mod matrix;
pub mod types;

pub use bench::BenchmarkResult;
pub use engine::Graph;
pub use matrix::WeightMatrix;
pub use types::{MstStrategy, WeightBounds};
