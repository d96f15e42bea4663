use clap::Args;
use neograph_core::graph::MstStrategy;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// MST strategy (defaults to the configured strategy)
    #[arg(long, short, value_enum)]
    pub strategy: Option<MstStrategy>,

    /// Bucket count for the bucketed strategies
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub bucket: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of points
    #[arg(long, short = 'n')]
    pub count: usize,

    /// Canvas width (defaults to the configured canvas)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Canvas height (defaults to the configured canvas)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Seed for reproducible point sets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Declare every pairwise edge
    #[arg(long)]
    pub complete: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// MST strategy (defaults to the configured strategy)
    #[arg(long, short, value_enum)]
    pub strategy: Option<MstStrategy>,

    /// Bucket count for the bucketed strategies
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub bucket: Option<u64>,

    /// Number of timed runs
    #[arg(long, short = 'i', value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: Option<u32>,
}
