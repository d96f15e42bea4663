//! `neokruskal bench` command - time repeated runs of one strategy

use crate::cli::BenchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, records_header};
use neograph_core::error::Result;

/// Execute the bench command
pub fn execute(ctx: &CommandContext, args: &BenchArgs) -> Result<()> {
    let cli = ctx.cli;
    let strategy = ctx.strategy(args.strategy);
    let bucket = ctx.bucket(args.bucket)?;
    let iterations = args.iterations.unwrap_or(ctx.config.iterations);

    let mut graph = ctx.load_graph(&args.file)?;
    let result = graph.benchmark(strategy, bucket, iterations)?;

    output_by_format_result!(cli.format,
        json => { print_json(&result) },
        human => {
            println!(
                "{}: mean {:.3} us over {} runs",
                result.strategy, result.mean_micros, result.iterations
            );
            if !cli.quiet {
                println!(
                    "Total weight: {:.3} ({} edges)",
                    result.solution_weight, result.solution_edges
                );
            }
        },
        records => {
            let mut fields = vec![("strategy", result.strategy.to_string())];
            if let Some(bucket) = result.bucket {
                fields.push(("bucket", bucket.to_string()));
            }
            fields.push(("iterations", result.iterations.to_string()));
            fields.push(("mean_micros", format!("{:.3}", result.mean_micros)));
            fields.push(("solution", result.solution_edges.to_string()));
            fields.push(("weight", format!("{:.6}", result.solution_weight)));
            println!("{}", records_header("bench", &fields));
        }
    )
}
