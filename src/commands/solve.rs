//! `neokruskal solve` command - compute one minimum spanning tree

use serde::Serialize;

use crate::cli::SolveArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, records_header};
use neograph_core::edge::Edge;
use neograph_core::error::Result;
use neograph_core::graph::MstStrategy;

#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    strategy: MstStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket: Option<usize>,
    vertices: usize,
    edges: usize,
    total_weight: f64,
    solution: &'a [Edge],
}

/// Execute the solve command
pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let cli = ctx.cli;
    let strategy = ctx.strategy(args.strategy);
    let bucket = ctx.bucket(args.bucket)?;

    let mut graph = ctx.load_graph(&args.file)?;
    let (vertices, edges) = (graph.vertices().len(), graph.edges().len());
    graph.solve(strategy, bucket)?;

    let report = SolveReport {
        strategy,
        bucket: strategy.uses_buckets().then_some(bucket),
        vertices,
        edges,
        total_weight: graph.total_weight(),
        solution: graph.solution(),
    };

    output_by_format_result!(cli.format,
        json => { print_json(&report) },
        human => {
            if !cli.quiet {
                println!(
                    "Strategy: {} ({} vertices, {} edges)",
                    report.strategy, report.vertices, report.edges
                );
                for edge in report.solution {
                    println!(
                        "  {} - {}  {:.3}",
                        edge.first(),
                        edge.second(),
                        edge.weight()
                    );
                }
            }
            println!("Total weight: {:.3}", report.total_weight);
        },
        records => {
            let mut fields = vec![("strategy", report.strategy.to_string())];
            if let Some(bucket) = report.bucket {
                fields.push(("bucket", bucket.to_string()));
            }
            fields.push(("vertices", report.vertices.to_string()));
            fields.push(("edges", report.edges.to_string()));
            fields.push(("solution", report.solution.len().to_string()));
            fields.push(("weight", format!("{:.6}", report.total_weight)));
            println!("{}", records_header("solve", &fields));
            for edge in report.solution {
                println!("E {} {} {:.6}", edge.first(), edge.second(), edge.weight());
            }
        }
    )
}
