//! `neokruskal generate` command - random graph documents

use crate::cli::GenerateArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use neograph_core::document::GraphDocument;
use neograph_core::error::Result;
use neograph_core::random::random_graph;
use tracing::debug;

/// Execute the generate command.
///
/// The document is always printed as JSON so it can be fed back to `solve`.
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let width = args.width.unwrap_or(ctx.config.canvas.width);
    let height = args.height.unwrap_or(ctx.config.canvas.height);

    let graph = random_graph(args.count, width, height, args.seed, args.complete)?;
    debug!(
        vertices = graph.vertices().len(),
        edges = graph.edges().len(),
        width,
        height,
        "generated"
    );

    print_json(&GraphDocument::from_graph(&graph)?)
}
