use super::shared::{complete_edges, edge_queue, kruskal_drain};
use crate::collections::{DisjointSet, NaiveDisjointSet};
use crate::edge::Edge;
use crate::error::Result;
use crate::vertex::Vertex;
use tracing::debug;

/// Kruskal over the declared edges using the naive disjoint set.
///
/// Every edge endpoint must be one of `vertices`. On a disconnected input the
/// result is a spanning forest.
#[tracing::instrument(skip_all, fields(vertices = vertices.len(), edges = edges.len()))]
pub fn kruskal(vertices: &[Vertex], edges: &[Edge]) -> Result<Vec<Edge>> {
    let mut solution = Vec::new();
    if vertices.is_empty() {
        return Ok(solution);
    }

    let mut set = NaiveDisjointSet::from_keys(vertices.iter().copied());
    let mut queue = edge_queue(edges);
    kruskal_drain(&mut queue, &mut set, &mut solution)?;

    debug!(
        edges = solution.len(),
        components = set.count(),
        unvisited = queue.len(),
        "kruskal"
    );
    Ok(solution)
}

/// Kruskal over the complete Euclidean edge set of `vertices`
pub fn euclidean_kruskal(vertices: &[Vertex]) -> Result<Vec<Edge>> {
    kruskal(vertices, &complete_edges(vertices))
}
