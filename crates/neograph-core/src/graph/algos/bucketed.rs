//! Kruskal over weight-range buckets
//!
//! Edges are spread over `bucket` equal-width weight intervals between the
//! bounds, each with its own min-queue. Buckets are drained in ascending index
//! order, which visits every edge in the same ascending weight order a single
//! queue would. A queue exists only for buckets that receive an edge, so the
//! bucket count never drives allocation.

use super::shared::{complete_edges, edge_queue, kruskal_drain, EdgeQueue};
use crate::collections::DisjointSet;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::graph::types::WeightBounds;
use crate::vertex::Vertex;
use std::collections::BTreeMap;
use tracing::debug;

/// Bucket for `weight` in `[0, bucket - 1]`.
///
/// Weights outside the bounds land in the first or last bucket. Callers must
/// pass non-degenerate bounds and `bucket >= 1`.
pub fn bucket_index(weight: f64, bounds: WeightBounds, bucket: usize) -> usize {
    let last = bucket.saturating_sub(1);
    let scaled = ((weight - bounds.min) / bounds.span()) * last as f64;
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        // float-to-int casts saturate
        (scaled.floor() as usize).min(last)
    }
}

/// Bucketed Kruskal over the declared edges.
///
/// `S` selects the disjoint-set flavor. When every weight falls in a single
/// point (`bounds.min == bounds.max`) the edges go through one queue instead.
#[tracing::instrument(
    skip_all,
    fields(vertices = vertices.len(), edges = edges.len(), bucket = bucket)
)]
pub fn bucketed_kruskal<S>(
    vertices: &[Vertex],
    edges: &[Edge],
    bucket: usize,
    bounds: WeightBounds,
) -> Result<Vec<Edge>>
where
    S: DisjointSet<Vertex> + Default,
{
    if bucket < 1 {
        return Err(GraphError::InvalidBucketCount { bucket });
    }
    bounds.validate()?;

    let mut solution = Vec::new();
    if vertices.is_empty() {
        return Ok(solution);
    }

    let mut set = S::default();
    for vertex in vertices {
        set.make_set(*vertex);
    }

    if bounds.is_degenerate() {
        debug!(weight = bounds.min, "all weights equal, using a single queue");
        let mut queue = edge_queue(edges);
        kruskal_drain(&mut queue, &mut set, &mut solution)?;
        return Ok(solution);
    }

    let mut buckets: BTreeMap<usize, EdgeQueue> = BTreeMap::new();
    for edge in edges {
        buckets
            .entry(bucket_index(edge.weight(), bounds, bucket))
            .or_insert_with(EdgeQueue::for_weights)
            .enqueue(*edge, edge.weight());
    }

    for queue in buckets.values_mut() {
        if set.count() <= 1 {
            break;
        }
        kruskal_drain(queue, &mut set, &mut solution)?;
    }

    debug!(
        edges = solution.len(),
        components = set.count(),
        occupied = buckets.len(),
        "bucketed_kruskal"
    );
    Ok(solution)
}

/// Bucketed Kruskal over the complete Euclidean edge set, with bounds taken
/// from the shortest and longest pairwise distance.
pub fn euclidean_bucketed_kruskal<S>(vertices: &[Vertex], bucket: usize) -> Result<Vec<Edge>>
where
    S: DisjointSet<Vertex> + Default,
{
    if bucket < 1 {
        return Err(GraphError::InvalidBucketCount { bucket });
    }
    let edges = complete_edges(vertices);
    match WeightBounds::from_edges(&edges) {
        Some(bounds) => bucketed_kruskal::<S>(vertices, &edges, bucket, bounds),
        None => Ok(Vec::new()),
    }
}
