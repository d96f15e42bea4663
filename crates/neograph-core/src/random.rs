//! Random point sets

use crate::error::Result;
use crate::graph::Graph;
use crate::vertex::Vertex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `count` uniformly distributed points in `[0, width) x [0, height)`.
///
/// The same seed always yields the same points; `None` seeds from entropy.
/// Points may repeat.
pub fn random_vertices(
    count: usize,
    width: u32,
    height: u32,
    seed: Option<u64>,
) -> Result<Vec<Vertex>> {
    let width = canvas_extent("canvas width", width)?;
    let height = canvas_extent("canvas height", height)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok((0..count)
        .map(|_| Vertex::new(rng.gen_range(0..width), rng.gen_range(0..height)))
        .collect())
}

/// Random points as a graph, optionally with every pairwise edge declared
pub fn random_graph(
    count: usize,
    width: u32,
    height: u32,
    seed: Option<u64>,
    complete: bool,
) -> Result<Graph> {
    let mut graph = Graph::with_vertices(random_vertices(count, width, height, seed)?);
    if complete {
        graph.connect_all();
    }
    Ok(graph)
}

fn canvas_extent(context: &str, extent: u32) -> Result<i32> {
    match i32::try_from(extent) {
        Ok(extent) if extent > 0 => Ok(extent),
        _ => crate::bail_invalid!(context, format!("{} (must be between 1 and {})", extent, i32::MAX)),
    }
}
