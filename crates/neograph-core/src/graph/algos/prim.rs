use crate::collections::IndexedPriorityQueue;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::graph::matrix::WeightMatrix;
use crate::vertex::Vertex;
use tracing::debug;

/// Index of the vertex every Prim run grows from
const SOURCE: usize = 0;

/// Per-vertex bookkeeping for Prim
#[derive(Debug, Clone, Copy)]
struct PrimEntry {
    known: bool,
    distance: f64,
    predecessor: Option<usize>,
}

impl PrimEntry {
    const UNSEEN: PrimEntry = PrimEntry {
        known: false,
        distance: f64::INFINITY,
        predecessor: None,
    };
}

/// Grow a tree from [`SOURCE`] over `n` vertices.
///
/// `weight(a, b)` returns the weight of the edge from `a` to `b`, or `None`
/// when there is none. The queue may hold stale entries for a vertex whose
/// distance has since improved; they are skipped once the vertex is known.
fn grow_tree(n: usize, weight: impl Fn(usize, usize) -> Option<f64>) -> Vec<PrimEntry> {
    let mut table = vec![PrimEntry::UNSEEN; n];
    if n == 0 {
        return table;
    }
    table[SOURCE].distance = 0.0;

    let mut queue: IndexedPriorityQueue<usize, f64> = IndexedPriorityQueue::for_weights();
    queue.enqueue(SOURCE, 0.0);

    while let Ok(item) = queue.dequeue() {
        let v0 = item.value;
        if table[v0].known {
            continue;
        }
        table[v0].known = true;

        for v1 in 0..n {
            if v1 == v0 || table[v1].known {
                continue;
            }
            let Some(d) = weight(v0, v1) else {
                continue;
            };
            if d < table[v1].distance {
                table[v1].distance = d;
                table[v1].predecessor = Some(v0);
                queue.enqueue(v1, d);
            }
        }
    }

    table
}

/// Prim over every vertex pair, recomputing the Euclidean distance to each
/// newly reached vertex.
///
/// The solution lists one edge per reached non-source vertex, in vertex
/// order, joining it to its predecessor.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn prim_euclidean(vertices: &[Vertex]) -> Vec<Edge> {
    let table = grow_tree(vertices.len(), |a, b| {
        Some(vertices[a].distance(&vertices[b]))
    });

    let solution: Vec<Edge> = table
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            entry
                .predecessor
                .map(|p| Edge::new(vertices[i], vertices[p]))
        })
        .collect();

    debug!(edges = solution.len(), "prim_euclidean");
    solution
}

/// Prim over a dense weight matrix indexed by vertex position.
///
/// Non-positive entries are missing edges. Vertices not reachable from the
/// first vertex contribute no edge. Each solution edge carries the matrix
/// weight it was reached through.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn prim_matrix(vertices: &[Vertex], matrix: &WeightMatrix) -> Result<Vec<Edge>> {
    if matrix.size() != vertices.len() {
        return Err(GraphError::invalid_matrix(format!(
            "matrix is {0}x{0} but the graph has {1} vertices",
            matrix.size(),
            vertices.len()
        )));
    }

    let table = grow_tree(vertices.len(), |a, b| matrix.edge(a, b));

    let solution: Vec<Edge> = table
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            entry
                .predecessor
                .map(|p| Edge::with_weight(vertices[i], vertices[p], entry.distance))
        })
        .collect();

    let unreached = table.iter().filter(|entry| !entry.known).count();
    debug!(edges = solution.len(), unreached, "prim_matrix");
    Ok(solution)
}
