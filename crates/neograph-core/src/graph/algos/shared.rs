use crate::collections::{DisjointSet, IndexedPriorityQueue};
use crate::edge::Edge;
use crate::error::Result;
use crate::vertex::Vertex;

/// Min-queue of edges keyed by weight
pub type EdgeQueue = IndexedPriorityQueue<Edge, f64>;

/// Every unordered pair of distinct positions, weighted by Euclidean distance
pub fn complete_edges(vertices: &[Vertex]) -> Vec<Edge> {
    let n = vertices.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            edges.push(Edge::new(*a, *b));
        }
    }
    edges
}

/// Queue holding every edge keyed by its weight
pub fn edge_queue<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> EdgeQueue {
    let mut queue = EdgeQueue::for_weights();
    for edge in edges {
        queue.enqueue(*edge, edge.weight());
    }
    queue
}

/// Pop edges in ascending weight order, keeping those that join two
/// components, until the queue is empty or one component remains.
pub fn kruskal_drain<S>(queue: &mut EdgeQueue, set: &mut S, solution: &mut Vec<Edge>) -> Result<()>
where
    S: DisjointSet<Vertex>,
{
    while set.count() > 1 {
        let Ok(item) = queue.dequeue() else {
            break;
        };
        let edge = item.value;
        if set.union(&edge.first(), &edge.second())? {
            solution.push(edge);
        }
    }
    Ok(())
}
