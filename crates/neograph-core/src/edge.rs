//! Weighted undirected edges

use crate::vertex::Vertex;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// An undirected edge between two vertices.
///
/// The weight defaults to the Euclidean length between the endpoints and can be
/// overridden. Equality ignores the weight and the endpoint order: `(a, b)`
/// equals `(b, a)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    first: Vertex,
    second: Vertex,
    weight: f64,
}

impl Edge {
    /// Edge weighted by the Euclidean distance between its endpoints
    pub fn new(first: Vertex, second: Vertex) -> Self {
        Self {
            first,
            second,
            weight: first.distance(&second),
        }
    }

    /// Edge with an explicit weight
    pub fn with_weight(first: Vertex, second: Vertex, weight: f64) -> Self {
        Self {
            first,
            second,
            weight,
        }
    }

    pub fn first(&self) -> Vertex {
        self.first
    }

    pub fn second(&self) -> Vertex {
        self.second
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Endpoints in a canonical order, used for symmetric hashing
    fn ordered(&self) -> (Vertex, Vertex) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Whether the edge touches the given vertex
    pub fn is_incident(&self, v: &Vertex) -> bool {
        self.first == *v || self.second == *v
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

/// Sum of the weights of a collection of edges
pub fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> f64 {
    edges.into_iter().fold(0.0, |total, edge| total + edge.weight())
}
