//! Integer-coordinate points

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer plane.
///
/// Equality and hashing are by coordinate pair, so two separately constructed
/// vertices at the same location are the same key in a disjoint set. Mutating a
/// vertex that is already registered in a set or map changes its identity, so
/// graphs are only translated between computations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate pair
    pub fn location(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Euclidean distance to another vertex
    pub fn distance(&self, other: &Vertex) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// The vertex shifted by `(dx, dy)`, or `None` if a coordinate overflows
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Vertex> {
        Some(Vertex::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Vertex::new(x, y)
    }
}

impl From<Vertex> for (i32, i32) {
    fn from(v: Vertex) -> Self {
        v.location()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
