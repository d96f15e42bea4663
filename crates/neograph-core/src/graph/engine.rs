//! The graph aggregate that owns vertices, declared edges and the last solution

use super::algos::{
    bucketed_kruskal, complete_edges, euclidean_bucketed_kruskal, euclidean_kruskal, kruskal,
    prim_euclidean, prim_matrix,
};
use super::matrix::WeightMatrix;
use super::types::{MstStrategy, WeightBounds};
use crate::collections::{NaiveDisjointSet, WeightedDisjointSet};
use crate::edge::{self, Edge};
use crate::error::{GraphError, Result};
use crate::vertex::Vertex;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Vertices in insertion order, declared edges, and the solution of the most
/// recent MST run.
///
/// Every strategy method clears the previous solution before computing a new
/// one, so `solution()` always reflects exactly one run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    solution: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges chosen by the last strategy run, in discovery order
    pub fn solution(&self) -> &[Edge] {
        &self.solution
    }

    /// Append a vertex and return its position
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_point(&mut self, x: i32, y: i32) -> usize {
        self.add_vertex(Vertex::new(x, y))
    }

    /// Declare an edge weighted by its Euclidean length
    pub fn add_edge(&mut self, first: Vertex, second: Vertex) {
        self.edges.push(Edge::new(first, second));
    }

    /// Declare an edge with an explicit weight, which must be finite and
    /// non-negative
    pub fn add_weighted_edge(&mut self, first: Vertex, second: Vertex, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.edges.push(Edge::with_weight(first, second, weight));
        Ok(())
    }

    /// Declare an edge between the vertices at positions `i` and `j`
    pub fn add_edge_between(&mut self, i: usize, j: usize) -> Result<()> {
        let first = self.vertex_at(i)?;
        let second = self.vertex_at(j)?;
        self.add_edge(first, second);
        Ok(())
    }

    /// Declare every pairwise Euclidean edge over the current vertices
    pub fn connect_all(&mut self) {
        let complete = complete_edges(&self.vertices);
        self.edges.extend(complete);
    }

    /// Drop vertices, edges and solution
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.solution.clear();
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.solution.clear();
    }

    pub fn clear_solution(&mut self) {
        self.solution.clear();
    }

    /// Shift every vertex, and the endpoints of every edge, by `(dx, dy)`.
    /// Weights are unchanged. If any coordinate would overflow, nothing moves.
    pub fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        let shift = |vertex: Vertex| -> Result<Vertex> {
            vertex.translated(dx, dy).ok_or_else(|| {
                GraphError::invalid_value(
                    "translation",
                    format!("({}, {}) moves {} out of range", dx, dy, vertex),
                )
            })
        };
        let shift_edge = |edge: &Edge| -> Result<Edge> {
            Ok(Edge::with_weight(
                shift(edge.first())?,
                shift(edge.second())?,
                edge.weight(),
            ))
        };

        let vertices = self
            .vertices
            .iter()
            .map(|v| shift(*v))
            .collect::<Result<Vec<_>>>()?;
        let edges = self.edges.iter().map(&shift_edge).collect::<Result<Vec<_>>>()?;
        let solution = self
            .solution
            .iter()
            .map(&shift_edge)
            .collect::<Result<Vec<_>>>()?;

        self.vertices = vertices;
        self.edges = edges;
        self.solution = solution;
        Ok(())
    }

    /// Override the weight of the declared edge at `index`
    pub fn set_edge_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let count = self.edges.len();
        let edge = self.edges.get_mut(index).ok_or_else(|| {
            GraphError::invalid_value(
                "edge index",
                format!("{} (graph has {} edges)", index, count),
            )
        })?;
        edge.set_weight(weight);
        Ok(())
    }

    /// Smallest and largest declared edge weight
    pub fn weight_bounds(&self) -> Option<WeightBounds> {
        WeightBounds::from_edges(&self.edges)
    }

    /// Symmetric matrix of declared edge weights indexed by vertex position.
    ///
    /// A vertex repeated in the sequence maps to its first position. Parallel
    /// edges keep the lightest weight; self-loops are dropped.
    pub fn weight_matrix(&self) -> Result<WeightMatrix> {
        let mut index: HashMap<Vertex, usize> = HashMap::with_capacity(self.vertices.len());
        for (i, vertex) in self.vertices.iter().enumerate() {
            index.entry(*vertex).or_insert(i);
        }
        let position = |v: Vertex| {
            index
                .get(&v)
                .copied()
                .ok_or_else(|| GraphError::invalid_value("edge endpoint", v))
        };

        let mut matrix = WeightMatrix::new(self.vertices.len());
        for edge in &self.edges {
            let (i, j) = (position(edge.first())?, position(edge.second())?);
            if i == j {
                continue;
            }
            let keep = match matrix.edge(i, j) {
                Some(existing) => edge.weight() < existing,
                None => true,
            };
            if keep {
                matrix.set_symmetric(i, j, edge.weight());
            }
        }
        Ok(matrix)
    }

    /// Sum of the solution weights
    pub fn total_weight(&self) -> f64 {
        edge::total_weight(&self.solution)
    }

    /// Prim over recomputed Euclidean distances
    pub fn prim(&mut self) -> &[Edge] {
        self.solution.clear();
        self.solution = prim_euclidean(&self.vertices);
        &self.solution
    }

    /// Prim over the declared edges, as a weight matrix
    pub fn prim_matrix(&mut self) -> Result<&[Edge]> {
        self.solution.clear();
        let matrix = self.weight_matrix()?;
        self.solution = prim_matrix(&self.vertices, &matrix)?;
        Ok(&self.solution)
    }

    /// Prim over a caller-supplied weight matrix
    pub fn prim_with_matrix(&mut self, matrix: &WeightMatrix) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution = prim_matrix(&self.vertices, matrix)?;
        Ok(&self.solution)
    }

    pub fn kruskal(&mut self) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution = kruskal(&self.vertices, &self.edges)?;
        Ok(&self.solution)
    }

    /// Bucketed Kruskal over the declared edges with the naive disjoint set,
    /// bounded by the observed weights
    pub fn bucketed(&mut self, bucket: usize) -> Result<&[Edge]> {
        let bounds = self.observed_bounds();
        self.bucketed_with_bounds(bucket, bounds, false)
    }

    /// Bucketed Kruskal over the declared edges with the union-by-size set
    pub fn bucketed_weighted(&mut self, bucket: usize) -> Result<&[Edge]> {
        let bounds = self.observed_bounds();
        self.bucketed_with_bounds(bucket, bounds, true)
    }

    /// Bucketed Kruskal over the declared edges with caller-supplied bounds
    pub fn bucketed_with_bounds(
        &mut self,
        bucket: usize,
        bounds: WeightBounds,
        balanced: bool,
    ) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution = if balanced {
            bucketed_kruskal::<WeightedDisjointSet<Vertex>>(
                &self.vertices,
                &self.edges,
                bucket,
                bounds,
            )?
        } else {
            bucketed_kruskal::<NaiveDisjointSet<Vertex>>(
                &self.vertices,
                &self.edges,
                bucket,
                bounds,
            )?
        };
        Ok(&self.solution)
    }

    pub fn euclidean_kruskal(&mut self) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution = euclidean_kruskal(&self.vertices)?;
        Ok(&self.solution)
    }

    pub fn euclidean_bucketed(&mut self, bucket: usize) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution =
            euclidean_bucketed_kruskal::<NaiveDisjointSet<Vertex>>(&self.vertices, bucket)?;
        Ok(&self.solution)
    }

    pub fn euclidean_bucketed_weighted(&mut self, bucket: usize) -> Result<&[Edge]> {
        self.solution.clear();
        self.solution =
            euclidean_bucketed_kruskal::<WeightedDisjointSet<Vertex>>(&self.vertices, bucket)?;
        Ok(&self.solution)
    }

    /// Run `strategy`. `bucket` is ignored by strategies that do not bucket.
    pub fn solve(&mut self, strategy: MstStrategy, bucket: usize) -> Result<&[Edge]> {
        let start = Instant::now();
        match strategy {
            MstStrategy::Prim => {
                self.prim();
            }
            MstStrategy::PrimMatrix => {
                self.prim_matrix()?;
            }
            MstStrategy::Kruskal => {
                self.kruskal()?;
            }
            MstStrategy::Bucketed => {
                self.bucketed(bucket)?;
            }
            MstStrategy::BucketedWeighted => {
                self.bucketed_weighted(bucket)?;
            }
            MstStrategy::EuclideanKruskal => {
                self.euclidean_kruskal()?;
            }
            MstStrategy::EuclideanBucketed => {
                self.euclidean_bucketed(bucket)?;
            }
            MstStrategy::EuclideanBucketedWeighted => {
                self.euclidean_bucketed_weighted(bucket)?;
            }
        }

        debug!(
            strategy = strategy.as_str(),
            edges = self.solution.len(),
            weight = self.total_weight(),
            "solved"
        );
        crate::trace_time!(start, "solve", strategy = strategy.as_str());
        Ok(&self.solution)
    }

    fn vertex_at(&self, index: usize) -> Result<Vertex> {
        self.vertices.get(index).copied().ok_or_else(|| {
            GraphError::invalid_value(
                "vertex index",
                format!("{} (graph has {} vertices)", index, self.vertices.len()),
            )
        })
    }

    /// Observed bounds, or a zero-width range when there are no edges
    fn observed_bounds(&self) -> WeightBounds {
        self.weight_bounds()
            .unwrap_or(WeightBounds { min: 0.0, max: 0.0 })
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        crate::bail_invalid!("edge weight", weight);
    }
    Ok(())
}
