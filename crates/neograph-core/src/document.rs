//! Serialized graph documents
//!
//! A document lists vertices as `[x, y]` pairs and edges as index pairs into
//! that list, with an optional weight:
//!
//! ```json
//! { "vertices": [[0, 0], [3, 0]], "edges": [{ "first": 0, "second": 1, "weight": 2.5 }] }
//! ```
//!
//! The same shape is accepted as TOML. An edge without a weight uses the
//! Euclidean length of its endpoints.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<Vertex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeRecord>,
}

/// An edge by vertex position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub first: usize,
    pub second: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl GraphDocument {
    /// Capture a graph's vertices and declared edges.
    ///
    /// Weights equal to the Euclidean length are omitted. Endpoints resolve to
    /// the first position of a repeated vertex.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let mut index: HashMap<Vertex, usize> = HashMap::with_capacity(graph.vertices().len());
        for (i, vertex) in graph.vertices().iter().enumerate() {
            index.entry(*vertex).or_insert(i);
        }
        let position = |v: Vertex| {
            index
                .get(&v)
                .copied()
                .ok_or_else(|| GraphError::invalid_value("edge endpoint", v))
        };

        let edges = graph
            .edges()
            .iter()
            .map(|edge| -> Result<EdgeRecord> {
                let euclidean = edge.first().distance(&edge.second());
                Ok(EdgeRecord {
                    first: position(edge.first())?,
                    second: position(edge.second())?,
                    weight: (edge.weight() != euclidean).then_some(edge.weight()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vertices: graph.vertices().to_vec(),
            edges,
        })
    }

    /// Build a graph, checking every edge index and weight
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::with_vertices(self.vertices);
        for (n, record) in self.edges.into_iter().enumerate() {
            let count = graph.vertices().len();
            let endpoint = |i: usize| {
                graph.vertices().get(i).copied().ok_or_else(|| {
                    GraphError::invalid_document(format!(
                        "edge {} references vertex {} but there are {} vertices",
                        n, i, count
                    ))
                })
            };
            let (first, second) = (endpoint(record.first)?, endpoint(record.second)?);

            match record.weight {
                Some(weight) => graph
                    .add_weighted_edge(first, second, weight)
                    .map_err(|_| {
                        GraphError::invalid_document(format!(
                            "edge {} has invalid weight {}",
                            n, weight
                        ))
                    })?,
                None => graph.add_edge(first, second),
            }
        }
        Ok(graph)
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a document, as TOML for a `.toml` extension and JSON otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let document = if is_toml {
            Self::parse_toml(&content)?
        } else {
            Self::parse_json(&content)?
        };
        debug!(
            path = %path.display(),
            vertices = document.vertices.len(),
            edges = document.edges.len(),
            "loaded graph document"
        );
        Ok(document)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests;
