//! Dense square weight matrix for Prim
//!
//! Row and column `i` correspond to the vertex at position `i` of the graph's
//! vertex sequence. An entry of zero (or any non-positive value) means there is
//! no edge between the two vertices.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    size: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    /// `size × size` matrix with no edges
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0.0; size * size],
        }
    }

    /// Build from rows, which must form a square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::invalid_matrix(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            weights.extend(row);
        }
        Ok(Self { size, weights })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, weight: f64) {
        self.weights[row * self.size + col] = weight;
    }

    /// Set both `(a, b)` and `(b, a)`
    pub fn set_symmetric(&mut self, a: usize, b: usize, weight: f64) {
        self.set(a, b, weight);
        self.set(b, a, weight);
    }

    /// Weight of the edge from `row` to `col`, `None` when absent
    pub fn edge(&self, row: usize, col: usize) -> Option<f64> {
        let w = self.get(row, col);
        (w > 0.0).then_some(w)
    }
}
