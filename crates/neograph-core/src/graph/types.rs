use crate::edge::Edge;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MST construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MstStrategy {
    /// Prim over all vertex pairs, recomputing Euclidean distances
    Prim,
    /// Prim over a dense weight matrix built from the declared edges
    PrimMatrix,
    /// Kruskal over the declared edges with the naive disjoint set
    #[default]
    Kruskal,
    /// Bucketed Kruskal over the declared edges, naive disjoint set
    Bucketed,
    /// Bucketed Kruskal over the declared edges, union-by-size disjoint set
    BucketedWeighted,
    /// Kruskal over the complete Euclidean edge set
    EuclideanKruskal,
    /// Bucketed Kruskal over the complete Euclidean edge set, naive disjoint set
    EuclideanBucketed,
    /// Bucketed Kruskal over the complete Euclidean edge set, union-by-size disjoint set
    EuclideanBucketedWeighted,
}

impl MstStrategy {
    pub const ALL: [MstStrategy; 8] = [
        MstStrategy::Prim,
        MstStrategy::PrimMatrix,
        MstStrategy::Kruskal,
        MstStrategy::Bucketed,
        MstStrategy::BucketedWeighted,
        MstStrategy::EuclideanKruskal,
        MstStrategy::EuclideanBucketed,
        MstStrategy::EuclideanBucketedWeighted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MstStrategy::Prim => "prim",
            MstStrategy::PrimMatrix => "prim-matrix",
            MstStrategy::Kruskal => "kruskal",
            MstStrategy::Bucketed => "bucketed",
            MstStrategy::BucketedWeighted => "bucketed-weighted",
            MstStrategy::EuclideanKruskal => "euclidean-kruskal",
            MstStrategy::EuclideanBucketed => "euclidean-bucketed",
            MstStrategy::EuclideanBucketedWeighted => "euclidean-bucketed-weighted",
        }
    }

    /// Whether the strategy consumes a bucket count
    pub fn uses_buckets(&self) -> bool {
        matches!(
            self,
            MstStrategy::Bucketed
                | MstStrategy::BucketedWeighted
                | MstStrategy::EuclideanBucketed
                | MstStrategy::EuclideanBucketedWeighted
        )
    }

    /// Whether the strategy ignores declared edges and works from coordinates
    pub fn is_euclidean(&self) -> bool {
        matches!(
            self,
            MstStrategy::Prim
                | MstStrategy::EuclideanKruskal
                | MstStrategy::EuclideanBucketed
                | MstStrategy::EuclideanBucketedWeighted
        )
    }
}

impl FromStr for MstStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        MstStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == lowered)
            .ok_or_else(|| {
                let supported: Vec<&str> = MstStrategy::ALL.iter().map(|s| s.as_str()).collect();
                GraphError::invalid_value(
                    "strategy",
                    format!("{} (expected one of: {})", s, supported.join(", ")),
                )
            })
    }
}

impl fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed or caller-supplied edge weight range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightBounds {
    pub min: f64,
    pub max: f64,
}

impl WeightBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest and largest weight among `edges`, `None` when there are none
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Option<Self> {
        edges.into_iter().fold(None, |bounds, edge| {
            let w = edge.weight();
            Some(match bounds {
                None => WeightBounds::new(w, w),
                Some(b) => WeightBounds::new(b.min.min(w), b.max.max(w)),
            })
        })
    }

    /// All weights fall in a single point, so bucket widths would be zero
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Reject inverted or non-finite ranges
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(GraphError::InvalidWeightRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
