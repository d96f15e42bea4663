//! MST algorithm implementations
//!
//! Contains the concrete strategies:
//! - `prim`: Prim over recomputed Euclidean distances or a weight matrix
//! - `kruskal`: Kruskal over a single edge queue
//! - `bucketed`: Kruskal over weight-range buckets, generic over the disjoint set
//! - `shared`: Edge synthesis and the common Kruskal drain loop
//!
//! Every function here is pure: it reads vertices and edges and returns a
//! fresh solution in discovery order. The disjoint set and priority queues
//! live only for the duration of one call.

pub mod bucketed;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bucketed::{bucket_index, bucketed_kruskal, euclidean_bucketed_kruskal};
pub use kruskal::{euclidean_kruskal, kruskal};
pub use prim::{prim_euclidean, prim_matrix};
pub use shared::{complete_edges, edge_queue, kruskal_drain, EdgeQueue};
