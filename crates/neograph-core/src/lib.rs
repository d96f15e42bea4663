//! NeoGraph Core Library
//!
//! Minimum spanning tree engine: union-find, an indexed binary heap, and
//! Prim, Kruskal and bucketed Kruskal strategies over integer-coordinate
//! vertices.

pub mod collections;
pub mod config;
pub mod document;
pub mod edge;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod random;
pub mod vertex;
