//! Spatial data structures for the maze grid
//!
//! This module contains spatial-related functionality including:
//! - The maze grid model with wall topology and neighbor queries
//! - Disjoint-set union over grid cells
//! - Sparse edge-weight maps keyed by cell boundary
//! - Row-band partitioning for parallel buffer work
//! - ASCII rendering

/// ASCII rendering of mazes
pub mod ascii;
/// Row-band partitioning and fan-out/join over row-major buffers
pub mod bands;
/// Disjoint-set union for spanning-tree construction
pub mod dsu;
/// Sparse wall priorities keyed by cell boundary
pub mod edge_map;
/// Maze grid model and wall topology
pub mod maze;

pub use edge_map::{EdgeKey, EdgeWeights};
pub use maze::{Cell, Maze, Point, Side};
