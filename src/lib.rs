//! Grid maze generation with image-guided wall weighting
//!
//! Mazes are carved as spanning trees over a rectangular grid, either by a
//! randomly weighted Kruskal pass, a randomized depth-first backtracker, or a
//! Kruskal pass whose wall priorities come from edges detected in an image.
//! Generated mazes can be solved with breadth-first, depth-first or A* search
//! and rendered to PNG.

#![forbid(unsafe_code)]

/// Maze generation strategies and path search
pub mod algorithm;
/// Edge detection from images and maze statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Gradient kernels and orientation utilities
pub mod math;
/// Grid model, disjoint sets, edge keys and row bands
pub mod spatial;

pub use io::error::{MazeError, Result};
