//! Image analysis and maze measurement

/// Edge detection pipeline producing wall priorities from images
pub mod edges;
/// Dead ends, solution length and complexity of generated mazes
pub mod statistics;
