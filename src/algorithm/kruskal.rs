//! Weighted Kruskal spanning-tree construction
//!
//! Every interior boundary becomes a candidate wall with a priority taken from
//! the supplied edge-weight map or drawn at random. Walls are processed in
//! ascending priority and removed whenever they separate two cells that are not
//! yet connected, which yields the minimum spanning tree for that weighting.

use rand::Rng;

use crate::io::configuration::{DEFAULT_WALL_WEIGHT, RANDOM_WEIGHT_CEILING};
use crate::spatial::dsu::DisjointSet;
use crate::spatial::{EdgeWeights, Maze, Point};

/// A candidate boundary between two adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    /// Upper or left cell
    pub first: Point,
    /// Lower or right cell
    pub second: Point,
    /// Processing priority (lower is removed first)
    pub weight: u32,
}

/// Build one candidate wall per adjacent cell pair
///
/// Walls are produced in row-major order, the down-neighbor wall of a cell
/// before its right-neighbor wall. Weights come from `weights` when it holds
/// an entry for the boundary, otherwise uniformly from `[0, 100)`.
pub fn candidate_walls<R: Rng + ?Sized>(
    maze: &Maze,
    weights: Option<&EdgeWeights>,
    rng: &mut R,
) -> Vec<Wall> {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut walls = Vec::with_capacity(2 * rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let first = [row, col];
            let mut neighbors = [None, None];
            if row + 1 < rows {
                neighbors[0] = Some([row + 1, col]);
            }
            if col + 1 < cols {
                neighbors[1] = Some([row, col + 1]);
            }

            for second in neighbors.into_iter().flatten() {
                let weight = weights
                    .and_then(|map| map.between(first, second))
                    .unwrap_or_else(|| rng.random_range(0..RANDOM_WEIGHT_CEILING));
                walls.push(Wall {
                    first,
                    second,
                    weight,
                });
            }
        }
    }

    walls
}

/// Carve a spanning tree into `maze` using weighted Kruskal
///
/// With `weights` present the generation is vision-guided: every processed
/// wall's priority is copied onto both adjacent cells for shading, whether or
/// not the wall is removed, and the map is stored on the maze. Without
/// `weights` all wall priorities are reset to the default first.
///
/// Returns the removed walls in removal order.
pub fn generate_weighted_kruskal<R: Rng + ?Sized>(
    maze: &mut Maze,
    weights: Option<&EdgeWeights>,
    rng: &mut R,
) -> Vec<Wall> {
    let guided = weights.is_some();
    if !guided {
        maze.fill_wall_weights(DEFAULT_WALL_WEIGHT);
    }

    let mut walls = candidate_walls(maze, weights, rng);
    // Stable sort keeps generation order among equal weights
    walls.sort_by_key(|wall| wall.weight);

    let mut components = DisjointSet::new(maze.cell_count());
    let mut removed = Vec::with_capacity(maze.cell_count().saturating_sub(1));

    for wall in walls {
        if guided {
            maze.set_wall_weight(wall.first, wall.second, wall.weight);
        }

        let a = maze.index_of(wall.first);
        let b = maze.index_of(wall.second);
        if components.union(a, b) {
            maze.remove_walls(wall.first, wall.second);
            removed.push(wall);
        }
    }

    if let Some(map) = weights {
        maze.set_weights(map.clone());
    }

    removed
}
