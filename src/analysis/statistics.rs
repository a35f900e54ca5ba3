//! Structural statistics of a generated maze

use serde::Serialize;

use crate::algorithm::pathfinding::bfs;
use crate::spatial::Maze;

/// Summary figures describing how a maze is laid out
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MazeStatistics {
    /// Total number of cells
    pub cells: usize,
    /// Interior walls that have been removed
    pub open_passages: usize,
    /// Cells reachable through exactly one open passage
    pub dead_ends: usize,
    /// Cells on the shortest start-to-end path, zero when unreachable
    pub solution_length: usize,
    /// Fraction of all cells that lie on the shortest solution
    pub complexity: f64,
}

impl MazeStatistics {
    /// Measure a maze
    pub fn measure(maze: &Maze) -> Self {
        let cells = maze.cell_count();
        let dead_ends = count_dead_ends(maze);
        let solution_length = bfs(maze, maze.start(), maze.end()).path.len();

        Self {
            cells,
            open_passages: maze.removed_wall_count(),
            dead_ends,
            solution_length,
            complexity: if cells == 0 {
                0.0
            } else {
                solution_length as f64 / cells as f64
            },
        }
    }
}

/// Number of cells with exactly one reachable neighbor
pub fn count_dead_ends(maze: &Maze) -> usize {
    (0..maze.cell_count())
        .filter(|&index| maze.neighbors(maze.point_of(index)).len() == 1)
        .count()
}
