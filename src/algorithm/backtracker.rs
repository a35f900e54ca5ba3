//! Recursive-backtracker generation driven by an explicit stack
//!
//! Equivalent to the recursive depth-first carve (visit a cell, shuffle its
//! four directions, carve into each unvisited neighbor and recurse) but keeps
//! the pending directions of every open frame on the heap, so the largest
//! grids cannot overflow the call stack.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::configuration::DEFAULT_WALL_WEIGHT;
use crate::spatial::{Maze, Point, Side};

/// One suspended level of the depth-first carve
struct Frame {
    cell: Point,
    directions: [Side; 4],
    next: usize,
}

impl Frame {
    // Directions are shuffled on entry, matching the recursive draw order
    fn enter<R: Rng + ?Sized>(cell: Point, rng: &mut R) -> Self {
        let mut directions = Side::ALL;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Side> {
        let side = self.directions.get(self.next).copied();
        self.next += 1;
        side
    }
}

/// Carve a perfect maze by randomized depth-first traversal from `origin`
///
/// Marks cells `visited` as they are entered and removes the wall towards
/// every newly entered neighbor. Wall priorities are reset to the default.
/// Returns the number of walls removed.
pub fn generate_recursive_backtracker<R: Rng + ?Sized>(
    maze: &mut Maze,
    origin: Point,
    rng: &mut R,
) -> usize {
    if !maze.contains(origin) {
        return 0;
    }

    maze.fill_wall_weights(DEFAULT_WALL_WEIGHT);
    mark_visited(maze, origin);

    let mut removed = 0;
    let mut stack = vec![Frame::enter(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(side) = frame.next_direction() else {
            stack.pop();
            continue;
        };

        let current = frame.cell;
        let Some(next) = side.step(current) else {
            continue;
        };
        if !maze.cell(next).is_some_and(|cell| !cell.visited) {
            continue;
        }

        maze.remove_walls(current, next);
        mark_visited(maze, next);
        removed += 1;
        stack.push(Frame::enter(next, rng));
    }

    removed
}

fn mark_visited(maze: &mut Maze, point: Point) {
    if let Some(cell) = maze.cell_mut(point) {
        cell.visited = true;
    }
}
