//! Breadth-first, depth-first and A* search over open passages
//!
//! All searches treat every open passage as unit cost. They record the order
//! in which cells are expanded and rebuild the path by following parent links
//! from the goal back to the start.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::io::error::{MazeError, Result, unsupported_option};
use crate::spatial::maze::manhattan;
use crate::spatial::{Maze, Point};

/// Available search strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveAlgorithm {
    /// Best-first search guided by Manhattan distance
    AStar,
    /// Breadth-first search (shortest path)
    Bfs,
    /// Depth-first search (valid but usually longer path)
    Dfs,
}

impl SolveAlgorithm {
    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl fmt::Display for SolveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolveAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" => Ok(Self::AStar),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(unsupported_option("search algorithm", &s)),
        }
    }
}

/// Result of a search
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Cells in the order they were expanded
    pub visited: Vec<Point>,
    /// Start-to-end path inclusive; empty when the end was never reached
    pub path: Vec<Point>,
}

impl Solution {
    /// Whether the search reached the end
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Solve a maze from its start to its end with the chosen algorithm
///
/// # Errors
///
/// Returns `OutOfBounds` if the maze's start or end lies outside its grid
pub fn solve(maze: &Maze, algorithm: SolveAlgorithm) -> Result<Solution> {
    let (start, end) = (maze.start(), maze.end());
    for point in [start, end] {
        if !maze.contains(point) {
            return Err(MazeError::OutOfBounds {
                point,
                dimensions: (maze.rows(), maze.cols()),
            });
        }
    }

    let solution = match algorithm {
        SolveAlgorithm::AStar => astar(maze, start, end),
        SolveAlgorithm::Bfs => bfs(maze, start, end),
        SolveAlgorithm::Dfs => dfs(maze, start, end),
    };

    log::debug!(
        "{algorithm} expanded {} cells, path length {}",
        solution.visited.len(),
        solution.path.len()
    );
    Ok(solution)
}

/// Shortest path by breadth-first search
///
/// Cells are marked seen when enqueued, so each is expanded at most once.
pub fn bfs(maze: &Maze, start: Point, end: Point) -> Solution {
    let mut search = SearchState::new(maze);
    if !search.mark_seen(start) {
        return Solution::default();
    }

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        search.visited.push(current);
        if current == end {
            return search.finish(end);
        }

        for next in maze.neighbors(current) {
            if search.mark_seen(next) {
                search.set_parent(next, current);
                queue.push_back(next);
            }
        }
    }

    search.unsolved()
}

/// Some valid path by depth-first search
///
/// Neighbors are pushed in north, east, south, west order and popped last in,
/// first out, so the west branch is explored first. The path respects walls
/// but is generally not the shortest.
pub fn dfs(maze: &Maze, start: Point, end: Point) -> Solution {
    let mut search = SearchState::new(maze);
    if !search.mark_seen(start) {
        return Solution::default();
    }

    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        search.visited.push(current);
        if current == end {
            return search.finish(end);
        }

        for next in maze.neighbors(current) {
            if search.mark_seen(next) {
                search.set_parent(next, current);
                stack.push(next);
            }
        }
    }

    search.unsolved()
}

/// Shortest path by A* with the Manhattan heuristic
///
/// Neighbors are re-pushed whenever a strictly shorter route is found; stale
/// heap entries for already expanded cells are skipped on pop. Equal `f`
/// scores pop in insertion order.
pub fn astar(maze: &Maze, start: Point, end: Point) -> Solution {
    let mut search = SearchState::new(maze);
    if !maze.contains(start) {
        return Solution::default();
    }

    let cells = maze.cell_count();
    let mut g_score: Vec<Option<usize>> = vec![None; cells];
    let mut expanded = bitvec![0; cells];
    let mut open = BinaryHeap::new();
    let mut sequence = 0_u64;

    set_score(&mut g_score, maze.index_of(start), 0);
    open.push(Reverse((manhattan(start, end), sequence, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        let index = maze.index_of(current);
        if expanded.get(index).as_deref() == Some(&true) {
            continue;
        }
        expanded.set(index, true);
        search.visited.push(current);

        if current == end {
            return search.finish(end);
        }

        let tentative = g_score.get(index).copied().flatten().unwrap_or(0) + 1;
        for next in maze.neighbors(current) {
            let next_index = maze.index_of(next);
            let known = g_score.get(next_index).copied().flatten();
            if known.is_none_or(|score| tentative < score) {
                set_score(&mut g_score, next_index, tentative);
                search.set_parent(next, current);
                sequence += 1;
                open.push(Reverse((tentative + manhattan(next, end), sequence, next)));
            }
        }
    }

    search.unsolved()
}

fn set_score(scores: &mut [Option<usize>], index: usize, score: usize) {
    if let Some(slot) = scores.get_mut(index) {
        *slot = Some(score);
    }
}

/// Seen set, parent links and expansion order shared by all searches
struct SearchState<'a> {
    maze: &'a Maze,
    seen: BitVec,
    parents: Vec<Option<Point>>,
    visited: Vec<Point>,
}

impl<'a> SearchState<'a> {
    fn new(maze: &'a Maze) -> Self {
        let cells = maze.cell_count();
        Self {
            maze,
            seen: bitvec![0; cells],
            parents: vec![None; cells],
            visited: Vec::new(),
        }
    }

    // Returns true the first time an in-bounds point is seen
    fn mark_seen(&mut self, point: Point) -> bool {
        if !self.maze.contains(point) {
            return false;
        }
        let index = self.maze.index_of(point);
        if self.seen.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.seen.set(index, true);
        true
    }

    fn set_parent(&mut self, child: Point, parent: Point) {
        let index = self.maze.index_of(child);
        if let Some(slot) = self.parents.get_mut(index) {
            *slot = Some(parent);
        }
    }

    fn finish(self, end: Point) -> Solution {
        let path = reconstruct_path(self.maze, &self.parents, end);
        Solution {
            visited: self.visited,
            path,
        }
    }

    fn unsolved(self) -> Solution {
        Solution {
            visited: self.visited,
            path: Vec::new(),
        }
    }
}

/// Follow parent links from `end` back to the root and reverse
fn reconstruct_path(maze: &Maze, parents: &[Option<Point>], end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;

    while let Some(parent) = parents.get(maze.index_of(current)).copied().flatten() {
        // Guard against malformed parent chains
        if path.len() > parents.len() {
            break;
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
