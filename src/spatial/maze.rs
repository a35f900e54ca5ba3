//! Grid model: cells, wall topology, neighbor queries and border endpoints
//!
//! A maze is a row-major grid of cells, each carrying four wall flags ordered
//! top, right, bottom, left. Generation removes walls in matching pairs so the
//! two cells sharing a boundary always agree about it.

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::io::configuration::{DEFAULT_WALL_WEIGHT, MIN_DIMENSION, MIN_ENDPOINT_SEPARATION};
use crate::io::error::{MazeError, Result};
use crate::spatial::edge_map::EdgeWeights;

/// Grid coordinate as `[row, col]`
pub type Point = [usize; 2];

/// One of the four boundaries of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Boundary shared with the cell above
    Top,
    /// Boundary shared with the cell to the right
    Right,
    /// Boundary shared with the cell below
    Bottom,
    /// Boundary shared with the cell to the left
    Left,
}

impl Side {
    /// All sides in neighbor query order (north, east, south, west)
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Index of this side in a cell's wall arrays
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// The side seen from the neighboring cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Coordinate of the neighbor across this side, if it has non-negative indices
    pub const fn step(self, point: Point) -> Option<Point> {
        let [row, col] = point;
        match self {
            Self::Top => match row.checked_sub(1) {
                Some(above) => Some([above, col]),
                None => None,
            },
            Self::Right => Some([row, col + 1]),
            Self::Bottom => Some([row + 1, col]),
            Self::Left => match col.checked_sub(1) {
                Some(left) => Some([row, left]),
                None => None,
            },
        }
    }
}

/// A single maze square with its boundaries and shading metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Backtracker bookkeeping, stale once generation finishes
    pub visited: bool,
    /// Wall presence ordered top, right, bottom, left
    pub walls: [bool; 4],
    /// Wall priorities used only for shading, same order as `walls`
    pub wall_weights: [u32; 4],
}

impl Cell {
    /// Create a fully enclosed cell
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            visited: false,
            walls: [true; 4],
            wall_weights: [DEFAULT_WALL_WEIGHT; 4],
        }
    }

    /// Whether the wall on `side` is standing
    pub const fn has_wall(&self, side: Side) -> bool {
        self.walls[side.index()]
    }

    /// Number of walls still standing
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Rectangular maze with entrance, exit and optional image-derived weights
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rows: usize,
    cols: usize,
    #[serde(with = "grid_rows")]
    grid: Array2<Cell>,
    start: Point,
    end: Point,
    #[serde(default)]
    weights: Option<EdgeWeights>,
}

impl Maze {
    /// Create a maze where every cell is completely enclosed
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is below the minimum
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;

        let grid = Array2::from_shape_fn((rows, cols), |(row, col)| Cell::new(row, col));

        Ok(Self {
            rows,
            cols,
            grid,
            start: [0, 0],
            end: [0, 0],
            weights: None,
        })
    }

    /// Get the number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Entrance coordinate
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Exit coordinate
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Edge-weight map the maze was generated from, if vision-guided
    pub const fn weights(&self) -> Option<&EdgeWeights> {
        self.weights.as_ref()
    }

    /// Attach the edge-weight map used for vision-guided generation
    pub fn set_weights(&mut self, weights: EdgeWeights) {
        self.weights = Some(weights);
    }

    /// Borrow the full cell grid
    pub const fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, point: Point) -> bool {
        point[0] < self.rows && point[1] < self.cols
    }

    /// Check whether a coordinate lies on the outer border
    pub const fn is_border(&self, point: Point) -> bool {
        self.contains(point)
            && (point[0] == 0
                || point[0] == self.rows - 1
                || point[1] == 0
                || point[1] == self.cols - 1)
    }

    /// Linear index of a coordinate, as used by the disjoint-set and search buffers
    pub const fn index_of(&self, point: Point) -> usize {
        point[0] * self.cols + point[1]
    }

    /// Coordinate of a linear index
    pub const fn point_of(&self, index: usize) -> Point {
        [index / self.cols, index % self.cols]
    }

    /// Borrow a cell
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.grid.get((point[0], point[1]))
    }

    /// Mutably borrow a cell
    pub fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.grid.get_mut((point[0], point[1]))
    }

    /// Whether the wall on `side` of `point` is standing (out-of-grid cells count as walled)
    pub fn has_wall(&self, point: Point, side: Side) -> bool {
        self.cell(point).is_none_or(|cell| cell.has_wall(side))
    }

    /// Break the boundary between two adjacent cells
    ///
    /// Both cells' matching wall flags are cleared. Cells that are not
    /// horizontally or vertically adjacent are left untouched.
    pub fn remove_walls(&mut self, a: Point, b: Point) {
        let Some(side) = side_between(a, b) else {
            return;
        };
        if !self.contains(a) || !self.contains(b) {
            return;
        }

        if let Some(cell) = self.cell_mut(a) {
            cell.walls[side.index()] = false;
        }
        if let Some(cell) = self.cell_mut(b) {
            cell.walls[side.opposite().index()] = false;
        }
    }

    /// Record a wall priority on both cells sharing a boundary
    pub fn set_wall_weight(&mut self, a: Point, b: Point, weight: u32) {
        let Some(side) = side_between(a, b) else {
            return;
        };

        if let Some(cell) = self.cell_mut(a) {
            cell.wall_weights[side.index()] = weight;
        }
        if let Some(cell) = self.cell_mut(b) {
            cell.wall_weights[side.opposite().index()] = weight;
        }
    }

    /// Set every wall priority in the grid to one value
    pub fn fill_wall_weights(&mut self, weight: u32) {
        for cell in &mut self.grid {
            cell.wall_weights = [weight; 4];
        }
    }

    /// Reachable neighbors of `point` in north, east, south, west order
    ///
    /// A neighbor is reachable when it is inside the grid and no wall on the
    /// current cell blocks the step towards it.
    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        let Some(cell) = self.cell(point) else {
            return Vec::new();
        };

        Side::ALL
            .iter()
            .filter(|&&side| !cell.has_wall(side))
            .filter_map(|&side| side.step(point))
            .filter(|&next| self.contains(next))
            .collect()
    }

    /// Number of interior boundaries whose wall has been removed
    pub fn removed_wall_count(&self) -> usize {
        let mut removed = 0;
        for ((row, col), cell) in self.grid.indexed_iter() {
            if row + 1 < self.rows && !cell.has_wall(Side::Bottom) {
                removed += 1;
            }
            if col + 1 < self.cols && !cell.has_wall(Side::Right) {
                removed += 1;
            }
        }
        removed
    }

    /// Pick a distinct, well-separated entrance and exit on the border
    ///
    /// Samples border points until the pair is distinct and their Manhattan
    /// distance is at least half of `rows + cols`, then opens the exterior
    /// wall of both cells.
    pub fn set_random_start_end<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let min_distance = (self.rows + self.cols) as f64 * MIN_ENDPOINT_SEPARATION;

        loop {
            let start = self.random_border_point(rng);
            let end = self.random_border_point(rng);

            if start != end && manhattan(start, end) as f64 >= min_distance {
                self.start = start;
                self.end = end;
                break;
            }
        }

        self.clip_border_wall(self.start);
        self.clip_border_wall(self.end);
    }

    /// Place the entrance and exit at specific border cells
    ///
    /// # Errors
    ///
    /// Returns `Boundary` if either point is not on the outer border
    pub fn set_manual_start_end(&mut self, start: Point, end: Point) -> Result<()> {
        for point in [start, end] {
            if !self.is_border(point) {
                return Err(MazeError::Boundary {
                    point,
                    dimensions: (self.rows, self.cols),
                });
            }
        }

        self.start = start;
        self.end = end;
        self.clip_border_wall(start);
        self.clip_border_wall(end);
        Ok(())
    }

    fn random_border_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        match rng.random_range(0..4) {
            0 => [0, rng.random_range(0..self.cols)],
            1 => [rng.random_range(0..self.rows), self.cols - 1],
            2 => [self.rows - 1, rng.random_range(0..self.cols)],
            _ => [rng.random_range(0..self.rows), 0],
        }
    }

    // Corner cells lose both of their exterior walls
    fn clip_border_wall(&mut self, point: Point) {
        let (rows, cols) = (self.rows, self.cols);
        let Some(cell) = self.cell_mut(point) else {
            return;
        };

        if point[0] == 0 {
            cell.walls[Side::Top.index()] = false;
        }
        if point[0] == rows - 1 {
            cell.walls[Side::Bottom.index()] = false;
        }
        if point[1] == 0 {
            cell.walls[Side::Left.index()] = false;
        }
        if point[1] == cols - 1 {
            cell.walls[Side::Right.index()] = false;
        }
    }

    /// Check the structural consistency of a decoded maze
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the stored counts disagree with the grid
    /// shape or fall below the minimum, or if a cell's coordinates differ from
    /// its position in the grid
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.rows, self.cols)?;
        if self.grid.dim() != (self.rows, self.cols) {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                reason: format!(
                    "grid holds {}x{} cells",
                    self.grid.nrows(),
                    self.grid.ncols()
                ),
            });
        }
        if let Some(((row, col), cell)) = self
            .grid
            .indexed_iter()
            .find(|((row, col), cell)| (cell.row, cell.col) != (*row, *col))
        {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                reason: format!(
                    "cell at {row},{col} claims coordinates {},{}",
                    cell.row, cell.col
                ),
            });
        }
        Ok(())
    }
}

/// Manhattan distance between two grid points
pub const fn manhattan(a: Point, b: Point) -> usize {
    a[0].abs_diff(b[0]) + a[1].abs_diff(b[1])
}

/// Side of `a` that faces `b`, if the two cells are adjacent
pub const fn side_between(a: Point, b: Point) -> Option<Side> {
    if a[0] == b[0] {
        if a[1] + 1 == b[1] {
            return Some(Side::Right);
        }
        if b[1] + 1 == a[1] {
            return Some(Side::Left);
        }
    } else if a[1] == b[1] {
        if a[0] + 1 == b[0] {
            return Some(Side::Bottom);
        }
        if b[0] + 1 == a[0] {
            return Some(Side::Top);
        }
    }
    None
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        return Err(MazeError::InvalidDimensions {
            rows,
            cols,
            reason: format!("both dimensions must be at least {MIN_DIMENSION}"),
        });
    }
    Ok(())
}

/// Serializes the cell grid as nested row arrays
mod grid_rows {
    use ndarray::Array2;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Cell;

    pub fn serialize<S: Serializer>(
        grid: &Array2<Cell>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<Cell>> = grid.outer_iter().map(|row| row.to_vec()).collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Array2<Cell>, D::Error> {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(D::Error::custom("maze grid rows have differing lengths"));
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        Array2::from_shape_vec((height, width), cells).map_err(D::Error::custom)
    }
}
