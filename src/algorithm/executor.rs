use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::backtracker::generate_recursive_backtracker;
use crate::algorithm::kruskal::generate_weighted_kruskal;
use crate::analysis::edges::EdgeDetector;
use crate::io::error::{MazeError, Result, unsupported_option};
use crate::spatial::{Maze, Point};

/// Maze construction strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Randomly weighted Kruskal spanning tree
    Kruskal,
    /// Randomized depth-first backtracker
    Recursive,
    /// Kruskal weighted by edges detected in a source image
    Image,
}

impl GenerationMode {
    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Recursive => "recursive",
            Self::Image => "image",
        }
    }

    /// Whether this mode consumes source image bytes
    pub const fn needs_image(self) -> bool {
        matches!(self, Self::Image)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenerationMode {
    type Err = MazeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "recursive" => Ok(Self::Recursive),
            "image" => Ok(Self::Image),
            _ => Err(unsupported_option("generation mode", &s)),
        }
    }
}

/// Seeded maze generator
///
/// Owns the random source used for wall weights, direction shuffles and
/// endpoint placement, so a given seed reproduces the same maze. Holds no
/// other state between calls.
pub struct MazeGenerator {
    rng: StdRng,
    detector: EdgeDetector,
}

impl MazeGenerator {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            detector: EdgeDetector::new(),
        }
    }

    /// Replace the edge detector (e.g. to pin the gradient worker count)
    #[must_use]
    pub fn with_detector(mut self, detector: EdgeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Generate a maze and place random border endpoints
    ///
    /// `image` is required for `GenerationMode::Image` and ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is below the minimum (`InvalidDimensions`)
    /// - Image mode is requested without image bytes (`MissingInput`)
    /// - The image bytes cannot be decoded (`VisionDecode`)
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        mode: GenerationMode,
        image: Option<&[u8]>,
    ) -> Result<Maze> {
        let mut maze = self.carve(rows, cols, mode, image)?;
        maze.set_random_start_end(&mut self.rng);
        debug!("endpoints placed at {:?} and {:?}", maze.start(), maze.end());
        Ok(maze)
    }

    /// Generate a maze with caller-chosen border endpoints
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`MazeGenerator::generate`], plus `Boundary`
    /// if either endpoint is not on the outer border
    pub fn generate_with_endpoints(
        &mut self,
        rows: usize,
        cols: usize,
        mode: GenerationMode,
        image: Option<&[u8]>,
        endpoints: (Point, Point),
    ) -> Result<Maze> {
        let mut maze = self.carve(rows, cols, mode, image)?;
        maze.set_manual_start_end(endpoints.0, endpoints.1)?;
        Ok(maze)
    }

    fn carve(
        &mut self,
        rows: usize,
        cols: usize,
        mode: GenerationMode,
        image: Option<&[u8]>,
    ) -> Result<Maze> {
        let started = Instant::now();
        let mut maze = Maze::new(rows, cols)?;

        let removed = match mode {
            GenerationMode::Kruskal => {
                generate_weighted_kruskal(&mut maze, None, &mut self.rng).len()
            }
            GenerationMode::Recursive => {
                generate_recursive_backtracker(&mut maze, [0, 0], &mut self.rng)
            }
            GenerationMode::Image => {
                let bytes = image.ok_or(MazeError::MissingInput {
                    input: "source image",
                })?;
                let weights = self.detector.edge_weights(bytes, rows, cols)?;
                generate_weighted_kruskal(&mut maze, Some(&weights), &mut self.rng).len()
            }
        };

        info!(
            "generated {rows}x{cols} {mode} maze, {removed} walls removed in {:?}",
            started.elapsed()
        );
        Ok(maze)
    }
}
