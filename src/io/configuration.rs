//! Engine constants and runtime configuration defaults

// Grid bounds accepted by the boundary layer
/// Smallest accepted row or column count
pub const MIN_DIMENSION: usize = 2;
/// Largest row or column count accepted by the command line front end
pub const MAX_DIMENSION: usize = 300;

/// Exclusive upper bound of random wall weights in Kruskal generation
pub const RANDOM_WEIGHT_CEILING: u32 = 100;

/// Wall priority assigned to every wall before generation overwrites it
pub const DEFAULT_WALL_WEIGHT: u32 = 255;

// Start and end must be spread across the maze
/// Minimum Manhattan separation of start and end as a fraction of `rows + cols`
pub const MIN_ENDPOINT_SEPARATION: f64 = 0.5;

// Double thresholding of suppressed gradient magnitudes
/// Magnitudes at or above this value are strong edges
pub const STRONG_EDGE_THRESHOLD: f64 = 100.0;
/// Magnitudes at or above this value (and below the strong threshold) are weak edges
pub const WEAK_EDGE_THRESHOLD: f64 = 40.0;
/// Wall weight assigned to strong edges
pub const STRONG_EDGE_WEIGHT: u32 = 255;
/// Wall weight assigned to weak edges
pub const WEAK_EDGE_WEIGHT: u32 = 120;

// Wall shading
/// Wall priorities at or above this value are painted pure black
pub const SOLID_WALL_WEIGHT: u32 = 1000;
/// Gray intensity for a zero-weight wall
pub const WALL_GRAY_BASE: u8 = 230;
/// Modulus applied to wall weights to produce gray texture
pub const WALL_GRAY_VARIANCE: u32 = 30;

/// RGBA canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// RGBA fill of the start cell (light green)
pub const START_COLOR: [u8; 4] = [144, 238, 144, 255];
/// RGBA fill of the end cell (tomato red)
pub const END_COLOR: [u8; 4] = [255, 99, 71, 255];

/// Default pixels per cell edge for rendering
pub const DEFAULT_CELL_SIZE: u32 = 10;

// Default values for command line parameters
/// Default row count
pub const DEFAULT_ROWS: usize = 20;
/// Default column count
pub const DEFAULT_COLS: usize = 20;
/// Default generation mode name
pub const DEFAULT_MODE: &str = "kruskal";
/// Default search algorithm name
pub const DEFAULT_ALGORITHM: &str = "astar";
