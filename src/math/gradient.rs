/// Horizontal Sobel kernel
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical Sobel kernel
pub const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Gradient magnitude and orientation at one pixel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gradient {
    /// Euclidean norm of the Sobel responses
    pub magnitude: f64,
    /// Orientation in degrees, normalized into `[0, 180)`
    pub angle: f64,
}

impl Gradient {
    /// Build a gradient from horizontal and vertical Sobel responses
    pub fn from_components(gx: f64, gy: f64) -> Self {
        Self {
            magnitude: gx.hypot(gy),
            angle: normalize_angle(gy.atan2(gx).to_degrees()),
        }
    }
}

/// Fold an angle in degrees into `[0, 180)`
///
/// Opposite gradient directions describe the same edge, so orientation only
/// matters modulo a half turn.
pub fn normalize_angle(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(180.0);
    // rem_euclid can round up to exactly 180 for tiny negative inputs
    if folded >= 180.0 { 0.0 } else { folded }
}

/// Apply both Sobel kernels to the 3×3 neighborhood `window`
///
/// `window` is indexed `[row][col]` with the pixel of interest at `[1][1]`.
pub fn sobel_response(window: &[[f64; 3]; 3]) -> (f64, f64) {
    let mut gx = 0.0;
    let mut gy = 0.0;
    let kernels = SOBEL_X.iter().zip(SOBEL_Y.iter());
    for (window_row, (kernel_x, kernel_y)) in window.iter().zip(kernels) {
        for ((&value, &kx), &ky) in window_row.iter().zip(kernel_x).zip(kernel_y) {
            gx += value * kx;
            gy += value * ky;
        }
    }
    (gx, gy)
}

/// Quantized edge-normal direction used by non-maximum suppression
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Gradient roughly horizontal (`[0°, 22.5°)` or `[157.5°, 180°)`)
    Horizontal,
    /// Gradient roughly along `[22.5°, 67.5°)`
    Diagonal,
    /// Gradient roughly vertical (`[67.5°, 112.5°)`)
    Vertical,
    /// Gradient roughly along `[112.5°, 157.5°)`
    AntiDiagonal,
}

impl Orientation {
    /// Bucket a normalized angle into one of four 45° sectors
    pub fn from_angle(angle: f64) -> Self {
        if (22.5..67.5).contains(&angle) {
            Self::Diagonal
        } else if (67.5..112.5).contains(&angle) {
            Self::Vertical
        } else if (112.5..157.5).contains(&angle) {
            Self::AntiDiagonal
        } else {
            Self::Horizontal
        }
    }

    /// Row/column offsets of the two neighbors compared against the center pixel
    pub const fn neighbor_offsets(self) -> [[isize; 2]; 2] {
        match self {
            Self::Horizontal => [[0, 1], [0, -1]],
            Self::Diagonal => [[1, -1], [-1, 1]],
            Self::Vertical => [[1, 0], [-1, 0]],
            Self::AntiDiagonal => [[-1, -1], [1, 1]],
        }
    }
}
