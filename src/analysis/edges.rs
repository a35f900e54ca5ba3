//! Edge detection pipeline turning a source image into wall priorities
//!
//! The pipeline runs grayscale conversion, Sobel gradients, non-maximum
//! suppression and double thresholding, then point-samples the thinned edge
//! map at maze-cell resolution. Cells sitting on a strong or weak edge get a
//! high wall priority so Kruskal generation processes those walls last and
//! the image silhouette survives as standing walls.

use std::time::Instant;

use image::DynamicImage;
use log::{debug, warn};
use ndarray::Array2;

use crate::io::configuration::{
    STRONG_EDGE_THRESHOLD, STRONG_EDGE_WEIGHT, WEAK_EDGE_THRESHOLD, WEAK_EDGE_WEIGHT,
};
use crate::io::error::{MazeError, Result};
use crate::math::gradient::{Gradient, Orientation, sobel_response};
use crate::spatial::bands::{for_each_band, partition_rows, worker_count};
use crate::spatial::{EdgeKey, EdgeWeights};

/// Per-pixel gradients of an image, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    width: usize,
    height: usize,
    values: Vec<Gradient>,
}

impl GradientField {
    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Gradient at `(x, y)`; border pixels hold a zero gradient
    pub fn get(&self, x: usize, y: usize) -> Option<Gradient> {
        if x >= self.width {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    /// Magnitude at a signed offset from `(x, y)`, zero outside the image
    fn magnitude_at(&self, x: usize, y: usize, offset: [isize; 2]) -> f64 {
        let (Some(ny), Some(nx)) = (
            y.checked_add_signed(offset[0]),
            x.checked_add_signed(offset[1]),
        ) else {
            return 0.0;
        };
        self.get(nx, ny).map_or(0.0, |gradient| gradient.magnitude)
    }
}

/// Converts source images into sparse edge-weight maps
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    workers: usize,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Create a detector using one gradient worker per available core
    pub fn new() -> Self {
        Self::with_workers(worker_count())
    }

    /// Create a detector with an explicit gradient worker count (minimum 1)
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of gradient workers
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Decode image bytes and compute wall priorities for a `rows` × `cols` maze
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if `bytes` is empty and `VisionDecode` if the
    /// bytes are not a decodable raster image
    pub fn edge_weights(&self, bytes: &[u8], rows: usize, cols: usize) -> Result<EdgeWeights> {
        if bytes.is_empty() {
            return Err(MazeError::MissingInput {
                input: "image bytes",
            });
        }

        let image =
            image::load_from_memory(bytes).map_err(|source| MazeError::VisionDecode { source })?;
        Ok(self.edge_weights_from_image(&image, rows, cols))
    }

    /// Compute wall priorities for an already decoded image
    pub fn edge_weights_from_image(
        &self,
        image: &DynamicImage,
        rows: usize,
        cols: usize,
    ) -> EdgeWeights {
        let started = Instant::now();

        let gray = grayscale(image);
        let field = compute_gradients(&gray, self.workers);
        let suppressed = suppress_non_maxima(&field);
        let weights = threshold_to_weights(&suppressed, rows, cols);

        debug!(
            "edge detection on {}x{} image produced {} weighted edges in {:?}",
            field.width(),
            field.height(),
            weights.len(),
            started.elapsed()
        );
        weights
    }
}

/// Luminance of every pixel, indexed `[y, x]`
pub fn grayscale(image: &DynamicImage) -> Array2<f64> {
    let luma = image.to_luma8();
    let (width, height) = (luma.width() as usize, luma.height() as usize);

    Array2::from_shape_fn((height, width), |(y, x)| {
        f64::from(luma.get_pixel(x as u32, y as u32).0[0])
    })
}

/// Sobel gradients over the interior of `gray`, split across `workers` row bands
///
/// Border pixels keep a zero gradient. Each worker writes only its own rows,
/// so the result is identical for any worker count.
pub fn compute_gradients(gray: &Array2<f64>, workers: usize) -> GradientField {
    let (height, width) = gray.dim();
    let mut values = vec![Gradient::default(); width * height];

    if width < 3 || height < 3 {
        warn!("image of {width}x{height} pixels has no interior; edge map will be empty");
        return GradientField {
            width,
            height,
            values,
        };
    }

    let interior = partition_rows(height - 2, workers)
        .into_iter()
        .map(|band| band.start + 1..band.end + 1)
        .collect::<Vec<_>>();

    for_each_band(&mut values, width, &interior, |band, rows| {
        for (offset, row) in rows.chunks_mut(width).enumerate() {
            let y = band.start + offset;
            for x in 1..width - 1 {
                if let Some(slot) = row.get_mut(x) {
                    let (gx, gy) = sobel_response(&window(gray, x, y));
                    *slot = Gradient::from_components(gx, gy);
                }
            }
        }
    });

    GradientField {
        width,
        height,
        values,
    }
}

// 3×3 neighborhood centered on (x, y); caller guarantees an interior pixel
fn window(gray: &Array2<f64>, x: usize, y: usize) -> [[f64; 3]; 3] {
    let mut window = [[0.0; 3]; 3];
    for (dy, window_row) in window.iter_mut().enumerate() {
        for (dx, value) in window_row.iter_mut().enumerate() {
            *value = gray.get((y + dy - 1, x + dx - 1)).copied().unwrap_or(0.0);
        }
    }
    window
}

/// Thin gradient ridges to single-pixel width
///
/// An interior pixel keeps its magnitude only when it is at least as large as
/// both neighbors along its quantized gradient direction. Result is indexed
/// `[y, x]`; border pixels are zero.
pub fn suppress_non_maxima(field: &GradientField) -> Array2<f64> {
    let (width, height) = (field.width(), field.height());
    let mut suppressed = Array2::zeros((height, width));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let Some(gradient) = field.get(x, y) else {
                continue;
            };

            let [first, second] = Orientation::from_angle(gradient.angle).neighbor_offsets();
            let q = field.magnitude_at(x, y, first);
            let r = field.magnitude_at(x, y, second);

            if gradient.magnitude >= q && gradient.magnitude >= r {
                if let Some(value) = suppressed.get_mut((y, x)) {
                    *value = gradient.magnitude;
                }
            }
        }
    }

    suppressed
}

/// Point-sample suppressed magnitudes at cell resolution and apply double thresholding
///
/// Cell `(r, c)` samples pixel `(c * width / cols, r * height / rows)`. Strong
/// samples weight both the cell's top and left boundaries with the strong edge
/// weight, weak samples with the weak edge weight; anything else is omitted.
pub fn threshold_to_weights(suppressed: &Array2<f64>, rows: usize, cols: usize) -> EdgeWeights {
    let (height, width) = suppressed.dim();
    let mut weights = EdgeWeights::new();
    if rows == 0 || cols == 0 || width == 0 || height == 0 {
        return weights;
    }

    for row in 0..rows {
        for col in 0..cols {
            let x = col * width / cols;
            let y = row * height / rows;
            let magnitude = suppressed.get((y, x)).copied().unwrap_or(0.0);

            let weight = if magnitude >= STRONG_EDGE_THRESHOLD {
                STRONG_EDGE_WEIGHT
            } else if magnitude >= WEAK_EDGE_THRESHOLD {
                WEAK_EDGE_WEIGHT
            } else {
                continue;
            };

            weights.insert(EdgeKey::top(row, col), weight);
            weights.insert(EdgeKey::left(row, col), weight);
        }
    }

    weights
}
