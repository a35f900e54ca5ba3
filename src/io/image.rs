//! Maze rasterization and PNG encoding
//!
//! The canvas is split into horizontal bands of pixel rows, one per worker.
//! A worker paints every cell touching its band in row-major order, clipped to
//! the band, so the shared wall line between two cell rows is written by
//! exactly one worker and the output does not depend on the worker count.

use std::io::Cursor;
use std::ops::Range;
use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::io::configuration::{
    BACKGROUND_COLOR, END_COLOR, SOLID_WALL_WEIGHT, START_COLOR, WALL_GRAY_BASE,
    WALL_GRAY_VARIANCE,
};
use crate::io::error::{MazeError, Result, file_system_error, invalid_parameter};
use crate::spatial::bands::{for_each_band, partition_rows, worker_count};
use crate::spatial::{Maze, Side};

const CHANNELS: usize = 4;

/// Shade of a standing wall with the given priority
///
/// Priorities at or above the solid threshold are black; anything lower is a
/// light gray whose intensity varies with `weight mod 30`.
pub const fn wall_color(weight: u32) -> Rgba<u8> {
    if weight >= SOLID_WALL_WEIGHT {
        return Rgba([0, 0, 0, 255]);
    }
    let intensity = WALL_GRAY_BASE - (weight % WALL_GRAY_VARIANCE) as u8;
    Rgba([intensity, intensity, intensity, 255])
}

/// Paints mazes onto RGBA canvases
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    cell_size: u32,
    workers: usize,
}

impl Rasterizer {
    /// Create a rasterizer with `cell_size` pixels per cell edge
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is zero
    pub fn new(cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell size",
                &cell_size,
                &"cells must be at least one pixel wide",
            ));
        }
        Ok(Self {
            cell_size,
            workers: worker_count(),
        })
    }

    /// Override the number of painting workers (minimum 1)
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Pixels per cell edge
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas size `(width, height)` for a maze
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a canvas side or the pixel buffer length
    /// overflows for this cell size
    pub fn canvas_size(&self, maze: &Maze) -> Result<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(self.cell_size))
                .and_then(|pixels| pixels.checked_add(1))
        };
        let fits = |width: u32, height: u32| {
            (width as usize)
                .checked_mul(height as usize)
                .and_then(|pixels| pixels.checked_mul(CHANNELS))
                .is_some()
        };

        match (side(maze.cols()), side(maze.rows())) {
            (Some(width), Some(height)) if fits(width, height) => Ok((width, height)),
            _ => Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!(
                    "canvas for a {}x{} maze overflows",
                    maze.rows(),
                    maze.cols()
                ),
            )),
        }
    }

    /// Paint a maze onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the canvas size overflows
    pub fn render(&self, maze: &Maze) -> Result<RgbaImage> {
        let started = Instant::now();
        let (width, height) = self.canvas_size(maze)?;
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

        let size = self.cell_size as usize;
        let total_rows = height as usize;
        let pixel_bands: Vec<Range<usize>> = partition_rows(maze.rows(), self.workers)
            .into_iter()
            .map(|band| {
                let end = if band.end == maze.rows() {
                    total_rows
                } else {
                    band.end * size
                };
                band.start * size..end
            })
            .collect();

        let row_len = width as usize * CHANNELS;
        let buffer: &mut [u8] = &mut canvas;
        for_each_band(buffer, row_len, &pixel_bands, |band, pixels| {
            let mut painter = BandPainter {
                pixels,
                width: width as usize,
                rows: band,
            };
            painter.paint_cells(maze, size);
        });

        debug!(
            "rendered {}x{} maze to {width}x{height} canvas in {:?}",
            maze.rows(),
            maze.cols(),
            started.elapsed()
        );
        Ok(canvas)
    }

    /// Paint a maze and encode it as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the canvas size overflows, or
    /// `ImageExport` if PNG encoding fails
    pub fn render_png(&self, maze: &Maze) -> Result<Vec<u8>> {
        encode_png(&self.render(maze)?)
    }

    /// Paint a maze and write it to a PNG file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas size overflows for this cell size
    /// - The parent directory cannot be created
    /// - The image cannot be encoded or saved to the specified path
    pub fn export_png(&self, maze: &Maze, output_path: &Path) -> Result<()> {
        let canvas = self.render(maze)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| file_system_error(parent, "create directory", e))?;
            }
        }

        canvas
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

/// Encode a canvas as PNG bytes
///
/// # Errors
///
/// Returns `ImageExport` if the encoder fails
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    canvas
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: "<memory>".into(),
            source: e,
        })?;
    Ok(bytes.into_inner())
}

/// Exclusive view of a band of canvas rows
struct BandPainter<'a> {
    pixels: &'a mut [u8],
    width: usize,
    rows: Range<usize>,
}

impl BandPainter<'_> {
    // Every cell whose pixel span [r*k, r*k+k] meets the band, in row-major order
    fn paint_cells(&mut self, maze: &Maze, size: usize) {
        if self.rows.is_empty() {
            return;
        }
        let first = self.rows.start.saturating_sub(size).div_ceil(size);
        let last = ((self.rows.end - 1) / size).min(maze.rows() - 1);

        for row in first..=last {
            for col in 0..maze.cols() {
                self.paint_cell(maze, [row, col], size);
            }
        }
    }

    fn paint_cell(&mut self, maze: &Maze, point: [usize; 2], size: usize) {
        let Some(cell) = maze.cell(point) else {
            return;
        };
        let x = point[1] * size;
        let y = point[0] * size;

        if point == maze.start() {
            self.fill(x, y, size, Rgba(START_COLOR));
        } else if point == maze.end() {
            self.fill(x, y, size, Rgba(END_COLOR));
        }

        for side in Side::ALL {
            if cell.has_wall(side) {
                let color = wall_color(cell.wall_weights[side.index()]);
                self.stroke(x, y, size, side, color);
            }
        }
    }

    fn fill(&mut self, x: usize, y: usize, size: usize, color: Rgba<u8>) {
        for dy in 1..size {
            for dx in 1..size {
                self.put(x + dx, y + dy, color);
            }
        }
    }

    fn stroke(&mut self, x: usize, y: usize, size: usize, side: Side, color: Rgba<u8>) {
        for i in 0..=size {
            match side {
                Side::Top => self.put(x + i, y, color),
                Side::Right => self.put(x + size, y + i, color),
                Side::Bottom => self.put(x + i, y + size, color),
                Side::Left => self.put(x, y + i, color),
            }
        }
    }

    // Pixels outside the band or canvas are dropped
    fn put(&mut self, x: usize, y: usize, color: Rgba<u8>) {
        if x >= self.width || !self.rows.contains(&y) {
            return;
        }
        let offset = ((y - self.rows.start) * self.width + x) * CHANNELS;
        if let Some(pixel) = self.pixels.get_mut(offset..offset + CHANNELS) {
            pixel.copy_from_slice(&color.0);
        }
    }
}
