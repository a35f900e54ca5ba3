//! Mathematical utilities for the vision pipeline

/// Sobel kernels, gradient orientation and direction quantization
pub mod gradient;
