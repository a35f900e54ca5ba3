//! Boundary layer: command line, documents, images, errors and constants

/// Command-line parsing and command execution
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// JSON maze and solution documents
pub mod document;
/// Error type and helpers
pub mod error;
/// Maze rasterization and PNG encoding
pub mod image;
/// Stage progress display
pub mod progress;
