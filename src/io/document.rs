//! JSON maze and solution documents exchanged with callers

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::algorithm::pathfinding::Solution;
use crate::io::error::{MazeError, Result, file_system_error};
use crate::spatial::Maze;

/// Encode a maze document as pretty-printed JSON
///
/// # Errors
///
/// Returns `Document` if serialization fails
pub fn maze_to_json(maze: &Maze) -> Result<String> {
    to_json(maze, "encode maze")
}

/// Decode and validate a maze document
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid maze document (`Document`)
/// - The grid shape disagrees with the stored dimensions (`InvalidDimensions`)
pub fn maze_from_json(text: &str) -> Result<Maze> {
    let maze: Maze = from_json(text, "decode maze")?;
    maze.validate()?;
    Ok(maze)
}

/// Encode a search result as pretty-printed JSON
///
/// # Errors
///
/// Returns `Document` if serialization fails
pub fn solution_to_json(solution: &Solution) -> Result<String> {
    to_json(solution, "encode solution")
}

/// Decode a search result
///
/// # Errors
///
/// Returns `Document` if the text is not a valid solution document
pub fn solution_from_json(text: &str) -> Result<Solution> {
    from_json(text, "decode solution")
}

/// Read and validate a maze document from disk
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or any error of [`maze_from_json`]
pub fn load_maze(path: &Path) -> Result<Maze> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read maze", e))?;
    maze_from_json(&text)
}

/// Write a JSON document to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be written
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
    }
    std::fs::write(path, contents).map_err(|e| file_system_error(path, "write document", e))
}

fn to_json<T: Serialize>(value: &T, operation: &'static str) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| MazeError::Document { operation, source })
}

fn from_json<T: DeserializeOwned>(text: &str, operation: &'static str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| MazeError::Document { operation, source })
}
