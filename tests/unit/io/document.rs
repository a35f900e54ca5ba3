//! Tests for JSON maze and solution documents

#[cfg(test)]
mod tests {
    use gridmaze::MazeError;
    use gridmaze::algorithm::executor::{GenerationMode, MazeGenerator};
    use gridmaze::algorithm::pathfinding::{SolveAlgorithm, solve};
    use gridmaze::io::document::{
        load_maze, maze_from_json, maze_to_json, solution_from_json, solution_to_json,
        write_document,
    };
    use gridmaze::spatial::Maze;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn image_maze() -> Maze {
        let image = RgbaImage::from_fn(32, 32, |x, y| {
            if x + y < 32 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();

        MazeGenerator::new(9)
            .generate(8, 8, GenerationMode::Image, Some(bytes.get_ref()))
            .unwrap()
    }

    // Tests a maze survives encode and decode with walls, weights and endpoints
    // Verified by skipping the weights field during serialization
    #[test]
    fn test_maze_round_trip() {
        let maze = image_maze();
        let decoded = maze_from_json(&maze_to_json(&maze).unwrap()).unwrap();

        assert_eq!(decoded, maze);
        assert_eq!(decoded.weights(), maze.weights());
    }

    // Tests the document exposes the expected field names
    // Verified by renaming the wall priority field
    #[test]
    fn test_maze_document_fields() {
        let json = maze_to_json(&image_maze()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for field in ["rows", "cols", "grid", "start", "end", "weights"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        let cell = &value["grid"][0][0];
        for field in ["row", "col", "visited", "walls", "wall_weights"] {
            assert!(cell.get(field).is_some(), "missing cell field {field}");
        }
        assert_eq!(value["grid"].as_array().map(Vec::len), Some(8));
    }

    // Tests documents without weights decode to unweighted mazes
    // Verified by requiring the weights field
    #[test]
    fn test_missing_weights_field() {
        let maze = Maze::new(2, 3).unwrap();
        let mut value = serde_json::to_value(&maze).unwrap();
        value.as_object_mut().unwrap().remove("weights");

        let decoded = maze_from_json(&value.to_string()).unwrap();
        assert!(decoded.weights().is_none());
        assert_eq!(decoded, maze);
    }

    // Tests ragged grids and mismatched dimensions are rejected
    // Verified by skipping validation after decoding
    #[test]
    fn test_inconsistent_documents_rejected() {
        let maze = Maze::new(2, 2).unwrap();

        let mut ragged = serde_json::to_value(&maze).unwrap();
        ragged["grid"][1].as_array_mut().unwrap().pop();
        assert!(matches!(
            maze_from_json(&ragged.to_string()),
            Err(MazeError::Document { .. })
        ));

        let mut mismatched = serde_json::to_value(&maze).unwrap();
        mismatched["rows"] = serde_json::json!(5);
        assert!(matches!(
            maze_from_json(&mismatched.to_string()),
            Err(MazeError::InvalidDimensions { .. })
        ));

        assert!(matches!(
            maze_from_json("not json"),
            Err(MazeError::Document { .. })
        ));
    }

    // Tests cells whose stored coordinates differ from their grid position are rejected
    // Verified by validating only the grid shape
    #[test]
    fn test_misplaced_cell_coordinates_rejected() {
        let maze = Maze::new(3, 3).unwrap();

        let mut overflowing = serde_json::to_value(&maze).unwrap();
        overflowing["grid"][0][0]["row"] = serde_json::json!(u64::MAX);
        assert!(matches!(
            maze_from_json(&overflowing.to_string()),
            Err(MazeError::InvalidDimensions { .. })
        ));

        let mut shifted = serde_json::to_value(&maze).unwrap();
        for row in shifted["grid"].as_array_mut().unwrap() {
            for cell in row.as_array_mut().unwrap() {
                cell["row"] = serde_json::json!(3);
            }
        }
        assert!(matches!(
            maze_from_json(&shifted.to_string()),
            Err(MazeError::InvalidDimensions { .. })
        ));

        let mut swapped = serde_json::to_value(&maze).unwrap();
        swapped["grid"][1][2]["col"] = serde_json::json!(1);
        assert!(maze_from_json(&swapped.to_string()).is_err());
    }

    // Tests search results survive encode and decode
    // Verified by dropping the visited list from the document
    #[test]
    fn test_solution_round_trip() {
        let maze = image_maze();
        let solution = solve(&maze, SolveAlgorithm::Bfs).unwrap();

        let decoded = solution_from_json(&solution_to_json(&solution).unwrap()).unwrap();
        assert_eq!(decoded, solution);
    }

    // Tests documents are written and read back from disk
    // Verified by not creating parent directories
    #[test]
    fn test_write_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs").join("maze.json");
        let maze = image_maze();

        write_document(&path, &maze_to_json(&maze).unwrap()).unwrap();
        assert_eq!(load_maze(&path).unwrap(), maze);
    }

    // Tests a missing file is a file system error naming the path
    // Verified by mapping read failures to document errors
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let error = load_maze(&path).unwrap_err();
        assert!(matches!(error, MazeError::FileSystem { .. }));
        assert!(error.to_string().contains("absent.json"));
    }
}
