//! Tests for the grid model, wall topology and border endpoint placement

#[cfg(test)]
mod tests {
    use gridmaze::MazeError;
    use gridmaze::spatial::maze::{manhattan, side_between};
    use gridmaze::spatial::{Cell, Maze, Side};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests a new maze starts with every wall standing and default priorities
    // Verified by initializing walls to false
    #[test]
    fn test_new_maze_is_fully_walled() {
        let maze = Maze::new(3, 4).unwrap();

        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 4);
        assert_eq!(maze.cell_count(), 12);
        assert_eq!(maze.grid().dim(), (3, 4));
        for row in 0..3 {
            for col in 0..4 {
                let cell = maze.cell([row, col]).unwrap();
                assert_eq!((cell.row, cell.col), (row, col));
                assert_eq!(cell.walls, [true; 4]);
                assert_eq!(cell.wall_weights, [255; 4]);
                assert!(!cell.visited);
            }
        }
        assert_eq!(maze.removed_wall_count(), 0);
        assert!(maze.weights().is_none());
    }

    // Tests dimensions below two are rejected
    // Verified by lowering the minimum dimension to one
    #[test]
    fn test_new_rejects_degenerate_dimensions() {
        assert!(matches!(
            Maze::new(1, 5),
            Err(MazeError::InvalidDimensions { rows: 1, cols: 5, .. })
        ));
        assert!(matches!(
            Maze::new(5, 0),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(Maze::new(2, 2).is_ok());
    }

    // Tests removing a wall clears the matching flag on both cells
    // Verified by only clearing the first cell's wall
    #[test]
    fn test_remove_walls_is_symmetric() {
        let mut maze = Maze::new(3, 3).unwrap();

        maze.remove_walls([1, 1], [1, 2]);
        assert!(!maze.has_wall([1, 1], Side::Right));
        assert!(!maze.has_wall([1, 2], Side::Left));

        maze.remove_walls([1, 1], [0, 1]);
        assert!(!maze.has_wall([1, 1], Side::Top));
        assert!(!maze.has_wall([0, 1], Side::Bottom));

        assert!(maze.has_wall([1, 1], Side::Bottom));
        assert!(maze.has_wall([1, 1], Side::Left));
        assert_eq!(maze.removed_wall_count(), 2);
    }

    // Tests non-adjacent pairs leave the maze untouched
    // Verified by treating diagonal cells as adjacent
    #[test]
    fn test_remove_walls_ignores_non_adjacent_cells() {
        let mut maze = Maze::new(3, 3).unwrap();
        let before = maze.clone();

        maze.remove_walls([0, 0], [1, 1]);
        maze.remove_walls([0, 0], [0, 2]);
        maze.remove_walls([2, 2], [2, 3]);

        assert_eq!(maze, before);
    }

    // Tests neighbors come back in north, east, south, west order
    // Verified by reordering Side::ALL
    #[test]
    fn test_neighbors_order_and_walls() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert!(maze.neighbors([1, 1]).is_empty());

        maze.remove_walls([1, 1], [1, 0]);
        maze.remove_walls([1, 1], [2, 1]);
        maze.remove_walls([1, 1], [0, 1]);
        maze.remove_walls([1, 1], [1, 2]);

        assert_eq!(
            maze.neighbors([1, 1]),
            vec![[0, 1], [1, 2], [2, 1], [1, 0]]
        );
        assert_eq!(maze.neighbors([0, 1]), vec![[1, 1]]);
        assert!(maze.neighbors([7, 7]).is_empty());
    }

    // Tests opened exterior walls never yield out-of-grid neighbors
    // Verified by removing the bounds filter from neighbor queries
    #[test]
    fn test_neighbors_exclude_cells_outside_grid() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.set_manual_start_end([0, 0], [2, 2]).unwrap();

        assert!(maze.neighbors([0, 0]).is_empty());
        assert!(maze.neighbors([2, 2]).is_empty());
    }

    // Tests corner endpoints lose both exterior walls and keep interior ones
    // Verified by clearing only one exterior wall per endpoint
    #[test]
    fn test_corner_endpoints_clear_two_walls() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.set_manual_start_end([0, 0], [2, 2]).unwrap();

        assert_eq!(maze.start(), [0, 0]);
        assert_eq!(maze.end(), [2, 2]);

        let start = maze.cell([0, 0]).unwrap();
        assert!(!start.has_wall(Side::Top));
        assert!(!start.has_wall(Side::Left));
        assert!(start.has_wall(Side::Right));
        assert!(start.has_wall(Side::Bottom));

        let end = maze.cell([2, 2]).unwrap();
        assert!(!end.has_wall(Side::Bottom));
        assert!(!end.has_wall(Side::Right));
        assert!(end.has_wall(Side::Top));
        assert!(end.has_wall(Side::Left));
    }

    // Tests edge (non-corner) endpoints clear exactly their exterior wall
    // Verified by clearing the wall on the wrong side
    #[test]
    fn test_edge_endpoints_clear_one_wall() {
        let mut maze = Maze::new(4, 5).unwrap();
        maze.set_manual_start_end([2, 0], [0, 3]).unwrap();

        assert_eq!(maze.cell([2, 0]).unwrap().wall_count(), 3);
        assert!(!maze.has_wall([2, 0], Side::Left));
        assert_eq!(maze.cell([0, 3]).unwrap().wall_count(), 3);
        assert!(!maze.has_wall([0, 3], Side::Top));
    }

    // Tests interior or out-of-grid endpoints are rejected with a boundary error
    // Verified by skipping the border check
    #[test]
    fn test_manual_endpoints_must_be_on_border() {
        let mut maze = Maze::new(4, 4).unwrap();

        let result = maze.set_manual_start_end([1, 1], [0, 3]);
        assert!(matches!(
            result,
            Err(MazeError::Boundary {
                point: [1, 1],
                dimensions: (4, 4)
            })
        ));

        let result = maze.set_manual_start_end([0, 0], [4, 0]);
        assert!(matches!(result, Err(MazeError::Boundary { point: [4, 0], .. })));
    }

    // Tests random endpoints are distinct, on the border, well separated and opened
    // Verified by dropping the separation condition from the sampling loop
    #[test]
    fn test_random_start_end_properties() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut maze = Maze::new(6, 9).unwrap();
            maze.set_random_start_end(&mut rng);

            let (start, end) = (maze.start(), maze.end());
            assert_ne!(start, end);
            assert!(maze.is_border(start));
            assert!(maze.is_border(end));
            assert!(manhattan(start, end) as f64 >= 0.5 * 15.0);

            for point in [start, end] {
                let cell = maze.cell(point).unwrap();
                assert!(cell.wall_count() < 4, "endpoint {point:?} was not opened");
            }
        }
    }

    // Tests border detection on every side
    // Verified by omitting the last-column comparison
    #[test]
    fn test_is_border() {
        let maze = Maze::new(4, 5).unwrap();

        assert!(maze.is_border([0, 2]));
        assert!(maze.is_border([3, 2]));
        assert!(maze.is_border([2, 0]));
        assert!(maze.is_border([2, 4]));
        assert!(!maze.is_border([1, 1]));
        assert!(!maze.is_border([4, 0]));
    }

    // Tests linear indices and coordinates convert both ways
    // Verified by using rows instead of cols as the stride
    #[test]
    fn test_index_round_trip() {
        let maze = Maze::new(3, 7).unwrap();

        assert_eq!(maze.index_of([2, 3]), 17);
        assert_eq!(maze.point_of(17), [2, 3]);
        for index in 0..maze.cell_count() {
            assert_eq!(maze.index_of(maze.point_of(index)), index);
        }
    }

    // Tests wall priorities are recorded on both sides of a boundary
    // Verified by writing the weight to a single cell
    #[test]
    fn test_set_wall_weight_is_symmetric() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_wall_weight([1, 1], [0, 1], 42);

        assert_eq!(maze.cell([1, 1]).unwrap().wall_weights[Side::Top.index()], 42);
        assert_eq!(maze.cell([0, 1]).unwrap().wall_weights[Side::Bottom.index()], 42);

        maze.fill_wall_weights(7);
        assert!(maze.grid().iter().all(|cell| cell.wall_weights == [7; 4]));
    }

    // Tests out-of-grid cells always report a wall
    // Verified by returning false for missing cells
    #[test]
    fn test_has_wall_outside_grid() {
        let maze = Maze::new(2, 2).unwrap();
        assert!(maze.has_wall([5, 5], Side::Top));
        assert!(maze.cell([2, 0]).is_none());
    }

    // Tests side relations and Manhattan distance helpers
    // Verified by swapping Top and Bottom in side_between
    #[test]
    fn test_side_helpers() {
        assert_eq!(side_between([1, 1], [0, 1]), Some(Side::Top));
        assert_eq!(side_between([1, 1], [1, 2]), Some(Side::Right));
        assert_eq!(side_between([1, 1], [2, 1]), Some(Side::Bottom));
        assert_eq!(side_between([1, 1], [1, 0]), Some(Side::Left));
        assert_eq!(side_between([1, 1], [2, 2]), None);
        assert_eq!(side_between([1, 1], [1, 1]), None);

        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.step([0, 0]), None);
        assert_eq!(Side::Right.step([0, 0]), Some([0, 1]));

        assert_eq!(manhattan([0, 0], [3, 4]), 7);
        assert_eq!(manhattan([3, 4], [0, 0]), 7);
    }

    // Tests the default cell is an enclosed origin cell
    // Verified by defaulting walls to open
    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!((cell.row, cell.col), (0, 0));
        assert_eq!(cell.wall_count(), 4);
    }

    // Tests validation accepts freshly built mazes
    // Verified by making validate compare rows against ncols
    #[test]
    fn test_validate_accepts_constructed_maze() {
        assert!(Maze::new(3, 8).unwrap().validate().is_ok());
    }

    // Tests wall counting follows grid positions rather than stored cell coordinates
    // Verified by reading the row from the cell when counting
    #[test]
    fn test_removed_wall_count_ignores_stored_coordinates() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_walls([0, 0], [1, 0]);
        maze.remove_walls([0, 0], [0, 1]);
        if let Some(cell) = maze.cell_mut([0, 0]) {
            cell.row = usize::MAX;
        }

        assert_eq!(maze.removed_wall_count(), 2);
        assert!(matches!(
            maze.validate(),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }
}
