//! Tests for breadth-first, depth-first and A* search

#[cfg(test)]
mod tests {
    use gridmaze::MazeError;
    use gridmaze::algorithm::executor::{GenerationMode, MazeGenerator};
    use gridmaze::algorithm::pathfinding::{Solution, SolveAlgorithm, astar, bfs, dfs, solve};
    use gridmaze::spatial::Maze;
    use gridmaze::spatial::maze::side_between;
    use std::collections::HashSet;

    // Single corridor (0,0) -> (0,1) -> (0,2) -> (1,2) -> (2,2), everything else walled
    fn corridor() -> Maze {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_walls([0, 0], [0, 1]);
        maze.remove_walls([0, 1], [0, 2]);
        maze.remove_walls([0, 2], [1, 2]);
        maze.remove_walls([1, 2], [2, 2]);
        maze.set_manual_start_end([0, 0], [2, 2]).unwrap();
        maze
    }

    fn assert_valid_path(maze: &Maze, path: &[[usize; 2]]) {
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        for pair in path.windows(2) {
            assert!(side_between(pair[0], pair[1]).is_some());
            assert!(
                maze.neighbors(pair[0]).contains(&pair[1]),
                "step {:?} -> {:?} crosses a wall",
                pair[0],
                pair[1]
            );
        }
    }

    // Tests BFS on a single corridor expands exactly the corridor and returns it in order
    // Verified by marking cells seen on dequeue instead of enqueue
    #[test]
    fn test_bfs_corridor() {
        let maze = corridor();
        let solution = bfs(&maze, maze.start(), maze.end());

        let expected = vec![[0, 0], [0, 1], [0, 2], [1, 2], [2, 2]];
        assert_eq!(solution.visited.len(), 5);
        assert_eq!(solution.path, expected);
        assert!(solution.is_solved());
    }

    // Tests all three searches agree on the corridor
    // Verified by reversing the reconstructed path
    #[test]
    fn test_all_algorithms_on_corridor() {
        let maze = corridor();
        for algorithm in [SolveAlgorithm::AStar, SolveAlgorithm::Bfs, SolveAlgorithm::Dfs] {
            let solution = solve(&maze, algorithm).unwrap();
            assert_eq!(solution.path.len(), 5, "{algorithm}");
            assert_valid_path(&maze, &solution.path);
        }
    }

    // Tests BFS and A* find equally short paths and DFS finds a valid one
    // Verified by giving A* an inadmissible heuristic
    #[test]
    fn test_optimal_lengths_agree() {
        for (seed, mode) in [
            (1, GenerationMode::Kruskal),
            (2, GenerationMode::Recursive),
            (3, GenerationMode::Kruskal),
            (4, GenerationMode::Recursive),
        ] {
            let maze = MazeGenerator::new(seed).generate(20, 25, mode, None).unwrap();

            let shortest = bfs(&maze, maze.start(), maze.end());
            let guided = astar(&maze, maze.start(), maze.end());
            let deep = dfs(&maze, maze.start(), maze.end());

            assert_eq!(guided.path.len(), shortest.path.len());
            assert!(deep.path.len() >= shortest.path.len());
            assert_valid_path(&maze, &shortest.path);
            assert_valid_path(&maze, &guided.path);
            assert_valid_path(&maze, &deep.path);
        }
    }

    // Tests A* never expands a cell twice even when it re-pushes neighbors
    // Verified by removing the stale-entry check on pop
    #[test]
    fn test_astar_visits_each_cell_once() {
        let mut maze = Maze::new(8, 8).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                maze.remove_walls([row, col], [row, col + 1]);
                maze.remove_walls([row, col], [row + 1, col]);
            }
        }
        maze.set_manual_start_end([0, 0], [7, 7]).unwrap();

        let solution = astar(&maze, maze.start(), maze.end());
        let unique: HashSet<_> = solution.visited.iter().collect();

        assert_eq!(unique.len(), solution.visited.len());
        assert_eq!(solution.path.len(), 15);
    }

    // Tests DFS explores the last pushed neighbor first
    // Verified by popping from the front of the frontier
    #[test]
    fn test_dfs_prefers_last_pushed_neighbor() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_walls([1, 1], [0, 1]);
        maze.remove_walls([1, 1], [1, 2]);
        maze.remove_walls([1, 1], [2, 1]);
        maze.remove_walls([1, 1], [1, 0]);

        let solution = dfs(&maze, [1, 1], [0, 1]);
        assert_eq!(solution.visited, vec![[1, 1], [1, 0], [2, 1], [1, 2], [0, 1]]);
        assert_eq!(solution.path, vec![[1, 1], [0, 1]]);
    }

    // Tests an unreachable goal yields an empty path and a full exploration
    // Verified by returning the partial parent chain
    #[test]
    fn test_unreachable_goal() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_walls([0, 0], [0, 1]);

        for solution in [
            bfs(&maze, [0, 0], [1, 1]),
            dfs(&maze, [0, 0], [1, 1]),
            astar(&maze, [0, 0], [1, 1]),
        ] {
            assert!(solution.path.is_empty());
            assert!(!solution.is_solved());
            assert_eq!(solution.visited.len(), 2);
        }
    }

    // Tests start equal to end is a one-cell path
    // Verified by requiring at least one step
    #[test]
    fn test_start_equals_end() {
        let maze = Maze::new(2, 2).unwrap();
        let solution = bfs(&maze, [1, 0], [1, 0]);
        assert_eq!(solution.visited, vec![[1, 0]]);
        assert_eq!(solution.path, vec![[1, 0]]);
    }

    // Tests search on a maze whose endpoints lie outside the grid fails fast
    // Verified by removing the bounds check from solve
    #[test]
    fn test_solve_rejects_out_of_bounds_endpoints() {
        let mut value = serde_json::to_value(corridor()).unwrap();
        value["end"] = serde_json::json!([9, 9]);
        let broken: Maze = serde_json::from_value(value).unwrap();

        assert!(matches!(
            solve(&broken, SolveAlgorithm::Bfs),
            Err(MazeError::OutOfBounds { point: [9, 9], .. })
        ));
    }

    // Tests algorithm names parse case-insensitively
    // Verified by matching names case-sensitively
    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("astar".parse::<SolveAlgorithm>().unwrap(), SolveAlgorithm::AStar);
        assert_eq!("BFS".parse::<SolveAlgorithm>().unwrap(), SolveAlgorithm::Bfs);
        assert_eq!("Dfs".parse::<SolveAlgorithm>().unwrap(), SolveAlgorithm::Dfs);
        assert!(matches!(
            "dijkstra".parse::<SolveAlgorithm>(),
            Err(MazeError::UnsupportedOption { .. })
        ));
        assert_eq!(SolveAlgorithm::AStar.to_string(), "astar");
    }

    // Tests an empty solution reports itself unsolved
    // Verified by checking visited instead of path
    #[test]
    fn test_solution_default() {
        let solution = Solution::default();
        assert!(!solution.is_solved());
        assert!(solution.visited.is_empty());
    }
}
