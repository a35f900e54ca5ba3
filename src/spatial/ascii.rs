//! Plain-text rendering of a maze for terminals and logs

use std::fmt;

use crate::spatial::maze::{Maze, Side};

/// Render a maze as ASCII art
///
/// Every cell is drawn four characters wide and two lines tall, giving
/// `2 * rows + 1` lines of `4 * cols + 1` characters. The entrance is marked
/// with `*` and the exit with `-`.
pub fn render_ascii(maze: &Maze) -> String {
    let mut out = String::with_capacity((2 * maze.rows() + 1) * (4 * maze.cols() + 2));

    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            out.push('+');
            out.push_str(if maze.has_wall([row, col], Side::Top) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for col in 0..maze.cols() {
            out.push(if maze.has_wall([row, col], Side::Left) {
                '|'
            } else {
                ' '
            });

            let point = [row, col];
            out.push_str(if point == maze.start() {
                " * "
            } else if point == maze.end() {
                " - "
            } else {
                "   "
            });
        }
        let closing = maze.has_wall([row, maze.cols() - 1], Side::Right);
        out.push_str(if closing { "|\n" } else { " \n" });
    }

    let last_row = maze.rows() - 1;
    for col in 0..maze.cols() {
        out.push('+');
        out.push_str(if maze.has_wall([last_row, col], Side::Bottom) {
            "---"
        } else {
            "   "
        });
    }
    out.push('+');

    out
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_ascii(self))
    }
}
