//! Plain-text rendering of a solved maze for headless runs.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::{
    grid::{Cell, Coordinate},
    maze::Maze,
    pathfinding::SearchResult,
};

/// Renders the maze with the search overlaid on it, followed by the display metrics.
///
/// Walls are `#`, unexplored cells `.`, expanded cells `x`, path cells `*`, and the endpoints keep
/// their `S` and `G` markers.
pub(crate) fn render(maze: &Maze, result: &SearchResult) -> Vec<String> {
    let grid = &maze.grid;
    let mut canvas: Vec<Vec<char>> = (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| match grid.cell(Coordinate::new(row, col)) {
                    Some(Cell::Wall) => '#',
                    _ => '.',
                })
                .collect()
        })
        .collect();

    let mut paint = |coordinate: Coordinate, symbol: char| {
        if let Some(slot) = canvas
            .get_mut(coordinate.row)
            .and_then(|line| line.get_mut(coordinate.col))
        {
            *slot = symbol;
        }
    };

    for &coordinate in result.visited() {
        paint(coordinate, 'x');
    }
    for &coordinate in result.path().unwrap_or_default() {
        paint(coordinate, '*');
    }
    paint(maze.start, 'S');
    paint(maze.goal, 'G');

    let mut lines: Vec<String> = canvas.into_iter().map(String::from_iter).collect();
    lines.extend(summary(maze, result));
    lines
}

/// Returns the three metric lines shown under the maze.
pub(crate) fn summary(maze: &Maze, result: &SearchResult) -> [String; 3] {
    [
        format!("Maze size: {}x{}", maze.grid.rows(), maze.grid.cols()),
        result.optimal_length().map_or_else(
            || "Optimal Path Length: No solution".to_owned(),
            |length| format!("Optimal Path Length: {length}"),
        ),
        format!("Traversed Path Length: {}", result.traversed_length()),
    ]
}

/// Writes the rendered report to `out`.
///
/// # Errors
///
/// This function may return errors if writing to `out` fails.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    maze: &Maze,
    result: &SearchResult,
) -> Result<()> {
    for line in render(maze, result) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
