//! Maze data and parsing module.
//!
//! This module contains the [`Maze`] struct, which pairs a [`Grid`] with its start and goal
//! positions, along with the parser for the maze text format and the built-in default maze.

use std::sync::LazyLock;

use thiserror::Error;

use crate::grid::{Cell, Coordinate, Grid, ShapeError};

/// Symbol marking a wall cell.
const WALL: char = '#';
/// Symbol marking an open cell.
const OPEN: char = '.';
/// Symbol marking the start cell.
const START: char = 'S';
/// Symbol marking the goal cell.
const GOAL: char = 'G';

/// Reasons a maze description is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no size line.
    #[error("missing maze size line")]
    MissingSize,
    /// The size line is not a positive integer.
    #[error("invalid maze size {0:?}")]
    InvalidSize(String),
    /// Fewer rows follow the size line than it announced.
    #[error("expected {expected} rows but found {found}")]
    MissingRows {
        /// Rows announced by the size line.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
    /// The rows do not form a non-empty rectangle.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// A cell uses a symbol outside of `#`, `.`, `S`, and `G`.
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        /// Row of the symbol.
        row: usize,
        /// Column of the symbol.
        col: usize,
        /// The offending symbol.
        symbol: char,
    },
    /// No start marker was found.
    #[error("maze has no start marker")]
    MissingStart,
    /// No goal marker was found.
    #[error("maze has no goal marker")]
    MissingGoal,
    /// More than one start marker was found.
    #[error("second start marker at {0}")]
    DuplicateStart(Coordinate),
    /// More than one goal marker was found.
    #[error("second goal marker at {0}")]
    DuplicateGoal(Coordinate),
}

/// Named maze ready to be searched.
///
/// The start and goal markers are stored as coordinates; the grid itself holds them as open
/// cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Display name of the maze, usually the file name without its extension.
    pub key: String,
    /// Walls and open cells.
    pub grid: Grid,
    /// Where the search starts.
    pub start: Coordinate,
    /// Where the search must arrive.
    pub goal: Coordinate,
}

impl Default for Maze {
    fn default() -> Self {
        Self::parse("Default", &DEFAULT_MAZE).expect("failed to parse default maze")
    }
}

impl Maze {
    /// Parses a maze from its text representation.
    ///
    /// The first line holds the number of rows `N`; the next `N` lines hold the rows, all of the
    /// same width, using `#` for walls, `.` for open cells, and one `S` and one `G` for the
    /// endpoints. Lines after the last row are ignored.
    ///
    /// # Errors
    ///
    /// This function returns a [`ParseError`] describing the first problem found in the input.
    pub fn parse(key: &str, contents: &str) -> Result<Self, ParseError> {
        let mut lines = contents.lines();

        let size_line = lines.next().ok_or(ParseError::MissingSize)?.trim();
        let size = size_line
            .parse::<usize>()
            .ok()
            .filter(|&size| size > 0)
            .ok_or_else(|| ParseError::InvalidSize(size_line.to_owned()))?;

        let rows: Vec<&str> = lines
            .take(size)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if rows.len() < size {
            return Err(ParseError::MissingRows {
                expected: size,
                found: rows.len(),
            });
        }

        let mut markers = Markers::default();
        let mut cells = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            cells.push(parse_row(row, line, &mut markers)?);
        }

        let grid = Grid::from_rows(cells)?;

        Ok(Self {
            key: key.to_owned(),
            grid,
            start: markers.start.ok_or(ParseError::MissingStart)?,
            goal: markers.goal.ok_or(ParseError::MissingGoal)?,
        })
    }
}

/// Start and goal positions collected while parsing.
#[derive(Default)]
struct Markers {
    /// Position of the `S` marker.
    start: Option<Coordinate>,
    /// Position of the `G` marker.
    goal: Option<Coordinate>,
}

/// Converts one row of symbols into cells, recording any endpoint markers on the way.
fn parse_row(row: usize, line: &str, markers: &mut Markers) -> Result<Vec<Cell>, ParseError> {
    line.chars()
        .enumerate()
        .map(|(col, symbol)| {
            let here = Coordinate::new(row, col);
            match symbol {
                WALL => Ok(Cell::Wall),
                OPEN => Ok(Cell::Open),
                START => match markers.start.replace(here) {
                    None => Ok(Cell::Open),
                    Some(_) => Err(ParseError::DuplicateStart(here)),
                },
                GOAL => match markers.goal.replace(here) {
                    None => Ok(Cell::Open),
                    Some(_) => Err(ParseError::DuplicateGoal(here)),
                },
                _ => Err(ParseError::UnknownSymbol { row, col, symbol }),
            }
        })
        .collect()
}

/// Default maze used as fallback.
///
/// This static holds the maze shown before the user picks one and listed first in the maze menu.
static DEFAULT_MAZE: LazyLock<&str> = LazyLock::new(|| {
    "\
15
###############
#S..#.........#
#.#.#.#####.#.#
#.#...#...#.#.#
#.#####.#.#.#.#
#.....#.#...#.#
#####.#.#####.#
#.....#.....#.#
#.#########.#.#
#.#.......#.#.#
#.#.#####.#.#.#
#...#...#.#...#
#.###.#.#.#####
#.....#.....G.#
###############"
});
