//! Grid model shared by the maze loader, the search, and the renderer.
//!
//! A [`Grid`] is a rectangular, row-major array of [`Cell`]s addressed by [`Coordinate`]s. It is
//! built once per maze and never mutated afterwards, which lets several searches borrow the same
//! grid at the same time.

use std::fmt;

use thiserror::Error;

/// Offsets of the four orthogonal neighbours, in expansion order: right, down, left, up.
///
/// The order is part of the search's observable behaviour because it decides the insertion order
/// of equal-priority frontier entries.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Reasons a list of rows cannot form a rectangular grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// There are no rows, or the first row has no cells.
    #[error("grid has no cells")]
    Empty,
    /// A row is wider or narrower than the first one.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A cell a path may pass through.
    Open,
    /// A cell a path may never enter.
    Wall,
}

/// Zero-indexed position in a [`Grid`].
///
/// Equality and ordering are component-wise, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index, growing downwards.
    pub row: usize,
    /// Column index, growing to the right.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the Manhattan distance between two coordinates.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` when both coordinates share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Shifts the coordinate by a signed offset, failing on underflow.
    fn offset(self, (row_step, col_step): (isize, isize)) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_step)?,
            col: self.col.checked_add_signed(col_step)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Rectangular maze of open cells and walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Cells in row-major order, `rows * cols` of them.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from cells laid out in row-major order.
    ///
    /// Returns `None` when `cells` does not hold exactly `rows * cols` entries.
    #[must_use]
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Option<Self> {
        (rows.checked_mul(cols)? == cells.len()).then_some(Self { rows, cols, cells })
    }

    /// Builds a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// This function returns a [`ShapeError`] when there are no cells or the rows do not all share
    /// the width of the first one.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ShapeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ShapeError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, found)| found != width)
        {
            return Err(ShapeError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` when the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }

    /// Returns the cell at `coordinate`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        if !self.contains(coordinate) {
            return None;
        }

        self.cells
            .get(coordinate.row * self.cols + coordinate.col)
            .copied()
    }

    /// Returns `true` when `coordinate` is inside the grid and open.
    #[must_use]
    pub fn is_open(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate) == Some(Cell::Open)
    }

    /// Iterates over the in-bounds open neighbours of `coordinate`.
    ///
    /// Neighbours are yielded right, down, left, up.
    pub fn neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&step| coordinate.offset(step))
            .filter(move |&next| self.is_open(next))
    }

    /// Iterates over every coordinate holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, candidate)| *candidate == cell)
            .map(move |(index, _)| Coordinate::new(index / self.cols, index % self.cols))
    }
}
