//! A* search over a [`Grid`].
//!
//! This module holds the one piece of the application with real algorithmic content: a best-first
//! search that expands cells in order of `cost + heuristic`, records the order in which it expands
//! them, and rebuilds the cheapest route from the predecessor links it keeps along the way.
//!
//! Each call to [`search`] owns its frontier, cost records, and visit log, so independent searches
//! can run side by side over the same grid.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet},
    fmt,
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::grid::{Cell, Coordinate, Grid};

/// One of the two endpoints of a search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The cell the path starts from.
    Start,
    /// The cell the path must reach.
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Rejected search requests.
///
/// An unreachable goal is not an error; it is reported through [`SearchResult::path`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    #[error("{endpoint} {coordinate} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Which endpoint was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        coordinate: Coordinate,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// An endpoint sits on a wall.
    #[error("{endpoint} {coordinate} is a wall")]
    Blocked {
        /// Which endpoint was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        coordinate: Coordinate,
    },
}

/// Outcome of a search: the optimal path, if any, and the order in which cells were expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells from start to goal inclusive, or `None` when the goal is unreachable.
    path: Option<Vec<Coordinate>>,
    /// Expanded cells in expansion order, without duplicates and without the goal.
    visited: Vec<Coordinate>,
}

impl SearchResult {
    /// Returns the optimal path from start to goal, both inclusive.
    #[must_use]
    pub fn path(&self) -> Option<&[Coordinate]> {
        self.path.as_deref()
    }

    /// Returns the cells in the order the search expanded them.
    #[must_use]
    pub fn visited(&self) -> &[Coordinate] {
        &self.visited
    }

    /// Returns `true` when a path to the goal was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the displayed optimal path length.
    ///
    /// The count excludes both endpoints, so a path of `n` cells reports `n - 2`.
    #[must_use]
    pub fn optimal_length(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(2))
    }

    /// Returns the displayed traversed length, which excludes the start cell.
    #[must_use]
    pub fn traversed_length(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }
}

/// Per-cell bookkeeping for the best route found so far.
#[derive(Clone, Copy, Debug)]
struct CostRecord {
    /// Number of moves from the start.
    cost: usize,
    /// Cell this route arrived from, `None` for the start.
    predecessor: Option<Coordinate>,
}

/// Pending expansion in the frontier.
///
/// Entries pop in ascending `priority`, then ascending `heuristic`, then ascending `sequence`.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    /// Route cost plus heuristic estimate.
    priority: usize,
    /// Heuristic estimate alone.
    heuristic: usize,
    /// Insertion counter; equal entries leave in the order they arrived.
    sequence: usize,
    /// Cell to expand.
    coordinate: Coordinate,
}

impl FrontierEntry {
    /// Route cost the entry was pushed with.
    const fn cost(&self) -> usize {
        self.priority - self.heuristic
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap, so every key is compared in reverse.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Frontier of the search, with the sequence counter that keeps tie-breaking deterministic.
#[derive(Debug, Default)]
struct Frontier {
    /// Pending entries.
    heap: BinaryHeap<FrontierEntry>,
    /// Next insertion number.
    next_sequence: usize,
}

impl Frontier {
    /// Queues `coordinate` reached at `cost`.
    fn push(&mut self, coordinate: Coordinate, cost: usize, heuristic: usize) {
        self.heap.push(FrontierEntry {
            priority: cost + heuristic,
            heuristic,
            sequence: self.next_sequence,
            coordinate,
        });
        self.next_sequence += 1;
    }

    /// Removes the entry that should be expanded next.
    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Estimated number of moves left from `coordinate` to `goal`.
///
/// Manhattan distance never overestimates on a 4-connected unit-cost grid, which keeps A* optimal.
#[must_use]
pub const fn heuristic(coordinate: Coordinate, goal: Coordinate) -> usize {
    coordinate.manhattan_distance(goal)
}

/// Finds a shortest 4-directional path from `start` to `goal`.
///
/// The search expands cells in order of route cost plus Manhattan distance to the goal, breaking
/// ties by the smaller distance and then by insertion order, so repeated calls on the same input
/// return the same path and the same visit order. The goal itself is never logged as visited.
///
/// # Errors
///
/// This function returns an error if either endpoint lies outside the grid or sits on a wall.
pub fn search(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
) -> Result<SearchResult, SearchError> {
    validate(grid, Endpoint::Start, start)?;
    validate(grid, Endpoint::Goal, goal)?;

    debug!(%start, %goal, rows = grid.rows(), cols = grid.cols(), "starting search");

    let mut records = HashMap::from([(
        start,
        CostRecord {
            cost: 0,
            predecessor: None,
        },
    )]);
    let mut frontier = Frontier::default();
    let mut visited = Vec::new();
    let mut expanded = HashSet::new();

    frontier.push(start, 0, heuristic(start, goal));

    while let Some(entry) = frontier.pop() {
        let current = entry.coordinate;
        let cost = entry.cost();

        if is_stale(&records, &entry) {
            trace!(%current, stale = cost, "skipping stale entry");
            continue;
        }

        if current == goal {
            let path = reconstruct_path(&records, goal);
            debug!(
                moves = cost,
                expanded = visited.len(),
                "search reached the goal"
            );

            return Ok(SearchResult {
                path: Some(path),
                visited,
            });
        }

        if expanded.insert(current) {
            visited.push(current);
        }

        for neighbor in grid.neighbors(current) {
            let tentative = cost + 1;
            let improves = records
                .get(&neighbor)
                .is_none_or(|record| tentative < record.cost);

            if improves {
                let _ = records.insert(
                    neighbor,
                    CostRecord {
                        cost: tentative,
                        predecessor: Some(current),
                    },
                );
                frontier.push(neighbor, tentative, heuristic(neighbor, goal));
            }
        }
    }

    debug!(expanded = visited.len(), "frontier exhausted without reaching the goal");

    Ok(SearchResult {
        path: None,
        visited,
    })
}

/// Returns `true` when a cheaper route to the entry's cell was recorded after it was queued.
///
/// Every queued cell gets a record before it is pushed, so a missing record also counts as stale
/// rather than being expanded with an unknown cost.
fn is_stale(records: &HashMap<Coordinate, CostRecord>, entry: &FrontierEntry) -> bool {
    records
        .get(&entry.coordinate)
        .is_none_or(|record| entry.cost() > record.cost)
}

/// Checks that an endpoint is inside the grid and open.
fn validate(grid: &Grid, endpoint: Endpoint, coordinate: Coordinate) -> Result<(), SearchError> {
    match grid.cell(coordinate) {
        Some(Cell::Open) => Ok(()),
        Some(Cell::Wall) => Err(SearchError::Blocked {
            endpoint,
            coordinate,
        }),
        None => Err(SearchError::OutOfBounds {
            endpoint,
            coordinate,
            rows: grid.rows(),
            cols: grid.cols(),
        }),
    }
}

/// Follows predecessor links back from `goal` and returns the route in start-to-goal order.
fn reconstruct_path(
    records: &HashMap<Coordinate, CostRecord>,
    goal: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(previous) = records.get(&current).and_then(|record| record.predecessor) {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
