//! Search animation and coordinate transformation module.
//!
//! This module replays a finished [`SearchResult`] one cell at a time for the in-game screen and
//! converts grid coordinates into the canvas coordinates used to draw them.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::{
    grid::{Coordinate, Grid},
    pathfinding::SearchResult,
};

/// Animation step types for search visualization.
///
/// The replay first shows every expanded cell and then the optimal path, mirroring the order in
/// which the search produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Mark a cell the search expanded.
    Visit(Coordinate),
    /// Mark a cell on the optimal path.
    Trace(Coordinate),
}

/// Animation state manager for search visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// cells displayed so far.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Animation steps recorded from the search result.
    pub(crate) steps: Vec<AnimationStep>,
    /// Index of the next step to play.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Expanded cells shown so far.
    pub(crate) visited: Vec<Coordinate>,
    /// Path cells shown so far.
    pub(crate) traced: Vec<Coordinate>,
    /// Pause before each [`AnimationStep::Visit`].
    pub(crate) visit_delay: Duration,
    /// Pause before each [`AnimationStep::Trace`].
    pub(crate) trace_delay: Duration,
}

impl AnimationManager {
    /// Creates an empty animation manager with the given step delays.
    pub(crate) fn new(visit_delay: Duration, trace_delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            visited: Vec::new(),
            traced: Vec::new(),
            visit_delay,
            trace_delay,
        }
    }

    /// Replaces the recorded steps with the replay of `result` and rewinds to the beginning.
    pub(crate) fn load(&mut self, result: &SearchResult) {
        self.steps.clear();
        self.steps
            .extend(result.visited().iter().copied().map(AnimationStep::Visit));
        self.steps.extend(
            result
                .path()
                .unwrap_or_default()
                .iter()
                .copied()
                .map(AnimationStep::Trace),
        );
        self.reset();
    }

    /// Rewinds the animation to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.visited.clear();
        self.traced.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Returns `true` once every recorded step has been played.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// This method plays the next step once its delay has elapsed since the previous one. The last
    /// frame is held once the animation is finished.
    pub(crate) fn update(&mut self) {
        let delay = match self.steps.get(self.current_index) {
            Some(AnimationStep::Visit(_)) => self.visit_delay,
            Some(AnimationStep::Trace(_)) => self.trace_delay,
            None => return,
        };

        if self.last_update_time.elapsed() >= delay {
            self.last_update_time = Instant::now();
            let _ = self.advance();
        }
    }

    /// Plays the next step regardless of timing, returning `false` when none is left.
    pub(crate) fn advance(&mut self) -> bool {
        let Some(step) = self.steps.get(self.current_index).copied() else {
            return false;
        };

        match step {
            AnimationStep::Visit(coordinate) => self.visited.push(coordinate),
            AnimationStep::Trace(coordinate) => self.traced.push(coordinate),
        }
        self.current_index += 1;

        true
    }

    /// Plays every remaining step at once.
    pub(crate) fn finish(&mut self) {
        while self.advance() {}
    }
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts grid coordinates into canvas coordinates centred on the origin, using
/// the formulas `y = (rows - 1) / 2 - row` (rows grow downwards on screen) and
/// `x = col - (cols - 1) / 2`.
///
/// # Errors
///
/// This function may return errors if a dimension or coordinate does not fit in a `u16`.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Coordinate],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.rows())?);
    let cols_n = f64::from(u16::try_from(grid.cols())?);

    maze_coords
        .iter()
        .map(|coordinate| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coordinate.row)?);
            let screen_x = f64::from(u16::try_from(coordinate.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Maze, pathfinding::search};

    /// Builds a manager with zero delays so every update plays a step.
    fn instant_manager() -> AnimationManager {
        AnimationManager::new(Duration::ZERO, Duration::ZERO)
    }

    /// Solves the built-in maze.
    fn solved_default() -> SearchResult {
        let maze = Maze::default();
        search(&maze.grid, maze.start, maze.goal).expect("default maze endpoints are valid")
    }

    #[test]
    fn test_load_orders_visits_before_path() {
        let result = solved_default();
        let mut manager = instant_manager();

        manager.load(&result);

        let path = result.path().expect("default maze is solvable");
        assert_eq!(manager.steps.len(), result.visited().len() + path.len());
        assert!(manager
            .steps
            .iter()
            .take(result.visited().len())
            .all(|step| matches!(step, AnimationStep::Visit(_))));
        assert!(manager
            .steps
            .iter()
            .skip(result.visited().len())
            .all(|step| matches!(step, AnimationStep::Trace(_))));
    }

    #[test]
    fn test_update_plays_steps_and_holds_last_frame() {
        let result = solved_default();
        let mut manager = instant_manager();
        manager.load(&result);

        manager.update();
        assert_eq!(manager.visited.first(), result.visited().first());
        assert_eq!(manager.current_index, 1);

        for _ in 0..manager.steps.len() + 5 {
            manager.update();
        }

        assert!(manager.is_finished());
        assert_eq!(manager.visited, result.visited());
        assert_eq!(Some(manager.traced.as_slice()), result.path());
    }

    #[test]
    fn test_update_waits_for_delay() {
        let mut manager = AnimationManager::new(Duration::from_secs(3600), Duration::ZERO);
        manager.load(&solved_default());

        manager.update();

        assert_eq!(manager.current_index, 0);
        assert!(manager.visited.is_empty());
    }

    #[test]
    fn test_finish_and_reset() {
        let result = solved_default();
        let mut manager = instant_manager();
        manager.load(&result);

        manager.finish();
        assert!(manager.is_finished());
        assert!(!manager.advance());

        manager.reset();
        assert_eq!(manager.current_index, 0);
        assert!(manager.visited.is_empty());
        assert!(manager.traced.is_empty());
        assert!(!manager.is_finished());
    }

    #[test]
    fn test_clear() {
        let mut manager = instant_manager();
        manager.load(&solved_default());

        manager.clear();

        assert!(manager.steps.is_empty());
        assert!(manager.is_finished());
    }

    #[test]
    fn test_transform_coordinates() {
        let maze = Maze::parse("tiny", "3\nS..\n...\n..G").expect("maze should parse");

        let coords = transform_maze_to_screen_coords(
            &[Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(2, 2)],
            &maze.grid,
        )
        .expect("coordinates fit");

        let expected = [(-1.0, 1.0), (0.0, 0.0), (1.0, -1.0)];
        assert_eq!(coords.len(), expected.len());
        for (&(x, y), (expected_x, expected_y)) in coords.iter().zip(expected) {
            assert!((x - expected_x).abs() < f64::EPSILON, "x was {x}");
            assert!((y - expected_y).abs() < f64::EPSILON, "y was {y}");
        }
    }
}
