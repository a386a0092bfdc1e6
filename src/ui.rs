//! User interface rendering functions for all application screens.

use std::{rc::Rc, slice};

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    animation,
    grid::{Cell, Coordinate},
    report,
    types::{MainMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
        Screen::MazeMenu => maze_menu(app, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for a centered menu.
///
/// This function creates the centered, bordered block a menu is drawn in and returns one row per
/// entry inside it.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, entries: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(entries + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); entries.into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu entries and highlights the currently selected one.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, "Main Menu", 3);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in MainMenuItem::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };

        frame.render_widget(Line::raw(entry.label()).centered().style(style), *area);
    }
}

/// Renders the maze selection menu with a scrollable list of available mazes.
///
/// This function displays a viewport over the built-in maze and the maze files found in the maze
/// directory. The entry under the cursor is highlighted and the active maze is marked with a dot.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn maze_menu(app: &mut App, frame: &mut Frame) {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Min(1)]).split(space)[0];
    let block = Block::bordered()
        .title_top("Maze list")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();
    app.clamp_viewport();

    let inner_layout = Layout::horizontal([Constraint::Percentage(5), Constraint::Percentage(100)])
        .split(inner_space);
    let inner_selector = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[0]);
    let inner_list = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[1]);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let visible = app
        .mazes
        .iter()
        .enumerate()
        .skip(app.viewport_offset)
        .take(app.viewport_height);

    for ((index, maze), (selector_area, entry_area)) in
        visible.zip(inner_selector.iter().zip(inner_list.iter()))
    {
        let style = if index == app.viewport_index {
            active_content_style
        } else {
            content_style
        };
        let marker = if *maze == app.maze { DOT } else { " " };

        frame.render_widget(Line::styled(marker, style).centered(), *selector_area);
        frame.render_widget(Line::styled(maze.key.as_str(), style), *entry_area);
    }
}

/// Renders the in-game screen with the maze and the replay of its search.
///
/// This function solves the active maze on first display, then draws the walls, the cells expanded
/// so far, the optimal path once the replay reaches it, and the endpoints on a [`Canvas`]. A panel
/// at the bottom shows the maze metrics once the replay is over.
///
/// # Errors
///
/// This function may return errors from the search or from coordinate conversion operations.
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    if app.animation_manager.steps.is_empty() {
        app.solve()?;
    }

    let grid = &app.maze.grid;
    let maze_rows = u16::try_from(grid.rows())?;
    let maze_columns = u16::try_from(grid.cols())?;

    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(4)]).split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let panel_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get panel area from layout")?;

    let maze_area = *Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .ok_or_eyre("failed to get maze area from layout")?;
    let space = *Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closure
    let walls: Vec<Coordinate> = grid.positions_of(Cell::Wall).collect();
    let wall_coords = animation::transform_maze_to_screen_coords(&walls, grid)?;
    let visited_coords =
        animation::transform_maze_to_screen_coords(&app.animation_manager.visited, grid)?;
    let path_coords =
        animation::transform_maze_to_screen_coords(&app.animation_manager.traced, grid)?;
    let endpoint_coords =
        animation::transform_maze_to_screen_coords(&[app.maze.start, app.maze.goal], grid)?;
    let (start_coords, goal_coords) = endpoint_coords
        .split_first()
        .ok_or_eyre("failed to convert maze endpoints")?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &visited_coords,
                color: Color::Yellow,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &path_coords,
                color: Color::Red,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: slice::from_ref(start_coords),
                color: Color::Cyan,
            });
            ctx.draw(&Points {
                coords: goal_coords,
                color: Color::Magenta,
            });
        });

    frame.render_widget(maze, space);

    let lines: Vec<Line> = match &app.solution {
        Some(solution) if app.animation_manager.is_finished() => {
            report::summary(&app.maze, solution)
                .into_iter()
                .map(Line::from)
                .collect()
        }
        _ => vec![Line::raw(format!("Searching {}...", app.maze.key))],
    };

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::bordered()
            .title("(h) return to menu / (r) replay / (s) skip")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green))
            .border_type(BorderType::Plain)
            .borders(Borders::TOP),
    );

    frame.render_widget(panel, panel_area);

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    use super::*;
    use crate::{app::tests::test_app, events, maze::Maze};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the rendered buffer into one string per terminal row.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("Solve"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn test_draw_maze_menu() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::MazeMenu;
        app.mazes = vec![
            Maze::default(),
            Maze::parse("second_maze", "1\nS.G").expect("maze should parse"),
        ];

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing maze menu should succeed");
        assert!(app.viewport_height > 0, "viewport height should be recorded");
        let text = buffer_text(&terminal);
        assert!(text.contains("Maze list"));
        assert!(text.contains("second_maze"));
    }

    #[test]
    fn test_maze_menu_scrolls_to_active_maze() {
        let dir = TempDir::new().expect("failed to create temp dir");
        for index in 0..10 {
            std::fs::write(dir.path().join(format!("m{index:02}.txt")), "1\nS.G")
                .expect("failed to write maze");
        }
        let mut app = test_app();
        app.maps_dir = dir.path().to_path_buf();
        app.select_maze(Maze::parse("m09", "1\nS.G").expect("maze should parse"));
        app.screen = Screen::MainMenu(MainMenuItem::Mazes);
        events::handle_l_events(&mut app).expect("scan should succeed");
        assert_eq!(app.viewport_index, 10);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing maze menu should succeed");
        assert!(app.viewport_height > 0 && app.viewport_height < app.mazes.len());
        assert!(app.viewport_offset <= app.viewport_index);
        assert!(app.viewport_index < app.viewport_offset + app.viewport_height);
        assert!(buffer_text(&terminal).contains("m09"));
    }

    #[test]
    fn test_draw_in_game_solves_maze() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        assert!(app.solution.is_some(), "the maze should be solved on first draw");
        assert!(buffer_text(&terminal).contains("Searching Default..."));
    }

    #[test]
    fn test_in_game_shows_metrics_when_finished() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        app.solve().expect("default maze is valid");
        app.animation_manager.finish();

        let result = terminal.draw(|frame| {
            in_game(&mut app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering finished replay should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Maze size: 15x15"));
        assert!(text.contains("Optimal Path Length:"));
        assert!(text.contains("Traversed Path Length:"));
    }

    #[test]
    fn test_in_game_unsolvable_maze() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();
        app.select_maze(Maze::parse("sealed", "2\nS.#G\n..##").expect("maze should parse"));
        app.screen = Screen::InGame;
        app.solve().expect("endpoints are valid");
        app.animation_manager.finish();

        let result = terminal.draw(|frame| {
            in_game(&mut app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering unsolvable maze should succeed");
        assert!(buffer_text(&terminal).contains("No solution"));
    }

    #[test]
    fn test_in_game_invalid_endpoint_error() {
        let mut app = test_app();
        let mut terminal = create_test_terminal();
        app.maze.start = Coordinate::new(0, 0);

        let result = terminal.draw(|frame| {
            let game_result = in_game(&mut app, frame);
            assert!(game_result.is_err(), "in-game should fail on a walled start");
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if in_game fails"
        );
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_entries() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Main Menu", 3);
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_main_menu_each_selection() {
        let mut terminal = create_test_terminal();

        for item in MainMenuItem::ALL {
            let result = terminal.draw(|frame| {
                main_menu(frame, item);
            });

            assert!(result.is_ok(), "rendering main menu with {item:?} should succeed");
        }
    }
}
