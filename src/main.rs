//! This crate contains the source code for the binary of the maze solver mazebot.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use color_eyre::{eyre::Result, install};
use mazebot::{config::Config, logging, run_headless, App};

fn main() -> Result<()> {
    install()?;

    let config = Config::from_args();
    logging::init(&config)?;

    if config.headless {
        return run_headless(&config);
    }

    let mut terminal = ratatui::init();
    let result = App::new(&config).and_then(|mut app| app.run(&mut terminal));
    ratatui::restore();

    result
}
