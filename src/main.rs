//! A light-switch toy built with Rust and Bevy.
//!
//! Click the window (or press Space) to flip the light. Each flip washes
//! the screen with an expanding flare and sends seven snakes wandering out
//! from the center, drawn in the opposite color.

use anyhow::Result;
use lumen::core;

/// Create and run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    if cli_args.new_config {
        let path = core::config_file::ConfigFile::initialize()?;
        println!("Initialized config at {}", path.display());
        return Ok(());
    }
    let mut app = core::app::create_app(cli_args)?;
    app.run();
    Ok(())
}

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
