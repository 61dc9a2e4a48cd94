mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let app = match setup() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    io_exit(r)
}

// Everything fallible that should happen before the terminal is put in raw
// mode, so that errors print normally.
fn setup() -> anyhow::Result<App> {
    let config = Config::load_default().context("failed to load configuration")?;
    let app = App::new(&config).context("configuration does not describe a playable game")?;
    Ok(app)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
