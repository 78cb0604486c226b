use args::MinesweeperArgs;
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use simplelog::{Config, WriteLogger};
use std::fs::OpenOptions;

mod args;
mod canvas;
mod cell;
mod console;
mod error;
mod grid;
mod marker;
mod mine_placer;
mod session;
mod truth_grid;
mod ui;
mod util;
mod visibility_grid;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinesweeperArgs::parse();
    init_logging(&args)?;
    log::debug!("{args:?}");

    if args.tui {
        ui::main(&args)
    } else {
        console::main(&args)
    }
}

/// The terminal is the game surface, so logs only ever go to a file.
fn init_logging(args: &MinesweeperArgs) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
    WriteLogger::init(args.log_level, Config::default(), file)?;
    Ok(())
}
