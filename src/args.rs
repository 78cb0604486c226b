use clap::Parser;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Command line minesweeper
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct MinesweeperArgs {
    /// width, asked for on startup when missing
    #[arg(short = 'x', long)]
    pub width: Option<u16>,
    /// height, asked for on startup when missing
    #[arg(short = 'y', long)]
    pub height: Option<u16>,
    /// amount of mines, asked for on startup when missing
    #[arg(short, long)]
    pub mines: Option<u32>,
    /// seed for the mine layout
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// play full screen with a cursor instead of typing coordinates
    #[arg(long)]
    pub tui: bool,
    /// color the board in the line console
    #[arg(long)]
    pub color: bool,
    /// append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// log level for --log-file
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl MinesweeperArgs {
    pub const DEFAULT_SIZE: (u16, u16, u32) = (9, 9, 10);

    /// Board setup, if all of it was given on the command line.
    pub fn dimensions(&self) -> Option<(u16, u16, u32)> {
        Some((self.width?, self.height?, self.mines?))
    }

    pub fn dimensions_or_default(&self) -> (u16, u16, u32) {
        let (width, height, mines) = Self::DEFAULT_SIZE;
        (
            self.width.unwrap_or(width),
            self.height.unwrap_or(height),
            self.mines.unwrap_or(mines),
        )
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
