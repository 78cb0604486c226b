use crate::error::{GameError, Result};
use crate::util::Cursor;
use rand::Rng;
use std::collections::BTreeSet;

/// Picks distinct mine coordinates by rejection sampling.
#[derive(Debug)]
pub struct MinePlacer<R> {
    rng: R,
}

impl<R: Rng> MinePlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn place(&mut self, width: u16, height: u16, count: u32) -> Result<BTreeSet<Cursor>> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cells = width as u32 * height as u32;
        // at least one safe cell, otherwise sampling never finishes
        if count >= cells {
            return Err(GameError::TooManyMines {
                mines: count,
                cells,
            });
        }

        let mut mines = BTreeSet::new();
        let mut rejected = 0u32;
        while mines.len() < count as usize {
            let mine = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            if !mines.insert(mine) {
                rejected += 1;
            }
        }
        log::debug!("placed {count} mines on {width}x{height}, {rejected} duplicate samples");
        Ok(mines)
    }
}
