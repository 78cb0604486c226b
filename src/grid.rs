use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::marker::Marker;
use crate::util::{Cursor, i_xy, xy_i};

/// What a single reveal did to a layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Detonated,
}

/// Shared surface of the board layers.
pub trait Layer {
    fn grid(&self) -> &Grid;

    fn apply_move(&mut self, cursor: Cursor) -> Result<MoveOutcome>;

    fn draw(&self, canvas: &mut Canvas) {
        self.grid().draw(canvas)
    }
}

/// Row-major storage with exactly one [`Cell`] per coordinate.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u16, height: u16, default_marker: Marker) -> Self {
        let size = width as usize * height as usize;
        let cells = (0..size)
            .filter_map(|i| i_xy(i, width, height))
            .map(|cursor| Cell::new(cursor, default_marker))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn check(&self, cursor @ (x, y): Cursor) -> Result<usize> {
        xy_i(cursor, self.width, self.height).ok_or(GameError::OutOfBounds {
            x: x.into(),
            y: y.into(),
            width: self.width,
            height: self.height,
        })
    }

    pub fn cell(&self, cursor: Cursor) -> Result<&Cell> {
        self.check(cursor).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, cursor: Cursor) -> Result<&mut Cell> {
        self.check(cursor).map(|i| &mut self.cells[i])
    }

    /// Swaps in a brand new cell at the cell's own position.
    pub fn replace(&mut self, cell: Cell) -> Result<()> {
        let i = self.check(cell.position)?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn cursors(&self) -> impl Iterator<Item = Cursor> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for cell in &self.cells {
            cell.draw(canvas);
        }
    }
}
