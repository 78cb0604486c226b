use crate::error::Result;
use crate::grid::{Grid, Layer, MoveOutcome};
use crate::marker::Marker;
use crate::util::Cursor;

/// The known layer: which cells the player has revealed.
#[derive(Clone, Debug)]
pub struct VisibilityGrid {
    grid: Grid,
}

impl VisibilityGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height, Marker::Unknown),
        }
    }

    pub fn is_unknown(&self, cursor: Cursor) -> bool {
        self.grid
            .cell(cursor)
            .is_ok_and(|cell| cell.marker == Marker::Unknown)
    }
}

impl Layer for VisibilityGrid {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply_move(&mut self, cursor: Cursor) -> Result<MoveOutcome> {
        let cell = self.grid.cell_mut(cursor)?;
        if cell.marker == Marker::Unknown {
            cell.marker = Marker::Known;
            cell.visible = true;
        }
        Ok(MoveOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn everything_starts_unknown() {
        let layer = VisibilityGrid::new(3, 2);
        assert!(layer.grid().cursors().all(|c| layer.is_unknown(c)));
    }

    #[test]
    fn move_reveals_once_and_for_all() {
        let mut layer = VisibilityGrid::new(3, 3);
        layer.apply_move((2, 1)).unwrap();
        let once = layer.grid().cell((2, 1)).copied().unwrap();
        layer.apply_move((2, 1)).unwrap();
        let twice = layer.grid().cell((2, 1)).copied().unwrap();

        assert!(!layer.is_unknown((2, 1)));
        assert_eq!(once, twice);
        assert_eq!(twice.marker, Marker::Known);
        assert!(twice.visible);
        assert_eq!(
            layer.grid().cursors().filter(|c| layer.is_unknown(*c)).count(),
            8
        );
    }

    #[test]
    fn revealed_cells_are_transparent() {
        let mut layer = VisibilityGrid::new(2, 1);
        layer.apply_move((0, 0)).unwrap();
        let mut canvas = Canvas::blank(2, 1);
        canvas.paint((0, 0), Marker::Count(1));
        canvas.paint((1, 0), Marker::Mine);
        layer.draw(&mut canvas);
        assert_eq!(canvas.to_string(), "1_\n");
    }

    #[test]
    fn off_board_move_fails_without_changes() {
        let mut layer = VisibilityGrid::new(2, 2);
        assert!(layer.apply_move((0, 2)).is_err());
        assert!(!layer.is_unknown((0, 2)));
        assert!(layer.grid().cursors().all(|c| layer.is_unknown(c)));
    }
}
