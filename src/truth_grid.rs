use crate::cell::Cell;
use crate::error::Result;
use crate::grid::{Grid, Layer, MoveOutcome};
use crate::marker::Marker;
use crate::util::{Cursor, DIRS_8, valid_neighbors};
use std::collections::BTreeSet;

/// The mine layer: real mine positions and neighbor counts.
#[derive(Clone, Debug)]
pub struct TruthGrid {
    grid: Grid,
    mines: BTreeSet<Cursor>,
    exploded: Option<Cursor>,
}

impl TruthGrid {
    pub fn new(width: u16, height: u16, mines: BTreeSet<Cursor>) -> Result<Self> {
        let mut grid = Grid::new(width, height, Marker::Empty);

        for &mine in &mines {
            grid.replace(Cell::new(mine, Marker::Mine))?;
        }

        for &mine in &mines {
            for neighbor in valid_neighbors(&DIRS_8, mine, width, height) {
                let cell = grid.cell_mut(neighbor)?;
                if cell.marker != Marker::Mine {
                    cell.marker = cell.marker.incremented();
                }
            }
        }

        Ok(Self {
            grid,
            mines,
            exploded: None,
        })
    }

    pub fn mines(&self) -> &BTreeSet<Cursor> {
        &self.mines
    }

    /// A live mine; an exploded one no longer counts.
    pub fn is_mine(&self, cursor: Cursor) -> bool {
        self.mines.contains(&cursor) && self.exploded != Some(cursor)
    }

    pub fn exploded(&self) -> Option<Cursor> {
        self.exploded
    }
}

impl Layer for TruthGrid {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply_move(&mut self, cursor: Cursor) -> Result<MoveOutcome> {
        let cell = self.grid.cell_mut(cursor)?;
        if !self.mines.contains(&cursor) || self.exploded == Some(cursor) {
            return Ok(MoveOutcome::Continue);
        }
        cell.marker = Marker::Exploded;
        self.exploded = Some(cursor);
        log::info!("mine at {cursor:?} exploded");
        Ok(MoveOutcome::Detonated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::error::GameError;

    fn truth(width: u16, height: u16, mines: &[Cursor]) -> TruthGrid {
        TruthGrid::new(width, height, mines.iter().copied().collect()).unwrap()
    }

    fn render(layer: &TruthGrid, width: u16, height: u16) -> String {
        let mut canvas = Canvas::blank(width, height);
        layer.draw(&mut canvas);
        canvas.to_string()
    }

    #[test]
    fn single_center_mine_marks_every_neighbor() {
        let layer = truth(3, 3, &[(1, 1)]);
        assert_eq!(render(&layer, 3, 3), "111\n1*1\n111\n");
    }

    #[test]
    fn corner_mine_only_touches_its_neighborhood() {
        let layer = truth(4, 3, &[(0, 0)]);
        assert_eq!(render(&layer, 4, 3), "*1..\n11..\n....\n");
    }

    #[test]
    fn counts_match_chebyshev_distance() {
        let mines = [(0, 0), (2, 0), (1, 2), (4, 4), (3, 3), (0, 4)];
        let layer = truth(5, 5, &mines);
        for cursor @ (x, y) in layer.grid().cursors() {
            let marker = layer.grid().cell(cursor).unwrap().marker;
            if mines.contains(&cursor) {
                assert_eq!(marker, Marker::Mine);
                continue;
            }
            let count = mines
                .iter()
                .filter(|(mx, my)| x.abs_diff(*mx) < 2 && y.abs_diff(*my) < 2)
                .count() as u8;
            let expected = if count == 0 {
                Marker::Empty
            } else {
                Marker::Count(count)
            };
            assert_eq!(marker, expected, "at {cursor:?}");
        }
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let ring = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let layer = truth(3, 3, &ring);
        assert_eq!(layer.grid().cell((1, 1)).unwrap().marker, Marker::Count(8));
    }

    #[test]
    fn mine_count_matches_input() {
        let layer = truth(6, 4, &[(0, 0), (5, 3), (2, 2)]);
        let marked = layer
            .grid()
            .cursors()
            .filter(|c| layer.grid().cell(*c).unwrap().marker == Marker::Mine)
            .count();
        assert_eq!(marked, 3);
        assert_eq!(layer.mines().len(), 3);
    }

    #[test]
    fn safe_move_changes_nothing() {
        let mut layer = truth(3, 3, &[(1, 1)]);
        assert_eq!(layer.apply_move((0, 0)).unwrap(), MoveOutcome::Continue);
        assert_eq!(render(&layer, 3, 3), "111\n1*1\n111\n");
    }

    #[test]
    fn moving_onto_a_mine_detonates_it() {
        let mut layer = truth(3, 3, &[(0, 0)]);
        assert!(layer.is_mine((0, 0)));
        assert_eq!(layer.apply_move((0, 0)).unwrap(), MoveOutcome::Detonated);
        assert_eq!(layer.grid().cell((0, 0)).unwrap().marker, Marker::Exploded);
        assert!(!layer.is_mine((0, 0)));
        assert_eq!(layer.exploded(), Some((0, 0)));
        assert_eq!(layer.mines().len(), 1);
    }

    #[test]
    fn mine_outside_the_board_is_rejected() {
        let err = TruthGrid::new(2, 2, BTreeSet::from([(2, 1)])).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { x: 2, y: 1, .. }));
    }
}
