pub type Cursor = (u16, u16);

/// Coordinates as typed by the player, not yet checked against the board.
pub type Point = (i64, i64);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn xy_i((x, y): Cursor, w: u16, h: u16) -> Option<usize> {
    if w <= x || h <= y {
        None
    } else {
        Some(y as usize * w as usize + x as usize)
    }
}

pub fn i_xy(index: usize, w: u16, h: u16) -> Option<Cursor> {
    let ws = w as usize;
    let hs = h as usize;
    if index >= (ws * hs) {
        None
    } else {
        Some(((index % ws) as u16, (index / ws) as u16))
    }
}

/// Cells of the Moore neighborhood of `(x, y)` that lie on a `w`x`h` board.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (x, y): Cursor,
    w: u16,
    h: u16,
) -> impl Iterator<Item = Cursor> {
    dirs.iter()
        .map(|(dx, dy)| (*dx as i16, *dy as i16))
        // checked, not saturating: a clamped offset would land back on the board edge
        .filter_map(move |(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(move |(i, j)| w > *i && h > *j)
}
