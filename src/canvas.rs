use crate::marker::Marker;
use crate::util::{Cursor, xy_i};
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// Character surface the board layers are painted onto.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u16,
    height: u16,
    markers: Vec<Option<Marker>>,
}

impl Canvas {
    pub fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            markers: vec![None; width as usize * height as usize],
        }
    }

    pub fn paint(&mut self, cursor: Cursor, marker: Marker) {
        if let Some(i) = xy_i(cursor, self.width, self.height) {
            self.markers[i] = Some(marker);
        }
    }

    pub fn get(&self, cursor: Cursor) -> Option<Marker> {
        xy_i(cursor, self.width, self.height).and_then(|i| self.markers[i])
    }

    /// Rows in `y` order, each holding its markers in `x` order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Marker>]> {
        self.markers.chunks_exact(self.width.max(1) as usize)
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.rows() {
            for marker in line {
                match marker {
                    Some(marker) => write!(f, "{marker}")?,
                    None => f.write_char(' ')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
