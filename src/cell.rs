use crate::canvas::Canvas;
use crate::marker::Marker;
use crate::util::Cursor;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub position: Cursor,
    pub marker: Marker,
    /// A visible cell has been revealed and lets lower layers show through.
    pub visible: bool,
}

impl Cell {
    pub fn new(position: Cursor, marker: Marker) -> Self {
        Self {
            position,
            marker,
            visible: false,
        }
    }

    pub fn occludes(&self) -> bool {
        !self.visible
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        if self.occludes() {
            canvas.paint(self.position, self.marker);
        }
    }
}
