/// A point on the rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Surface geometry for list slots.
///
/// `position` advances along x, `list_index` advances along y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub outer_padding: f64,
    /// Horizontal gap between boxes, also the arrow length
    pub inner_padding: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub row_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            outer_padding: 40.0,
            inner_padding: 50.0,
            box_width: 100.0,
            box_height: 50.0,
            row_height: 70.0,
        }
    }
}

impl Layout {
    pub fn x(&self, position: usize) -> f64 {
        self.outer_padding + (self.box_width + self.inner_padding) * position as f64
    }

    pub fn y(&self, list_index: usize) -> f64 {
        self.outer_padding + self.row_height * list_index as f64
    }

    pub fn place(&self, position: usize, list_index: usize) -> Point {
        Point::new(self.x(position), self.y(list_index))
    }
}
