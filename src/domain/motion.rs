/// Axis-aligned rectangle that bounces off the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BouncingRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub dx: i32,
    pub dy: i32,
}

impl BouncingRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, w, h, dx, dy }
    }

    /// Reflect any velocity component already out of bounds, then move.
    /// The rect may overshoot an edge by one step before turning back.
    pub fn step(&mut self, bounds_w: i32, bounds_h: i32) {
        if self.x < 0 || self.x + self.w > bounds_w {
            self.dx = -self.dx;
        }
        if self.y < 0 || self.y + self.h > bounds_h {
            self.dy = -self.dy;
        }
        self.x += self.dx;
        self.y += self.dy;
    }
}

impl Default for BouncingRect {
    /// Centred 100x100 square on the 800x600 canvas moving down-right
    fn default() -> Self {
        Self::new(350, 250, 100, 100, 2, 2)
    }
}
