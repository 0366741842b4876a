//! Outward rectangular spiral for candidate position search
//!
//! Candidates walk a rectangular Archimedean spiral whose horizontal step is
//! scaled by the canvas aspect ratio, so wide canvases are swept in wide
//! turns. Offsets are relative to the search origin and unbounded; the
//! placement engine clips them against the canvas.

/// Base step in pixels between spiral arms
const STEP: f64 = 4.0;

/// Iterator over spiral offsets `(dx, dy)` from the search origin
#[derive(Debug, Clone)]
pub struct SpiralIter {
    t: i64,
    dt: i64,
    dx: f64,
    dy: f64,
    x_step: f64,
}

impl SpiralIter {
    /// Create a spiral sized for a canvas
    ///
    /// `clockwise` flips the winding direction, which the engine draws from
    /// its seeded generator so mirrored layouts stay reproducible.
    pub fn new(canvas_width: u32, canvas_height: u32, clockwise: bool) -> Self {
        let x_step = STEP * canvas_width.max(1) as f64 / canvas_height.max(1) as f64;
        Self {
            t: 0,
            dt: if clockwise { 1 } else { -1 },
            dx: 0.0,
            dy: 0.0,
            x_step,
        }
    }
}

impl Iterator for SpiralIter {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.t += self.dt;
        let sign = if self.t < 0 { -1.0 } else { 1.0 };

        // Leg index cycles 0..4 as the arc length grows, tracing rectangles
        let leg = ((4.0 * sign * self.t as f64 + 1.0).sqrt() - sign) as i64 & 3;
        match leg {
            0 => self.dx += self.x_step,
            1 => self.dy += STEP,
            2 => self.dx -= self.x_step,
            _ => self.dy -= STEP,
        }

        Some((self.dx as i64, self.dy as i64))
    }
}
