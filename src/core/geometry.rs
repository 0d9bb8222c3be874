/// An axis-aligned rectangle described by its center and half extents.
///
/// `(x, y)` is the center, `(w, h)` are half widths, so the rectangle spans
/// `[x - w, x + w] × [y - h, y + h]`. This is the convention the quadtree
/// uses for node boundaries and query ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    /// True iff the disc centered at `(cx, cy)` with radius `r` lies strictly
    /// inside this rectangle. The full extent of the disc must fit, not just
    /// its center.
    #[inline]
    pub fn contains_disc(&self, cx: f64, cy: f64, r: f64) -> bool {
        cx - r > self.x - self.w
            && cx + r < self.x + self.w
            && cy - r > self.y - self.h
            && cy + r < self.y + self.h
    }

    /// Standard AABB overlap test on half extents.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x - other.w > self.x + self.w
            || other.x + other.w < self.x - self.w
            || other.y - other.h > self.y + self.h
            || other.y + other.h < self.y - self.h)
    }
}
