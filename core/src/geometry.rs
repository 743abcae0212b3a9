use crate::types::{Rect, Vec2};

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// `size × size` square anchored at `origin`.
    pub fn square(origin: Vec2, size: f64) -> Self {
        Rect::new(origin.x, origin.y, size, size)
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        let body = Rect::new(25.0, 0.0, 20.0, 20.0);
        let hitbox = Rect::new(20.0, 0.0, 10.0, 20.0);
        assert!(body.overlaps(&hitbox));
        assert!(hitbox.overlaps(&body));
    }

    #[test]
    fn disjoint_boxes() {
        let body = Rect::new(40.0, 0.0, 20.0, 20.0);
        let hitbox = Rect::new(20.0, 0.0, 10.0, 20.0);
        assert!(!body.overlaps(&hitbox));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let right = Rect::new(20.0, 0.0, 20.0, 20.0);
        let below = Rect::new(0.0, 20.0, 20.0, 20.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn vertical_separation_blocks_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(5.0, 50.0, 20.0, 20.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn square_from_origin() {
        let r = Rect::square(Vec2::new(3.0, 4.0), 20.0);
        assert_eq!(r, Rect::new(3.0, 4.0, 20.0, 20.0));
    }
}
