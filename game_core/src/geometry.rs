/// Integer axis-aligned rectangle in field pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of size `w` x `h` horizontally centred on `center_x`
    pub fn centered_x(center_x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(center_x - w / 2, y, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test: rects that only share an edge do not intersect.
    pub fn has_intersection(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let min_x = self.left().max(other.left());
        let max_x = self.right().min(other.right());
        if max_x <= min_x {
            return false;
        }
        let min_y = self.top().max(other.top());
        let max_y = self.bottom().min(other.bottom());
        max_y > min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.has_intersection(&b));
        assert!(b.has_intersection(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.has_intersection(&right));
        assert!(!a.has_intersection(&below));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.has_intersection(&inner));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(2, 2, 0, 5);
        assert!(!a.has_intersection(&empty));
        assert!(!empty.has_intersection(&a));
    }

    #[test]
    fn test_centered_x() {
        let r = Rect::centered_x(480, 50, 40, 80);
        assert_eq!(r, Rect::new(460, 50, 40, 80));
    }
}
