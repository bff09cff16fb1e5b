/// Vertical extent of a block on the page, measured in rows from the page top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether this region overlaps the half-open range `[start, end)`
    #[inline]
    pub fn intersects(&self, start: f64, end: f64) -> bool {
        self.top < end && self.bottom() > start
    }

    /// Fraction of this region's height that lies inside `[start, end)`
    pub fn visible_fraction(&self, start: f64, end: f64) -> f64 {
        if self.height <= 0.0 {
            return if self.top >= start && self.top < end { 1.0 } else { 0.0 };
        }
        let overlap = self.bottom().min(end) - self.top.max(start);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_is_half_open() {
        let region = Region::new(10.0, 5.0);
        assert!(region.intersects(14.0, 20.0));
        assert!(!region.intersects(15.0, 20.0));
        assert!(!region.intersects(0.0, 10.0));
    }

    #[test]
    fn test_visible_fraction() {
        let region = Region::new(10.0, 10.0);
        assert_eq!(region.visible_fraction(0.0, 100.0), 1.0);
        assert_eq!(region.visible_fraction(15.0, 100.0), 0.5);
        assert_eq!(region.visible_fraction(30.0, 40.0), 0.0);
    }
}
