use std::time::Duration;

use crate::config::{MotionConfig, SpringConfig};
use crate::region::Region;

use super::spring::Spring;

/// Where a tracked region starts and finishes its progress, as viewport fractions
///
/// Progress is 0 when the region's top sits at `start` of the viewport height
/// and 1 when its bottom sits at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: f64,
    pub end: f64,
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self { start: 0.85, end: 0.15 }
    }
}

impl From<&MotionConfig> for ScrollOffsets {
    fn from(config: &MotionConfig) -> Self {
        Self {
            start: config.timeline_start,
            end: config.timeline_end,
        }
    }
}

impl ScrollOffsets {
    /// Raw progress for `region` at scroll position `scroll`, clamped to [0, 1]
    pub fn raw_progress(&self, region: Region, scroll: f64, viewport_height: f64) -> f64 {
        let begin = region.top - self.start * viewport_height;
        let finish = region.bottom() - self.end * viewport_height;

        if finish <= begin {
            return if scroll >= finish { 1.0 } else { 0.0 };
        }
        ((scroll - begin) / (finish - begin)).clamp(0.0, 1.0)
    }
}

/// Scroll-linked progress with spring smoothing
#[derive(Debug, Clone)]
pub struct ScrollProgressMapper {
    offsets: ScrollOffsets,
    raw: f64,
    spring: Spring,
}

impl ScrollProgressMapper {
    pub fn new(offsets: ScrollOffsets, spring: SpringConfig) -> Self {
        Self {
            offsets,
            raw: 0.0,
            spring: Spring::new(spring, 0.0),
        }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(ScrollOffsets::from(config), config.spring)
    }

    /// Record a new scroll sample; the spring chases it on the following ticks
    pub fn sample(&mut self, region: Region, scroll: f64, viewport_height: f64) -> f64 {
        self.raw = self.offsets.raw_progress(region, scroll, viewport_height);
        self.spring.set_target(self.raw);
        self.raw
    }

    /// Advance the spring one frame and return the smoothed progress
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.spring.update(dt).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }

    /// Height of the filled timeline line, in percent
    #[inline]
    pub fn fill_extent(&self) -> f64 {
        self.smoothed() * 100.0
    }

    /// Position of the travelling marker, in percent
    #[inline]
    pub fn marker_position(&self) -> f64 {
        self.smoothed() * 100.0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }

    /// Jump the smoothed value to the raw value
    pub fn settle(&mut self) {
        self.spring.snap_to(self.raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 40.0;

    fn region() -> Region {
        Region::new(100.0, 30.0)
    }

    #[test]
    fn test_before_entry_is_zero() {
        let offsets = ScrollOffsets::default();
        // Region top reaches 85% of the viewport at scroll = 100 - 34 = 66
        assert_eq!(offsets.raw_progress(region(), 0.0, VIEWPORT), 0.0);
        assert_eq!(offsets.raw_progress(region(), 66.0, VIEWPORT), 0.0);
    }

    #[test]
    fn test_after_exit_is_one() {
        let offsets = ScrollOffsets::default();
        // Region bottom reaches 15% of the viewport at scroll = 130 - 6 = 124
        assert_eq!(offsets.raw_progress(region(), 124.0, VIEWPORT), 1.0);
        assert_eq!(offsets.raw_progress(region(), 1_000.0, VIEWPORT), 1.0);
    }

    #[test]
    fn test_midpoint_is_linear() {
        let offsets = ScrollOffsets::default();
        let mid = offsets.raw_progress(region(), 95.0, VIEWPORT);
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_range_steps() {
        let offsets = ScrollOffsets { start: 0.0, end: 1.0 };
        let tiny = Region::new(50.0, 1.0);
        assert_eq!(offsets.raw_progress(tiny, 0.0, VIEWPORT), 0.0);
        assert_eq!(offsets.raw_progress(tiny, 50.0, VIEWPORT), 1.0);
    }

    #[test]
    fn test_smoothed_converges_to_raw() {
        let mut mapper = ScrollProgressMapper::new(ScrollOffsets::default(), SpringConfig::default());
        let raw = mapper.sample(region(), 95.0, VIEWPORT);
        for _ in 0..600 {
            mapper.tick(Duration::from_millis(16));
        }
        assert!((mapper.smoothed() - raw).abs() <= SpringConfig::default().rest_delta);
        assert!((mapper.fill_extent() - 50.0).abs() < 0.1);
        assert_eq!(mapper.fill_extent(), mapper.marker_position());
        assert!(!mapper.is_animating());
    }

    #[test]
    fn test_smoothed_lags_behind_raw() {
        let mut mapper = ScrollProgressMapper::new(ScrollOffsets::default(), SpringConfig::default());
        mapper.sample(region(), 500.0, VIEWPORT);
        let first = mapper.tick(Duration::from_millis(16));
        assert_eq!(mapper.raw(), 1.0);
        assert!(first < 1.0);
    }

    #[test]
    fn test_settle_jumps() {
        let mut mapper = ScrollProgressMapper::from_config(&MotionConfig::default());
        mapper.sample(region(), 500.0, VIEWPORT);
        mapper.settle();
        assert_eq!(mapper.smoothed(), 1.0);
    }
}
