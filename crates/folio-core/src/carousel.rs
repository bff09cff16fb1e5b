//! Cyclic image stack used by the project showcase
//!
//! One image is front-facing; the rest fan out behind it by their signed
//! cyclic distance from the front. Clicks and drag releases move the front.

use crate::config::GestureConfig;

/// Direction of the last transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Front index and direction over an ordered list of images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState<T> {
    images: Vec<T>,
    front: usize,
    direction: Direction,
}

impl<T> CarouselState<T> {
    pub fn new(images: Vec<T>) -> Self {
        Self {
            images,
            front: 0,
            direction: Direction::Forward,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Cycling needs at least two images
    #[inline]
    pub fn can_cycle(&self) -> bool {
        self.images.len() > 1
    }

    #[inline]
    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn front(&self) -> Option<&T> {
        self.images.get(self.front)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move the front one step, wrapping around. No-op with fewer than two images.
    pub fn advance(&mut self, direction: Direction) {
        if !self.can_cycle() {
            return;
        }
        let len = self.images.len() as isize;
        self.front = (self.front as isize + direction.step()).rem_euclid(len) as usize;
        self.direction = direction;
    }

    /// Put `index` in front directly. Targets outside the list are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.images.len() {
            self.front = index;
        }
    }

    /// Click on card `index`: the front card advances, any other card is jumped to
    pub fn click(&mut self, index: usize) {
        if index == self.front {
            self.advance(Direction::Forward);
        } else {
            self.jump_to(index);
        }
    }

    /// Apply a drag release. Returns the transition taken, if any.
    pub fn release(&mut self, release: DragRelease, thresholds: &SwipeThresholds) -> Option<Direction> {
        let direction = thresholds.classify(release)?;
        if !self.can_cycle() {
            return None;
        }
        self.advance(direction);
        Some(direction)
    }

    /// Signed shortest cyclic distance of card `index` from the front
    pub fn offset_of(&self, index: usize) -> isize {
        card_offset(index, self.front, self.images.len())
    }
}

/// `((index - front + len/2) mod len) - len/2`
pub fn card_offset(index: usize, front: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let half = len / 2;
    (index as isize - front as isize + half).rem_euclid(len) - half
}

/// Pointer state when a drag ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Horizontal offset from the drag start, in distance units
    pub offset: f64,
    /// Horizontal velocity at release, in distance units per second
    pub velocity: f64,
}

impl DragRelease {
    pub fn new(offset: f64, velocity: f64) -> Self {
        Self { offset, velocity }
    }
}

/// Offset and velocity past which a drag release changes the front image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub offset: f64,
    pub velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::from(&GestureConfig::default())
    }
}

impl From<&GestureConfig> for SwipeThresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            offset: config.swipe_offset.abs(),
            velocity: config.swipe_velocity.abs(),
        }
    }
}

impl SwipeThresholds {
    /// Swiping left brings the next image forward; swiping right the previous one
    pub fn classify(&self, release: DragRelease) -> Option<Direction> {
        if release.offset < -self.offset || release.velocity < -self.velocity {
            Some(Direction::Forward)
        } else if release.offset > self.offset || release.velocity > self.velocity {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> CarouselState<usize> {
        CarouselState::new((0..len).collect())
    }

    #[test]
    fn test_cyclic_closure() {
        for len in 2..8 {
            for start in 0..len {
                let mut state = carousel(len);
                state.jump_to(start);
                for _ in 0..len {
                    state.advance(Direction::Forward);
                }
                assert_eq!(state.front_index(), start, "len={} start={}", len, start);
            }
        }
    }

    #[test]
    fn test_backward_wraps() {
        let mut state = carousel(3);
        state.advance(Direction::Backward);
        assert_eq!(state.front_index(), 2);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn test_single_and_empty_never_move() {
        let mut single = carousel(1);
        single.advance(Direction::Forward);
        single.advance(Direction::Backward);
        single.click(0);
        assert_eq!(single.front_index(), 0);

        let mut empty = carousel(0);
        empty.advance(Direction::Forward);
        empty.jump_to(0);
        assert_eq!(empty.front_index(), 0);
        assert!(empty.front().is_none());
    }

    #[test]
    fn test_click_front_advances_and_click_other_jumps() {
        let mut state = carousel(4);
        state.click(0);
        assert_eq!(state.front_index(), 1);
        state.click(3);
        assert_eq!(state.front_index(), 3);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut state = carousel(3);
        state.jump_to(2);
        state.jump_to(7);
        assert_eq!(state.front_index(), 2);
    }

    #[test]
    fn test_gesture_classification() {
        let thresholds = SwipeThresholds::default();
        assert_eq!(
            thresholds.classify(DragRelease::new(-50.0, 0.0)),
            Some(Direction::Forward)
        );
        assert_eq!(
            thresholds.classify(DragRelease::new(50.0, 0.0)),
            Some(Direction::Backward)
        );
        assert_eq!(thresholds.classify(DragRelease::new(10.0, 0.0)), None);
        // A fast flick counts even when short
        assert_eq!(
            thresholds.classify(DragRelease::new(-5.0, -800.0)),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn test_release_snaps_back_below_threshold() {
        let thresholds = SwipeThresholds::default();
        let mut state = carousel(3);
        assert_eq!(state.release(DragRelease::new(10.0, 0.0), &thresholds), None);
        assert_eq!(state.front_index(), 0);
        assert_eq!(
            state.release(DragRelease::new(-60.0, 0.0), &thresholds),
            Some(Direction::Forward)
        );
        assert_eq!(state.front_index(), 1);
    }

    #[test]
    fn test_offsets_are_shortest_cyclic_distance() {
        let offsets: Vec<isize> = (0..4).map(|i| card_offset(i, 0, 4)).collect();
        assert_eq!(offsets, vec![0, 1, -2, -1]);

        let mut state = carousel(5);
        state.jump_to(4);
        let offsets: Vec<isize> = (0..5).map(|i| state.offset_of(i)).collect();
        assert_eq!(offsets, vec![1, 2, -2, -1, 0]);
    }
}
