use std::time::{Duration, Instant};

use folio_core::{EasingType, ScrollConfig};

use super::easing::EasingTypeExt;
use super::timing::{lerp_row, progress_at};

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Page scroll position with eased transitions
///
/// `scroll_to` starts a glide to an absolute row (anchor jumps); `scroll_by`
/// queues a relative move that is merged with other moves from the same frame.
/// Call `update` once per frame.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    glide: Option<Glide>,
    position: u16,
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            glide: None,
            position: 0,
            pending_delta: 0,
        }
    }

    /// Smooth scrolling is on and has a non-zero duration
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Work is queued or running; the caller should tick at animation rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.is_animating() || self.pending_delta != 0
    }

    /// Row currently at the top of the viewport
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Row the current glide ends on
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.position)
    }

    /// Jump without animating
    pub fn set_position(&mut self, row: u16) {
        self.glide = None;
        self.pending_delta = 0;
        self.position = row;
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    fn start_glide(&mut self, to: u16, now: Instant) {
        if to == self.position {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            start: now,
            from: self.position,
            to,
            duration: self.duration(),
            easing: self.config.easing,
        });
    }

    /// Glide to `row`, clamped to `max_scroll`
    pub fn scroll_to(&mut self, row: u16, max_scroll: u16, now: Instant) {
        let row = row.min(max_scroll);
        self.pending_delta = 0;
        if self.is_smooth() {
            self.start_glide(row, now);
        } else {
            self.set_position(row);
        }
    }

    /// Move by `delta` rows (positive = down). Smooth moves are batched until `update`.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if self.is_smooth() {
            self.pending_delta += delta;
        } else {
            let row = (self.position as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set_position(row);
        }
    }

    /// One scroll step: a single row when smooth, `scroll_lines` otherwise
    pub fn step(&self) -> i32 {
        if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i32
        }
    }

    /// Advance the glide and return the row at the top of the viewport
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let to = (self.target() as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;
            self.start_glide(to, now);
        }

        if let Some(glide) = &self.glide {
            let t = progress_at(glide.start, glide.duration, now);
            if t >= 1.0 {
                self.position = glide.to;
                self.glide = None;
            } else {
                self.position = lerp_row(glide.from, glide.to, glide.easing.apply(t));
            }
        }

        // Content can shrink under us (terminal resize)
        self.position = self.position.min(max_scroll);
        self.position
    }

    /// Stop where we are
    pub fn cancel(&mut self) {
        self.glide = None;
        self.pending_delta = 0;
    }
}
