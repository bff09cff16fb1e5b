use std::time::Duration;

use crate::config::SpringConfig;

/// Longest frame the integrator accepts; longer gaps (e.g. a stalled terminal) are clamped
const MAX_FRAME: f64 = 0.1;
/// Integration sub-step so stiff springs stay stable at low frame rates
const SUB_STEP: f64 = 1.0 / 240.0;

/// Damped spring following a target value
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring still has work to do
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.value != self.target || self.velocity != 0.0
    }

    /// Advance the simulation by `dt` and return the new value
    pub fn update(&mut self, dt: Duration) -> f64 {
        if !self.is_animating() {
            return self.value;
        }

        let stiffness = self.config.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return self.value;
        }
        let damping = self.config.damping.max(0.0);
        let mass = if self.config.mass > 0.0 { self.config.mass } else { 1.0 };

        let mut remaining = dt.as_secs_f64().clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let step = remaining.min(SUB_STEP);
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.snap_to(self.target);
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.update(FRAME);
        }
        assert!((spring.value() - 1.0).abs() <= SpringConfig::default().rest_delta);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_moves_gradually() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let first = spring.update(FRAME);
        assert!(first > 0.0 && first < 0.5, "moved to {}", first);
    }

    #[test]
    fn test_default_is_critically_damped() {
        let config = SpringConfig::default();
        let critical = 2.0 * (config.stiffness * config.mass).sqrt();
        assert!((config.damping - critical).abs() < 1e-12);
    }

    #[test]
    fn test_default_never_overshoots() {
        let rest_delta = SpringConfig::default().rest_delta;
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..600 {
            assert!(spring.update(FRAME) <= 1.0 + rest_delta);
        }
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let config = SpringConfig {
            stiffness: 0.0,
            ..Default::default()
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(0.4);
        assert_eq!(spring.update(FRAME), 0.4);
    }

    #[test]
    fn test_idle_spring_does_not_move() {
        let mut spring = Spring::new(SpringConfig::default(), 0.25);
        assert!(!spring.is_animating());
        assert_eq!(spring.update(FRAME), 0.25);
    }
}
