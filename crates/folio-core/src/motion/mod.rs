//! Scroll-linked motion: spring smoothing and progress mapping
//!
//! `spring` integrates a damped spring toward a moving target once per frame.
//! `progress` turns a tracked region's position in the viewport into a
//! clamped [0, 1] progress value and smooths it with the spring.

pub mod progress;
pub mod spring;

pub use progress::{ScrollOffsets, ScrollProgressMapper};
pub use spring::Spring;
