//! Animated page scrolling
//!
//! The page is one tall column of rows; the viewport shows a window of it.
//! `ScrollAnimator` eases the window toward a target row so that keyboard
//! scrolling and anchor jumps glide instead of snapping.
//!
//! - `easing` maps animation time to progress
//! - `timing` holds elapsed-time and interpolation helpers
//! - `animator` owns the scroll position and the running animation

pub mod animator;
pub mod easing;
pub mod timing;

pub use animator::ScrollAnimator;
pub use easing::EasingTypeExt;
pub use folio_core::{EasingType, ScrollConfig};
