//! Pointer drag tracking for the project carousels
//!
//! crossterm reports mouse down, drag and up as separate events in cell
//! coordinates. `DragTracker` turns that stream into the offset and release
//! velocity the carousel swipe thresholds are expressed in.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use folio_core::carousel::DragRelease;
use folio_core::config::GestureConfig;

/// Samples older than this are ignored when estimating release velocity
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// How a pointer interaction ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome<T> {
    /// Released without ever leaving the cell it was pressed on
    Tap(T),
    /// Moved before release, possibly back to where it started
    Release(T, DragRelease),
}

#[derive(Debug, Clone)]
struct ActiveDrag<T> {
    target: T,
    origin_column: u16,
    /// Left the origin column at some point, even if it came back
    moved: bool,
    /// (time, offset in units) newest last
    samples: VecDeque<(Instant, f64)>,
}

/// Tracks at most one drag at a time
#[derive(Debug, Clone)]
pub struct DragTracker<T> {
    units_per_cell: f64,
    active: Option<ActiveDrag<T>>,
}

impl<T: Copy> Default for DragTracker<T> {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl<T: Copy> DragTracker<T> {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            units_per_cell: config.units_per_cell.max(1.0),
            active: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the drag in progress
    pub fn target(&self) -> Option<T> {
        self.active.as_ref().map(|drag| drag.target)
    }

    /// Current horizontal offset in units, 0 when idle
    pub fn offset(&self) -> f64 {
        self.active
            .as_ref()
            .and_then(|drag| drag.samples.back())
            .map(|(_, offset)| *offset)
            .unwrap_or(0.0)
    }

    /// Offset rounded to whole cells, for rendering the dragged card
    pub fn offset_cells(&self) -> i32 {
        (self.offset() / self.units_per_cell).round() as i32
    }

    /// Pointer pressed on `target`. Replaces any unfinished drag.
    pub fn start(&mut self, target: T, column: u16, now: Instant) {
        let mut samples = VecDeque::new();
        samples.push_back((now, 0.0));
        self.active = Some(ActiveDrag {
            target,
            origin_column: column,
            moved: false,
            samples,
        });
    }

    /// Pointer moved while pressed. Ignored when no drag is active.
    pub fn move_to(&mut self, column: u16, now: Instant) {
        let units = self.units_per_cell;
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        let offset = (column as f64 - drag.origin_column as f64) * units;
        drag.moved |= offset != 0.0;
        drag.samples.push_back((now, offset));
        while drag.samples.len() > 2 {
            match drag.samples.front() {
                Some((t, _)) if now.saturating_duration_since(*t) > VELOCITY_WINDOW => {
                    drag.samples.pop_front();
                }
                _ => break,
            }
        }
    }

    /// Pointer released. Returns None when no drag was active.
    pub fn finish(&mut self, column: u16, now: Instant) -> Option<DragOutcome<T>> {
        self.move_to(column, now);
        let drag = self.active.take()?;

        if !drag.moved {
            return Some(DragOutcome::Tap(drag.target));
        }

        let offset = drag.samples.back().map(|(_, o)| *o).unwrap_or(0.0);
        let velocity = match (drag.samples.front(), drag.samples.back()) {
            (Some((t0, o0)), Some((t1, o1))) => {
                let dt = t1.saturating_duration_since(*t0).as_secs_f64();
                if dt > 0.0 {
                    (o1 - o0) / dt
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        Some(DragOutcome::Release(drag.target, DragRelease::new(offset, velocity)))
    }

    /// Drop the drag in progress. Safe to call when idle.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
