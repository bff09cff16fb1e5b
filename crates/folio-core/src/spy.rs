//! Scroll-spy: which section is active, and which blocks have been seen
//!
//! `IntersectionObserver` watches regions against a band of the viewport and
//! reports transitions. `ActiveSectionTracker` keeps the last section to
//! enter the band. `RevealTracker` marks blocks once they are sufficiently
//! visible and never un-marks them.

use tracing::{debug, warn};

use crate::config::MotionConfig;
use crate::region::Region;
use crate::section::SectionId;

/// Part of the viewport left after trimming fractions off the top and bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Band {
    /// The whole viewport
    pub const FULL: Band = Band {
        top_inset: 0.0,
        bottom_inset: 0.0,
    };

    /// Page-space `[start, end)` of the band at scroll position `scroll`
    pub fn range(&self, scroll: f64, viewport_height: f64) -> (f64, f64) {
        let start = scroll + self.top_inset * viewport_height;
        let end = scroll + viewport_height - self.bottom_inset * viewport_height;
        (start, end)
    }

    /// Whether `region` touches the band. A collapsed band behaves as a line.
    pub fn contains(&self, region: Region, scroll: f64, viewport_height: f64) -> bool {
        let (start, end) = self.range(scroll, viewport_height);
        if end > start {
            region.intersects(start, end)
        } else {
            region.top <= start && start < region.bottom()
        }
    }
}

impl Default for Band {
    fn default() -> Self {
        Self {
            top_inset: 0.40,
            bottom_inset: 0.55,
        }
    }
}

impl From<&MotionConfig> for Band {
    fn from(config: &MotionConfig) -> Self {
        Self {
            top_inset: config.spy_top_inset,
            bottom_inset: config.spy_bottom_inset,
        }
    }
}

/// Change in a target's intersection with the band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Target<K> {
    key: K,
    region: Region,
    /// None until the first sample after observation
    intersecting: Option<bool>,
}

/// Reports when observed regions enter or leave a band of the viewport
#[derive(Debug, Clone)]
pub struct IntersectionObserver<K> {
    band: Band,
    targets: Vec<Target<K>>,
}

impl<K: Copy + PartialEq> IntersectionObserver<K> {
    pub fn new(band: Band) -> Self {
        Self {
            band,
            targets: Vec::new(),
        }
    }

    /// Start watching `key`, or move it if it is already watched
    pub fn observe(&mut self, key: K, region: Region) {
        if let Some(target) = self.targets.iter_mut().find(|t| t.key == key) {
            target.region = region;
        } else {
            self.targets.push(Target {
                key,
                region,
                intersecting: None,
            });
        }
    }

    pub fn unobserve(&mut self, key: K) {
        self.targets.retain(|t| t.key != key);
    }

    /// Stop watching everything. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    pub fn is_observing(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Check every target and return the ones whose state changed, in observation order.
    /// The first sample after `observe` always reports the target.
    pub fn sample(&mut self, scroll: f64, viewport_height: f64) -> Vec<IntersectionEntry<K>> {
        let band = self.band;
        self.targets
            .iter_mut()
            .filter_map(|target| {
                let now = band.contains(target.region, scroll, viewport_height);
                if target.intersecting == Some(now) {
                    return None;
                }
                target.intersecting = Some(now);
                Some(IntersectionEntry {
                    target: target.key,
                    is_intersecting: now,
                })
            })
            .collect()
    }
}

/// Active navigation section, decided by the last section to enter the band
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    band: Band,
    active: SectionId,
    observer: Option<IntersectionObserver<SectionId>>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(Band::default())
    }
}

impl ActiveSectionTracker {
    pub fn new(band: Band) -> Self {
        Self {
            band,
            active: SectionId::default(),
            observer: None,
        }
    }

    #[inline]
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }

    /// Start observing. Sections without a region are skipped.
    pub fn mount<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = (SectionId, Option<Region>)>,
    {
        let mut observer = IntersectionObserver::new(self.band);
        for (section, region) in regions {
            match region {
                Some(region) => observer.observe(section, region),
                None => debug!("Section {} not on the page, not observed", section.anchor()),
            }
        }
        if !observer.is_observing() {
            warn!("No page sections to observe; the active section stays {}", self.active.anchor());
        }
        self.observer = Some(observer);
    }

    /// Update region geometry after a relayout, keeping intersection state
    pub fn relayout<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = (SectionId, Option<Region>)>,
    {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        for (section, region) in regions {
            match region {
                Some(region) => observer.observe(section, region),
                None => observer.unobserve(section),
            }
        }
    }

    /// Feed a scroll position. Returns the new active section when it changed.
    pub fn on_scroll(&mut self, scroll: f64, viewport_height: f64) -> Option<SectionId> {
        let observer = self.observer.as_mut()?;
        let previous = self.active;
        for entry in observer.sample(scroll, viewport_height) {
            if entry.is_intersecting {
                self.active = entry.target;
            }
        }
        (self.active != previous).then_some(self.active)
    }

    /// Stop observing and release all regions. Safe to call when never mounted.
    pub fn unmount(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Once-only reveal of blocks that become visible enough
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    amount: f64,
    entries: Vec<(K, Region, bool)>,
}

impl<K: Copy + PartialEq> RevealTracker<K> {
    pub fn new(amount: f64) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            entries: Vec::new(),
        }
    }

    /// Watch `key`; already revealed keys stay revealed
    pub fn observe(&mut self, key: K, region: Region) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.0 == key) {
            entry.1 = region;
        } else {
            self.entries.push((key, region, false));
        }
    }

    /// Reveal everything visible enough and return the newly revealed keys
    pub fn sample(&mut self, scroll: f64, viewport_height: f64) -> Vec<K> {
        let (start, end) = Band::FULL.range(scroll, viewport_height);
        let amount = self.amount;
        self.entries
            .iter_mut()
            .filter(|(_, region, revealed)| {
                !revealed && region.visible_fraction(start, end) >= amount
            })
            .map(|entry| {
                entry.2 = true;
                entry.0
            })
            .collect()
    }

    pub fn is_revealed(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _, revealed)| *k == key && *revealed)
    }
}
