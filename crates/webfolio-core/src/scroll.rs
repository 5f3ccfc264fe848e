//! Scroll-reactive effects.
//!
//! Everything except [`RevealTracker`] is a pure function of the current
//! scroll offset and section geometry, recomputed on every scroll tick.

use std::collections::HashMap;
use std::time::Duration;

/// Scroll offset past which the header gets its shadow
pub const HEADER_SHADOW_OFFSET: f64 = 50.0;

/// Scroll offset past which the back-to-top button shows
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Added to the scroll offset when probing for the current section
pub const NAV_PROBE_OFFSET: f64 = 100.0;

/// Minimum visible fraction of a progress bar that triggers its fill
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Delay between a progress bar entering view and its fill
pub const REVEAL_DELAY: Duration = Duration::from_millis(200);

/// Document-relative vertical extent of a page section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)` containment
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn header_elevated(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_OFFSET
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// The nav-linked section containing document position `y`.
///
/// Only sections listed in `linked` take part. When sections overlap, the
/// last one in document order wins.
pub fn section_at<'a>(y: f64, sections: &'a [SectionBounds], linked: &[&str]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| linked.contains(&s.id.as_str()))
        .filter(|s| s.contains(y))
        .last()
        .map(|s| s.id.as_str())
}

/// The section whose nav link should be highlighted at `scroll_y`, if any
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionBounds],
    linked: &[&str],
) -> Option<&'a str> {
    section_at(scroll_y + NAV_PROBE_OFFSET, sections, linked)
}

/// Result of one scroll tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub header_elevated: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
}

/// Evaluates every scroll effect for a set of nav-linked section ids
#[derive(Clone, Debug, Default)]
pub struct ScrollEffects {
    linked: Vec<String>,
}

impl ScrollEffects {
    pub fn new<I, S>(linked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            linked: linked.into_iter().map(Into::into).collect(),
        }
    }

    pub fn evaluate(&self, scroll_y: f64, sections: &[SectionBounds]) -> ScrollSnapshot {
        let linked: Vec<&str> = self.linked.iter().map(String::as_str).collect();
        ScrollSnapshot {
            header_elevated: header_elevated(scroll_y),
            active_section: active_section(scroll_y, sections, &linked).map(str::to_string),
            back_to_top_visible: back_to_top_visible(scroll_y),
        }
    }
}

/// Fraction of `[top, top + height)` inside the viewport `[view_top, view_top + view_height)`
pub fn intersection_ratio(top: f64, height: f64, view_top: f64, view_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    ((end - start).max(0.0) / height).min(1.0)
}

/// One-shot progress bar reveal.
///
/// Each observed bar yields its target percentage the first time it is
/// reported at or above [`REVEAL_THRESHOLD`], and is then forgotten.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    observed: HashMap<String, u8>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a bar with its declared fill percentage
    pub fn observe(&mut self, id: impl Into<String>, percent: u8) {
        self.observed.insert(id.into(), percent.min(100));
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.observed.contains_key(id)
    }

    pub fn remaining(&self) -> usize {
        self.observed.len()
    }

    /// Report a bar's visible fraction. Returns its fill target on the
    /// first qualifying report only.
    pub fn on_intersection(&mut self, id: &str, ratio: f64) -> Option<u8> {
        if ratio < REVEAL_THRESHOLD {
            return None;
        }
        let percent = self.observed.remove(id)?;
        tracing::debug!(bar = id, percent, "Progress bar revealed");
        Some(percent)
    }
}
