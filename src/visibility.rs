use std::collections::HashSet;

use serde::Serialize;

/// Scroll-depth state for one page load. `max_percent` is a monotonic
/// high-water mark, reset only by constructing a new session.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScrollState {
    pub current_percent: u8,
    pub max_percent: u8,
}

/// Engagement payload for a heading crossing its visibility threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingReveal {
    pub label: String,
    pub visible_percent: u8,
}

#[derive(Debug)]
struct HeadingState {
    text: String,
    revealed: bool,
}

/// Tracks scroll depth and heading visibility and decides which engagement
/// events are due. Emission is the session's job, so this stays pure and
/// testable with injected values.
#[derive(Debug)]
pub struct VisibilityTracker {
    state: ScrollState,
    milestones: Vec<u8>,
    fired: HashSet<u8>,
    threshold: f64,
    headings: Vec<HeadingState>,
}

impl VisibilityTracker {
    pub fn new(milestones: &[u8], threshold: f64, headings: &[String]) -> Self {
        VisibilityTracker {
            state: ScrollState::default(),
            milestones: milestones.to_vec(),
            fired: HashSet::new(),
            threshold,
            headings: headings
                .iter()
                .map(|text| HeadingState {
                    text: text.trim().to_string(),
                    revealed: false,
                })
                .collect(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Fold one scroll tick into the state. Returns the milestones firing
    /// on this tick in ascending order, each at most once per session, and
    /// only once the high-water mark has reached it. A coarse tick that
    /// jumps past a milestone still fires it.
    pub fn on_scroll(
        &mut self,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
    ) -> Vec<u8> {
        let percent = scroll_percent(scroll_top, viewport_height, document_height);
        self.state.current_percent = percent;

        if percent <= self.state.max_percent {
            return Vec::new();
        }
        self.state.max_percent = percent;

        // Collecting through the fired set keeps a milestone from firing
        // twice even when the configured list repeats a value.
        let mut due: Vec<u8> = Vec::new();
        for m in &self.milestones {
            if *m <= percent && self.fired.insert(*m) {
                due.push(*m);
            }
        }
        due.sort_unstable();
        due
    }

    /// Fold an intersection callback for heading `index`. Returns a reveal
    /// payload when the ratio crosses upward through the threshold; a ratio
    /// back below the threshold re-arms the heading. Unknown indices are
    /// no-ops.
    pub fn on_heading_intersection(&mut self, index: usize, ratio: f64) -> Option<HeadingReveal> {
        let heading = self.headings.get_mut(index)?;

        if ratio >= self.threshold {
            if heading.revealed {
                return None;
            }
            heading.revealed = true;
            Some(HeadingReveal {
                label: heading.text.clone(),
                visible_percent: (ratio * 100.0).round().clamp(0.0, 100.0) as u8,
            })
        } else {
            heading.revealed = false;
            None
        }
    }
}

/// Scroll percent: how much of the document has passed the viewport
/// bottom, rounded and clamped to 0–100. A degenerate document height
/// reads as 0.
pub fn scroll_percent(scroll_top: f64, viewport_height: f64, document_height: f64) -> u8 {
    if document_height <= 0.0 {
        return 0;
    }
    let percent = (scroll_top + viewport_height) / document_height * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
