use serde::{Deserialize, Serialize};

/// Tunable values for one instrumentation session.
///
/// The defaults carry the canonical behavior; hosts override individual
/// fields before attaching a session. Missing fields deserialize to their
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Scroll-depth percentages that each emit one engagement event per session.
    pub milestones: Vec<u8>,
    pub words_per_minute: u32,
    /// How long the copy control shows its confirmation label.
    pub copy_feedback_ms: u64,
    pub popup_width: u32,
    pub popup_height: u32,
    /// Intersection ratio at which a heading counts as revealed.
    pub heading_threshold: f64,
    pub badge_opacity: f64,
    pub badge_opacity_hovered: f64,
    /// Scroll-percent band (exclusive bounds) inside which the share panel
    /// is fully emphasized.
    pub panel_band_low: u8,
    pub panel_band_high: u8,
    pub copy_label: String,
    pub copied_label: String,
    /// Notice queued for the host when a clipboard write fails.
    pub copy_failed_notice: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            milestones: vec![25, 50, 75, 90],
            words_per_minute: 200,
            copy_feedback_ms: 2000,
            popup_width: 550,
            popup_height: 420,
            heading_threshold: 0.5,
            badge_opacity: 0.7,
            badge_opacity_hovered: 0.3,
            panel_band_low: 20,
            panel_band_high: 80,
            copy_label: "📋".to_string(),
            copied_label: "✅".to_string(),
            copy_failed_notice: "Couldn't copy link".to_string(),
        }
    }
}

impl SessionConfig {
    /// Popup feature string in the `window.open` format, e.g. "width=550,height=420".
    pub fn popup_features(&self) -> String {
        format!("width={},height={}", self.popup_width, self.popup_height)
    }
}
