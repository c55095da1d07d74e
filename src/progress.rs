use crate::config::SessionConfig;

/// Count words the way the reading-time badge does: whitespace-separated
/// tokens, skipping tokens with no alphanumeric content.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Reading time in whole minutes at the given pace, rounded up.
/// Zero words is zero minutes.
pub fn reading_time_minutes(word_count: usize, words_per_minute: u32) -> u32 {
    if words_per_minute == 0 {
        return 0;
    }
    (word_count as f64 / words_per_minute as f64).ceil() as u32
}

/// Presentation state for the reading-progress bar and the floating
/// reading-time badge. The minute estimate is fixed at attach; the bar
/// width follows the scroll percent on every tick.
#[derive(Debug)]
pub struct ProgressIndicator {
    bar_width_percent: u8,
    minutes: u32,
    badge_hovered: bool,
    opacity_rest: f64,
    opacity_hovered: f64,
}

impl ProgressIndicator {
    pub fn new(word_count: usize, config: &SessionConfig) -> Self {
        ProgressIndicator {
            bar_width_percent: 0,
            minutes: reading_time_minutes(word_count, config.words_per_minute),
            badge_hovered: false,
            opacity_rest: config.badge_opacity,
            opacity_hovered: config.badge_opacity_hovered,
        }
    }

    /// Bar width is a linear function of scroll percent.
    pub fn set_scroll_percent(&mut self, percent: u8) {
        self.bar_width_percent = percent.min(100);
    }

    pub fn bar_width_percent(&self) -> u8 {
        self.bar_width_percent
    }

    pub fn reading_minutes(&self) -> u32 {
        self.minutes
    }

    pub fn badge_label(&self) -> String {
        format!("{} min read", self.minutes)
    }

    /// The badge dims while hovered so it never blocks the text under it.
    pub fn set_badge_hover(&mut self, hovered: bool) {
        self.badge_hovered = hovered;
    }

    pub fn badge_opacity(&self) -> f64 {
        if self.badge_hovered {
            self.opacity_hovered
        } else {
            self.opacity_rest
        }
    }
}
