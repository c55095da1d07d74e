use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::analytics;
use crate::models::article::ShareCopy;

/// Scale applied to a share button while the pointer is over it.
pub const BUTTON_HOVER_SCALE: f64 = 1.1;

/// Share targets, plus the clipboard pseudo-target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    Facebook,
    Reddit,
    CopyLink,
}

impl SharePlatform {
    /// All platforms in panel order.
    pub const ALL: [SharePlatform; 5] = [
        SharePlatform::Twitter,
        SharePlatform::LinkedIn,
        SharePlatform::Facebook,
        SharePlatform::Reddit,
        SharePlatform::CopyLink,
    ];

    /// The `method` label carried in share events.
    pub fn method_label(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Reddit => "Reddit",
            SharePlatform::CopyLink => "Copy Link",
        }
    }

    /// Whether the platform is reached through a popup window.
    /// CopyLink goes through the clipboard instead.
    pub fn opens_popup(&self) -> bool {
        !matches!(self, SharePlatform::CopyLink)
    }
}

/// A share interaction. Fire-and-forget: forwarded to the analytics sink,
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ShareEvent {
    pub platform: SharePlatform,
    pub article_id: String,
}

impl ShareEvent {
    pub fn params(&self) -> Value {
        analytics::share_params(self.platform.method_label(), &self.article_id)
    }
}

/// Build the canonical share-intent URL for a popup platform. Pure and
/// idempotent; CopyLink has no intent URL.
pub fn share_intent_url(
    platform: SharePlatform,
    page_url: &str,
    copy: &ShareCopy,
) -> Option<Url> {
    let url = match platform {
        SharePlatform::Twitter => {
            let hashtags = copy.hashtags.join(",");
            Url::parse_with_params(
                "https://twitter.com/intent/tweet",
                [
                    ("text", copy.teaser.as_str()),
                    ("url", page_url),
                    ("hashtags", hashtags.as_str()),
                ],
            )
        }
        SharePlatform::LinkedIn => Url::parse_with_params(
            "https://www.linkedin.com/sharing/share-offsite/",
            [
                ("url", page_url),
                ("title", copy.title.as_str()),
                ("summary", copy.teaser.as_str()),
            ],
        ),
        SharePlatform::Facebook => {
            Url::parse_with_params("https://www.facebook.com/sharer/sharer.php", [("u", page_url)])
        }
        SharePlatform::Reddit => Url::parse_with_params(
            "https://reddit.com/submit",
            [("url", page_url), ("title", copy.title.as_str())],
        ),
        SharePlatform::CopyLink => return None,
    };
    url.ok()
}

// ── Collaborator seams ──────────────────────────────────────

/// Opens share popups. Fire-and-forget; no response is consumed.
pub trait PopupOpener {
    fn open(&self, url: &str, features: &str);
}

/// Writes to the system clipboard. Hosts adapt their own async machinery;
/// from the session's perspective completion is synchronous. No timeout,
/// no retry.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Why a clipboard write did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard exists in this context.
    Unavailable,
    /// The platform refused the write (permissions, focus).
    Denied,
    /// The write started but did not complete.
    WriteFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard unavailable"),
            ClipboardError::Denied => write!(f, "clipboard write denied"),
            ClipboardError::WriteFailed(reason) => write!(f, "clipboard write failed: {}", reason),
        }
    }
}

// ── Copy feedback ───────────────────────────────────────────

/// Confirmation state of the copy control. Armed by a successful clipboard
/// write; reverted by `tick` once the feedback window has fully elapsed
/// (exactly at the deadline, not before).
#[derive(Debug, Default)]
pub struct CopyFeedback {
    armed_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn tick(&mut self, now: Instant, ttl: Duration) {
        if let Some(armed_at) = self.armed_at {
            if now.duration_since(armed_at) >= ttl {
                self.armed_at = None;
            }
        }
    }
}

// ── Panel emphasis ──────────────────────────────────────────

/// Visual emphasis of the floating share panel at a given scroll depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelEmphasis {
    pub opacity: f64,
    pub scale: f64,
}

impl PanelEmphasis {
    pub const FULL: PanelEmphasis = PanelEmphasis {
        opacity: 1.0,
        scale: 1.0,
    };
    pub const DIMMED: PanelEmphasis = PanelEmphasis {
        opacity: 0.5,
        scale: 0.8,
    };

    /// Full emphasis strictly inside the band; dimmed at and outside the
    /// boundary values.
    pub fn at(percent: u8, band_low: u8, band_high: u8) -> PanelEmphasis {
        if percent > band_low && percent < band_high {
            PanelEmphasis::FULL
        } else {
            PanelEmphasis::DIMMED
        }
    }
}
