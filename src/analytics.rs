use serde_json::{json, Value};

/// Destination for engagement events, shaped like `gtag('event', name, params)`.
/// The session holds an optional sink; when none is configured every
/// emission degrades to a no-op.
pub trait AnalyticsSink {
    fn event(&self, name: &str, params: Value);
}

// ── Event names ─────────────────────────────────────────────

pub const EVENT_SCROLL: &str = "scroll";
pub const EVENT_SHARE: &str = "share";
pub const EVENT_NEWSLETTER_SIGNUP: &str = "newsletter_signup";
pub const EVENT_TIMING_COMPLETE: &str = "timing_complete";

// ── Event parameter builders ────────────────────────────────

/// Params for a scroll-depth milestone ("25%", "50%", ...).
pub fn milestone_params(percent: u8) -> Value {
    json!({
        "event_category": "engagement",
        "event_label": format!("{}%", percent),
        "value": percent,
    })
}

/// Params for a heading scrolled into view. `visible_percent` is the
/// rounded intersection ratio.
pub fn heading_params(label: &str, visible_percent: u8) -> Value {
    json!({
        "event_category": "engagement",
        "event_label": label,
        "value": visible_percent,
    })
}

/// Params for a share action.
pub fn share_params(method: &str, content_id: &str) -> Value {
    json!({
        "method": method,
        "content_type": "article",
        "content_id": content_id,
    })
}

/// Params for a newsletter signup submission.
pub fn newsletter_params() -> Value {
    json!({
        "event_category": "engagement",
        "event_label": "blog_post",
    })
}

/// Params for the one-shot page-load timing report.
pub fn timing_params(load_ms: i64) -> Value {
    json!({
        "name": "page_load",
        "value": load_ms,
    })
}
