use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::analytics::{self, AnalyticsSink};
use crate::config::SessionConfig;
use crate::images::{ImagePhase, ImageTracker};
use crate::models::article::{ArticleMeta, ShareCopy};
use crate::models::snapshot::PageSnapshot;
use crate::progress::{self, ProgressIndicator};
use crate::seo::{self, DocumentHead, StructuredData};
use crate::share::{
    self, Clipboard, CopyFeedback, PanelEmphasis, PopupOpener, ShareEvent, SharePlatform,
    BUTTON_HOVER_SCALE,
};
use crate::visibility::{ScrollState, VisibilityTracker};

/// One page-load's instrumentation. Constructed at page ready from a DOM
/// snapshot; the host forwards browser events to it and reads the
/// presentation state back. All state dies with the session.
///
/// Every outward effect goes through a collaborator: the optional
/// analytics sink held by the session, and the popup opener, clipboard,
/// and document head passed into the discrete actions that need them.
pub struct PageInstrumentation {
    config: SessionConfig,
    meta: ArticleMeta,
    share_copy: ShareCopy,
    snapshot: PageSnapshot,
    word_count: usize,
    structured_data: StructuredData,
    sink: Option<Box<dyn AnalyticsSink>>,

    tracker: VisibilityTracker,
    progress: ProgressIndicator,
    images: ImageTracker,
    copy_feedback: CopyFeedback,
    hovered_buttons: HashSet<SharePlatform>,
    notice: Option<String>,
    timing_reported: bool,
}

impl PageInstrumentation {
    pub fn attach(
        config: SessionConfig,
        meta: ArticleMeta,
        share_copy: ShareCopy,
        snapshot: PageSnapshot,
        sink: Option<Box<dyn AnalyticsSink>>,
    ) -> Self {
        let word_count = progress::count_words(&snapshot.body_text);
        let tracker = VisibilityTracker::new(
            &config.milestones,
            config.heading_threshold,
            &snapshot.headings,
        );
        let progress = ProgressIndicator::new(word_count, &config);
        let images = ImageTracker::new(&snapshot.images);
        let structured_data = seo::build_article_jsonld(
            &meta,
            &snapshot.page_url,
            word_count,
            progress.reading_minutes(),
        );

        debug!(
            "[session] attached to {}: {} words, {} headings, {} images",
            snapshot.page_url,
            word_count,
            snapshot.headings.len(),
            snapshot.images.len(),
        );

        PageInstrumentation {
            config,
            meta,
            share_copy,
            snapshot,
            word_count,
            structured_data,
            sink,
            tracker,
            progress,
            images,
            copy_feedback: CopyFeedback::default(),
            hovered_buttons: HashSet::new(),
            notice: None,
            timing_reported: false,
        }
    }

    fn emit(&self, name: &str, params: serde_json::Value) {
        if let Some(sink) = &self.sink {
            sink.event(name, params);
        }
    }

    // ── Scroll / visibility ─────────────────────────────────

    /// Fold one scroll tick. Updates the progress bar and panel emphasis,
    /// and emits one milestone event the first time each configured depth
    /// is passed. Safe at animation-frame frequency.
    pub fn on_scroll(&mut self, scroll_top: f64, viewport_height: f64, document_height: f64) {
        let due = self
            .tracker
            .on_scroll(scroll_top, viewport_height, document_height);
        self.progress
            .set_scroll_percent(self.tracker.state().current_percent);
        for milestone in due {
            self.emit(analytics::EVENT_SCROLL, analytics::milestone_params(milestone));
        }
    }

    /// Fold an intersection callback for heading `index` at the given
    /// ratio. Emits one engagement event per upward crossing of the
    /// visibility threshold.
    pub fn on_heading_intersection(&mut self, index: usize, ratio: f64) {
        if let Some(reveal) = self.tracker.on_heading_intersection(index, ratio) {
            self.emit(
                analytics::EVENT_SCROLL,
                analytics::heading_params(&reveal.label, reveal.visible_percent),
            );
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    // ── Share actions ───────────────────────────────────────

    /// Open the share intent for a popup platform and emit one share
    /// event. The popup open never depends on the sink being present.
    /// CopyLink has no intent URL; route it through [`Self::copy_link`].
    pub fn share(&mut self, platform: SharePlatform, opener: &dyn PopupOpener) {
        let url = match share::share_intent_url(platform, &self.snapshot.page_url, &self.share_copy)
        {
            Some(url) => url,
            None => {
                debug!("[share] {} has no intent URL, ignoring", platform.method_label());
                return;
            }
        };

        opener.open(url.as_str(), &self.config.popup_features());
        let event = ShareEvent {
            platform,
            article_id: self.meta.content_id(),
        };
        self.emit(analytics::EVENT_SHARE, event.params());
    }

    /// Copy the page URL to the clipboard. On success the copy control
    /// shows its confirmation label for the configured window and one
    /// share event is emitted. On failure the label stays put, nothing is
    /// emitted, and a notice is queued for the host to display.
    pub fn copy_link(&mut self, clipboard: &dyn Clipboard, now: Instant) {
        match clipboard.write_text(&self.snapshot.page_url) {
            Ok(()) => {
                self.copy_feedback.arm(now);
                let event = ShareEvent {
                    platform: SharePlatform::CopyLink,
                    article_id: self.meta.content_id(),
                };
                self.emit(analytics::EVENT_SHARE, event.params());
            }
            Err(e) => {
                warn!("[share] clipboard write failed: {}", e);
                self.notice = Some(self.config.copy_failed_notice.clone());
            }
        }
    }

    /// Advance time-dependent state: reverts the copy confirmation once
    /// its window has elapsed. Safe to call at any frequency.
    pub fn tick(&mut self, now: Instant) {
        self.copy_feedback
            .tick(now, Duration::from_millis(self.config.copy_feedback_ms));
    }

    /// Current label of the copy control.
    pub fn copy_label(&self) -> &str {
        if self.copy_feedback.is_armed() {
            &self.config.copied_label
        } else {
            &self.config.copy_label
        }
    }

    /// Take the pending user-visible notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn set_share_button_hover(&mut self, platform: SharePlatform, hovered: bool) {
        if hovered {
            self.hovered_buttons.insert(platform);
        } else {
            self.hovered_buttons.remove(&platform);
        }
    }

    /// Scale of one share button: enlarged while hovered.
    pub fn share_button_scale(&self, platform: SharePlatform) -> f64 {
        if self.hovered_buttons.contains(&platform) {
            BUTTON_HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Emphasis of the floating share panel at the current scroll depth:
    /// full strictly inside the configured band, dimmed outside it.
    pub fn panel_emphasis(&self) -> PanelEmphasis {
        PanelEmphasis::at(
            self.tracker.state().current_percent,
            self.config.panel_band_low,
            self.config.panel_band_high,
        )
    }

    // ── Progress presentation ───────────────────────────────

    pub fn bar_width_percent(&self) -> u8 {
        self.progress.bar_width_percent()
    }

    pub fn badge_label(&self) -> String {
        self.progress.badge_label()
    }

    pub fn badge_opacity(&self) -> f64 {
        self.progress.badge_opacity()
    }

    pub fn set_badge_hover(&mut self, hovered: bool) {
        self.progress.set_badge_hover(hovered);
    }

    pub fn reading_minutes(&self) -> u32 {
        self.progress.reading_minutes()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    // ── Metadata ────────────────────────────────────────────

    /// Inject the structured-data document into the head. The document is
    /// built once at attach; skips when the head already carries one, so
    /// calling any number of times yields exactly one element. Returns
    /// whether an element was appended.
    pub fn inject_metadata(&self, head: &mut dyn DocumentHead) -> bool {
        seo::inject_structured_data(head, &self.structured_data)
    }

    // ── Images ──────────────────────────────────────────────

    /// Indices of snapshot images that should get `loading="lazy"` added.
    pub fn lazy_candidates(&self) -> Vec<usize> {
        self.images.lazy_candidates()
    }

    /// Report the first intersection of an image. True exactly once per
    /// image: start the fade and stop watching it.
    pub fn on_image_intersection(&mut self, index: usize) -> bool {
        self.images.on_intersection(index)
    }

    /// Report that an image finished loading, completing its fade.
    pub fn on_image_loaded(&mut self, index: usize) {
        self.images.on_loaded(index);
    }

    pub fn image_phase(&self, index: usize) -> Option<ImagePhase> {
        self.images.phase(index)
    }

    // ── Supplements ─────────────────────────────────────────

    /// Record a newsletter signup submission. One event per call, no
    /// dedup.
    pub fn newsletter_signup(&mut self) {
        self.emit(
            analytics::EVENT_NEWSLETTER_SIGNUP,
            analytics::newsletter_params(),
        );
    }

    /// Report the navigation load duration. Only the first report emits a
    /// timing event.
    pub fn page_loaded(&mut self, duration: Duration) {
        if self.timing_reported {
            return;
        }
        self.timing_reported = true;
        let load_ms = (duration.as_secs_f64() * 1000.0).round() as i64;
        self.emit(analytics::EVENT_TIMING_COMPLETE, analytics::timing_params(load_ms));
    }
}
