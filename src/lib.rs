//! Reader-engagement instrumentation for a single article page.
//!
//! One [`PageInstrumentation`] session is built per page load from a DOM
//! snapshot. The host (a webview shell, an embedded reader, a blog
//! runtime, or a test harness) forwards browser events to it (scroll
//! ticks, intersection callbacks, clicks, hovers) and applies the
//! presentation state the session computes: progress-bar width, badge
//! label and opacity, panel emphasis, copy-control label, lazy-image
//! candidates. Outward effects go through the collaborator traits
//! ([`AnalyticsSink`], [`Clipboard`], [`PopupOpener`], [`DocumentHead`]);
//! a missing analytics sink degrades every emission to a no-op.

pub mod analytics;
pub mod config;
pub mod images;
pub mod models;
pub mod progress;
pub mod seo;
pub mod session;
pub mod share;
pub mod visibility;


pub use analytics::AnalyticsSink;
pub use config::SessionConfig;
pub use images::ImagePhase;
pub use models::article::{ArticleMeta, ShareCopy};
pub use models::snapshot::{ImageSnapshot, PageSnapshot};
pub use seo::{DocumentHead, StructuredData};
pub use session::PageInstrumentation;
pub use share::{Clipboard, ClipboardError, PanelEmphasis, PopupOpener, SharePlatform};
pub use visibility::ScrollState;
