use serde::{Deserialize, Serialize};

/// One-time read of the rendered page, taken by the host at page ready.
/// Every list may be empty; an empty snapshot is a valid session input.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageSnapshot {
    pub page_url: String,
    /// Rendered body text, used once to compute the word count.
    pub body_text: String,
    /// Heading texts in document order; intersection callbacks refer to
    /// headings by index into this list.
    pub headings: Vec<String>,
    pub images: Vec<ImageSnapshot>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImageSnapshot {
    pub src: String,
    /// Whether the element already carries a native `loading` attribute.
    pub has_loading_attr: bool,
}
