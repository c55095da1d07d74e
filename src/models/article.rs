use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Article metadata supplied by the host page. Feeds the structured-data
/// document and the share-event content id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleMeta {
    pub headline: String,
    pub description: String,
    pub image_url: String,
    pub author: String,
    pub publisher: String,
    pub publisher_logo_url: String,
    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
    pub keywords: Vec<String>,
    pub section: String,
    /// Explicit analytics content id; derived from the headline when absent.
    pub article_id: Option<String>,
}

impl ArticleMeta {
    /// Content id carried in share events: the explicit id when the host
    /// supplies one, otherwise a slug of the headline.
    pub fn content_id(&self) -> String {
        match &self.article_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => slug::slugify(&self.headline),
        }
    }
}

/// Fixed per-article share strings used by the intent-URL builders.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShareCopy {
    pub title: String,
    pub teaser: String,
    pub hashtags: Vec<String>,
}
