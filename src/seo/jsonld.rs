use serde::Serialize;

use crate::models::article::ArticleMeta;

/// schema.org Article document describing the current page, serialized
/// into the head as `application/ld+json`.
#[derive(Debug, Serialize, Clone)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: Person,
    pub publisher: Organization,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    #[serde(rename = "dateModified")]
    pub date_modified: String,
    #[serde(rename = "mainEntityOfPage")]
    pub main_entity_of_page: WebPage,
    pub keywords: Vec<String>,
    #[serde(rename = "articleSection")]
    pub article_section: String,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    /// ISO 8601 duration, e.g. "PT8M".
    #[serde(rename = "timeRequired")]
    pub time_required: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct Person {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    pub name: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Serialize, Clone)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// Build the structured-data document for the current article from the
/// host-supplied metadata plus the session's computed word count and
/// reading time.
pub fn build_article_jsonld(
    meta: &ArticleMeta,
    page_url: &str,
    word_count: usize,
    reading_minutes: u32,
) -> StructuredData {
    StructuredData {
        context: "https://schema.org",
        doc_type: "Article",
        headline: meta.headline.clone(),
        description: meta.description.clone(),
        image: meta.image_url.clone(),
        author: Person {
            entity_type: "Person",
            name: meta.author.clone(),
        },
        publisher: Organization {
            entity_type: "Organization",
            name: meta.publisher.clone(),
            logo: ImageObject {
                entity_type: "ImageObject",
                url: meta.publisher_logo_url.clone(),
            },
        },
        date_published: meta.date_published.format("%Y-%m-%d").to_string(),
        date_modified: meta.date_modified.format("%Y-%m-%d").to_string(),
        main_entity_of_page: WebPage {
            entity_type: "WebPage",
            id: page_url.to_string(),
        },
        keywords: meta.keywords.clone(),
        article_section: meta.section.clone(),
        word_count,
        time_required: format!("PT{}M", reading_minutes),
    }
}

impl StructuredData {
    /// Serialized payload for the script element.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
