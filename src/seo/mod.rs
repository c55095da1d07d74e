pub mod jsonld;

pub use jsonld::{build_article_jsonld, StructuredData};

use log::debug;

/// Handle on the document head. The session only ever asks whether a
/// structured-data script is present and appends one.
pub trait DocumentHead {
    /// Whether an `application/ld+json` script element already exists.
    fn has_structured_data(&self) -> bool;
    /// Append a structured-data script element with the given payload.
    fn append_structured_data(&mut self, json: &str);
}

/// Inject the document into the head. Skips when one is already present,
/// so calling any number of times yields exactly one element. Returns
/// whether an element was appended.
pub fn inject_structured_data(head: &mut dyn DocumentHead, doc: &StructuredData) -> bool {
    if head.has_structured_data() {
        debug!("[seo] structured data already present, skipping injection");
        return false;
    }
    head.append_structured_data(&doc.to_json());
    true
}
