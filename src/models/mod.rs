pub mod article;
pub mod snapshot;
