mod content_generator;
pub mod content_pools;
mod document_store;
mod newsletter_document;

pub use crate::domain::content_generator::{pick, random_date, ContentGenerator, NewsletterDate};
pub use crate::domain::content_pools::JokeRecord;
pub use crate::domain::document_store::DocumentStore;
pub use crate::domain::newsletter_document::{
    Article, Column, ComicSection, ContributeSection, Header, NewsletterDocument, RightColumn,
};
