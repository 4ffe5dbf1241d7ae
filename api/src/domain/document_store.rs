//! The currently published issue.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement: the refresh loop is the
//! only writer, request handlers only ever take snapshots.

use crate::domain::newsletter_document::NewsletterDocument;
use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct DocumentStore {
    current: ArcSwap<NewsletterDocument>,
}

impl DocumentStore {
    pub fn new(initial: NewsletterDocument) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Snapshot of the published issue. Stays valid even if a refresh happens meanwhile.
    #[inline]
    pub fn current(&self) -> Arc<NewsletterDocument> {
        self.current.load_full()
    }

    pub fn replace(&self, document: NewsletterDocument) {
        self.current.store(Arc::new(document));
    }
}
