//! ListSegmentsHandler - Query handler feeding the segment selector.

use std::sync::Arc;

use crate::domain::newsletter::Segment;
use crate::ports::NewsletterApi;

/// Handler listing the segments of the configured organization.
///
/// Never fails: missing credentials or remote errors produce an empty list.
pub struct ListSegmentsHandler {
    api: Arc<dyn NewsletterApi>,
}

impl ListSegmentsHandler {
    pub fn new(api: Arc<dyn NewsletterApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self) -> Vec<Segment> {
        self.api.fetch_segments().await
    }
}
