//! Newsletter API Port - the remote marketing platform as the forms see it.
//!
//! Implementations read connection parameters from the stored settings on
//! every call and never return errors: segment lookups degrade to an empty
//! list and subscribe attempts to a failed [`SubscriptionOutcome`].

use async_trait::async_trait;

use crate::domain::newsletter::{ContactSubmission, Segment, SubscriptionOutcome};

/// Port for the two remote operations the site needs
#[async_trait]
pub trait NewsletterApi: Send + Sync {
    /// Lists the audience segments of the configured organization.
    ///
    /// Returns an empty list when credentials are missing or the call fails.
    async fn fetch_segments(&self) -> Vec<Segment>;

    /// Subscribes a contact to the configured segment.
    ///
    /// Single attempt, no retries.
    async fn subscribe_contact(&self, contact: &ContactSubmission) -> SubscriptionOutcome;
}
