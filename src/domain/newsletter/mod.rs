//! Newsletter domain - signup contacts, segments and site settings.
//!
//! Pure types with no I/O: value objects validate on construction, the
//! settings record knows how to render its confirmation message, and
//! [`SubscriptionStatus`] names every way a subscribe attempt can end.

mod contact;
mod errors;
mod organization_host;
mod outcome;
mod segment;
mod settings;
mod subscriber_email;

pub use contact::{ContactPayload, ContactSubmission, MAX_NAME_LEN};
pub use errors::{SettingsError, SignupError};
pub use organization_host::{OrganizationHost, PLATFORM_DOMAIN_SUFFIX};
pub use outcome::{SubscriptionOutcome, SubscriptionStatus};
pub use segment::Segment;
pub use settings::{NewsletterSettings, DEFAULT_CONFIRMATION_MESSAGE, EMAIL_PLACEHOLDER};
pub use subscriber_email::SubscriberEmail;
