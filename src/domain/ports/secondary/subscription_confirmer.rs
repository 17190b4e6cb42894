/// Interface to the service marking subscribers as confirmed.
use async_trait::async_trait;

use crate::domain::SubscriberEmail;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionConfirmer {
    /// Mark the subscriber identified by `email` as confirmed.
    ///
    /// Must be idempotent: confirming an already confirmed subscriber is
    /// a no-op, never an error. Implementations own their failure
    /// handling; the workflow does not observe a result.
    async fn confirm(&self, email: &SubscriberEmail);
}
