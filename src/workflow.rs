use std::sync::Arc;
use uuid::Uuid;

use crate::domain::ports::secondary::{SubscriptionConfirmer, TokenVerifier};
use crate::domain::{ConfirmationOutcome, FailureReason};

pub type DynTokenVerifier = Arc<dyn TokenVerifier + Send + Sync>;
pub type DynSubscriptionConfirmer = Arc<dyn SubscriptionConfirmer + Send + Sync>;

/// Orchestrates the confirmation of a subscription.
///
/// The workflow holds no state of its own, so a single instance can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct ConfirmationWorkflow {
    verifier: DynTokenVerifier,
    confirmer: DynSubscriptionConfirmer,
}

impl ConfirmationWorkflow {
    pub fn new(verifier: DynTokenVerifier, confirmer: DynSubscriptionConfirmer) -> Self {
        Self {
            verifier,
            confirmer,
        }
    }

    /// Confirm a subscription with the token found in the request.
    ///
    /// The subscriber is confirmed if and only if the token verifies.
    /// One verification attempt, one confirmation attempt, no retries.
    #[tracing::instrument(
        name = "Confirming subscription with token",
        skip(self, token),
        fields(
            request_id = %Uuid::new_v4(),
        )
    )]
    pub async fn confirm(&self, token: Option<&str>) -> ConfirmationOutcome {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return ConfirmationOutcome::Failed(FailureReason::MissingToken);
            }
        };
        match self.verifier.verify(token).await {
            None => ConfirmationOutcome::Failed(FailureReason::InvalidToken),
            Some(identity) => {
                self.confirmer.confirm(&identity.email).await;
                tracing::info!("confirmed subscription for {}", identity.email);
                ConfirmationOutcome::Success
            }
        }
    }
}
