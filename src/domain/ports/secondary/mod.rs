pub mod subscription_confirmer;
pub mod token_verifier;

pub use subscription_confirmer::SubscriptionConfirmer;
pub use token_verifier::TokenVerifier;

#[cfg(test)]
pub use subscription_confirmer::MockSubscriptionConfirmer;

#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
