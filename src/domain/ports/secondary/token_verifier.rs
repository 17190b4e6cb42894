/// Interface to a service verifying confirmation tokens.
use async_trait::async_trait;

use crate::domain::VerifiedIdentity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier {
    /// Verify a confirmation token and return the identity it attests to.
    ///
    /// The token is attacker controlled. Implementations must check the
    /// signature before looking at any claim, and must collapse every
    /// rejection cause (forged, expired, malformed) into `None` rather
    /// than returning an error: an unverifiable token is an expected
    /// input, not a fault.
    ///
    /// Verification has no side effects; calling it repeatedly with the
    /// same token yields the same result.
    async fn verify(&self, token: &str) -> Option<VerifiedIdentity>;
}
