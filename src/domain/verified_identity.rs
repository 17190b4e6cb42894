use crate::domain::SubscriberEmail;

/// The email address a confirmation token attests to.
///
/// Only produced by a successful token verification; it is never stored
/// by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub email: SubscriberEmail,
}
