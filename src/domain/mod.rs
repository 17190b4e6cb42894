pub mod outcome;
pub mod ports;
pub mod subscriber_email;
pub mod verified_identity;

pub use outcome::{ConfirmationOutcome, FailureReason, OutcomeDisplay, Severity};
pub use subscriber_email::SubscriberEmail;
pub use verified_identity::VerifiedIdentity;
