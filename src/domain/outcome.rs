use serde::Serialize;
use std::fmt;

/// Result of a confirmation request. One outcome per request, consumed
/// once by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfirmationOutcome {
    Success,
    Failed(FailureReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// No token was supplied with the request.
    MissingToken,
    /// A token was supplied but could not be verified. Bad signature,
    /// expiry and malformed claims are deliberately collapsed into this
    /// single reason so that nothing about the rejection leaks to the
    /// caller.
    InvalidToken,
}

/// Alert severity, mirrored by the presentation layer when it renders
/// the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Success,
    Danger,
}

/// User-facing text for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeDisplay {
    pub title: &'static str,
    pub message: &'static str,
    pub severity: Severity,
}

const SUCCESS: OutcomeDisplay = OutcomeDisplay {
    title: "Confirmation Success",
    message: "thanks, we have confirmed your subscription",
    severity: Severity::Success,
};

const MISSING_TOKEN: OutcomeDisplay = OutcomeDisplay {
    title: "Confirmation Failed",
    message: "token is required",
    severity: Severity::Danger,
};

const INVALID_TOKEN: OutcomeDisplay = OutcomeDisplay {
    title: "Confirmation Failed",
    message: "could not verify the token",
    severity: Severity::Danger,
};

impl ConfirmationOutcome {
    /// Lookup the display text for this outcome.
    ///
    /// Keeping the text in one table keyed by variant keeps the workflow
    /// free of presentation concerns.
    // TODO i18n: pick the table from the request locale.
    pub fn display(&self) -> OutcomeDisplay {
        match self {
            ConfirmationOutcome::Success => SUCCESS,
            ConfirmationOutcome::Failed(FailureReason::MissingToken) => MISSING_TOKEN,
            ConfirmationOutcome::Failed(FailureReason::InvalidToken) => INVALID_TOKEN,
        }
    }
}

impl fmt::Display for ConfirmationOutcome {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self.display();
        write!(fmt, "{}: {}", display.title, display.message)
    }
}
