use serde::Serialize;
use std::fmt;
use validator::validate_email;

/// A validated subscriber email address.
///
/// The only way to get hold of a `SubscriberEmail` is through
/// [`SubscriberEmail::try_from`], so holding one is proof that the
/// underlying string passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = String;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if validate_email(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{email} is not a valid subscriber email"))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use speculoos::prelude::*;

    use super::SubscriberEmail;

    #[test]
    fn valid_email_is_accepted() {
        let email: String = SafeEmail().fake();
        assert_that(&SubscriberEmail::try_from(email)).is_ok();
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_that(&SubscriberEmail::try_from(String::new())).is_err();
    }

    #[test]
    fn email_missing_at_symbol_is_rejected() {
        let email = "ursula.example.com".to_string();
        assert_that(&SubscriberEmail::try_from(email)).is_err();
    }

    #[test]
    fn email_missing_subject_is_rejected() {
        let email = "@example.com".to_string();
        assert_that(&SubscriberEmail::try_from(email)).is_err();
    }

    #[test]
    fn display_round_trips_the_input() {
        let email = SubscriberEmail::try_from("a@example.com".to_string()).unwrap();
        assert_that(&email.to_string()).is_equal_to("a@example.com".to_string());
    }
}
