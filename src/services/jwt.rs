/// Confirmation token verification backed by JWT.
///
/// Tokens are issued elsewhere; this adapter only consumes them. They
/// are HS256 signed and carry the subscriber email in the `sub` claim.
use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::ports::secondary::TokenVerifier;
use crate::domain::{SubscriberEmail, VerifiedIdentity};
use crate::settings::VerifierSettings;

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &Secret<String>, leeway: u64) -> Self {
        let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
        // `Validation::new` requires the `exp` claim, so an unexpired
        // token cannot be forged by leaving the claim out.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway;
        Self { key, validation }
    }

    pub fn from_settings(settings: &VerifierSettings) -> Self {
        Self::new(&settings.secret, settings.leeway)
    }

    /// Verify `token` and extract the email it attests to.
    ///
    /// `decode` checks the signature before deserializing any claim, so
    /// a forged payload is never inspected. Every rejection cause maps
    /// to `None`; callers cannot tell a bad signature from an expired
    /// token or a malformed claim.
    pub fn verify_token(&self, token: &str) -> Option<VerifiedIdentity> {
        let data = match decode::<ConfirmationClaims>(token, &self.key, &self.validation) {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!("could not verify confirmation token: {err}");
                return None;
            }
        };
        let email = SubscriberEmail::try_from(data.claims.sub).ok()?;
        Some(VerifiedIdentity { email })
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Option<VerifiedIdentity> {
        self.verify_token(token)
    }
}
