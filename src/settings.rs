use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::err_context::{ErrorContext, ErrorContextExt};

static DEFAULT_ENV_NAME: &str = "default";
static LOCAL_ENV_NAME: &str = "local";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub verifier: VerifierSettings,
    pub tracing: TracingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifierSettings {
    /// HS256 secret shared with the token issuer.
    pub secret: Secret<String>,
    /// Tolerated clock skew, in seconds, when checking token expiry.
    pub leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracingSettings {
    pub level: String,
}

impl Settings {
    /// Build the settings by merging, in order: the default
    /// configuration file, an optional profile file, an optional local
    /// file, and environment variables prefixed with `CONFIRMATION`.
    pub fn load(config_dir: &Path, profile: Option<&str>) -> Result<Settings, Error> {
        let mut builder =
            Config::builder().add_source(File::from(config_dir.join(DEFAULT_ENV_NAME)));

        if let Some(profile) = profile {
            builder = builder.add_source(File::from(config_dir.join(profile)).required(false));
        }

        // Local overrides, not checked in to git.
        builder = builder
            .add_source(File::from(config_dir.join(LOCAL_ENV_NAME)).required(false))
            .add_source(
                Environment::with_prefix("CONFIRMATION")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder
            .build()
            .context("Could not merge configuration")?
            .try_deserialize()
            .context("Could not deserialize configuration")
            .map_err(|err| err.into())
    }
}

#[derive(Debug)]
pub enum Error {
    Configuration {
        context: String,
        source: ConfigError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { context, source } => {
                write!(
                    fmt,
                    "Could not create configuration: {context} | source: {source}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl<C: Into<String>> From<ErrorContext<C, ConfigError>> for Error {
    fn from(ctx: ErrorContext<C, ConfigError>) -> Error {
        Error::Configuration {
            context: ctx.0.into(),
            source: ctx.1,
        }
    }
}
