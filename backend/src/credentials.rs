//! Service-account credentials for the Google Sheets API.
//!
//! Private keys pasted into environment files usually arrive with literal `\n`
//! sequences instead of line breaks, and sometimes still wrapped in the quotes
//! of the `.env` line. [`normalize_private_key`] undoes both.

use serde::Serialize;

use crate::config::{Config, ConfigError};

const PEM_HEADER: &str = "-----BEGIN";

#[derive(Clone)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
}

impl std::fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccountCredentials {
    pub fn new(client_email: impl Into<String>, raw_private_key: &str) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: normalize_private_key(raw_private_key),
        }
    }

    /// Reads and normalises the credentials held by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let email = non_empty(config.google_service_account_email.as_deref())
            .ok_or(ConfigError::MissingCredential("GOOGLE_SERVICE_ACCOUNT_EMAIL"))?;
        let key = non_empty(config.google_private_key.as_deref())
            .ok_or(ConfigError::MissingCredential("GOOGLE_PRIVATE_KEY"))?;
        Ok(Self::new(email, key))
    }
}

/// Strips one layer of surrounding double quotes, then turns every literal
/// `\n` into a line break.
pub fn normalize_private_key(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    unquoted.replace("\\n", "\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// What `GET /api/debug` reports about the configured credentials. Never
/// includes key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialReport {
    pub has_service_account_email: bool,
    pub has_private_key: bool,
    pub private_key_length: usize,
    pub contains_escaped_newlines: bool,
    pub contains_actual_newlines: bool,
    pub wrapped_in_quotes: bool,
    pub normalized_key_looks_like_pem: bool,
}

impl CredentialReport {
    pub fn inspect(config: &Config) -> Self {
        let email = non_empty(config.google_service_account_email.as_deref());
        let key = config.google_private_key.as_deref().unwrap_or_default();
        let normalized = normalize_private_key(key);

        Self {
            has_service_account_email: email.is_some(),
            has_private_key: !key.is_empty(),
            private_key_length: key.len(),
            contains_escaped_newlines: key.contains("\\n"),
            contains_actual_newlines: key.contains('\n'),
            wrapped_in_quotes: key.len() >= 2 && key.starts_with('"') && key.ends_with('"'),
            normalized_key_looks_like_pem: normalized.trim_start().starts_with(PEM_HEADER)
                && normalized.contains('\n'),
        }
    }
}
