//! Google Sheets v4 client authenticated as a service account.
//!
//! Authentication follows the OAuth 2.0 JWT bearer flow: a JWT signed with the
//! service account's RSA key is exchanged for a short-lived access token,
//! which is cached until shortly before it expires.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::debug;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use super::{SheetClient, StoreError};
use crate::credentials::ServiceAccountCredentials;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each signed assertion.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Tokens are refreshed this long before Google says they expire.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cells are written verbatim so that values such as `+34600111222` are not
/// reinterpreted as numbers or formulas.
const VALUE_INPUT_OPTION: &str = "RAW";

#[derive(Debug)]
pub struct GoogleSheetsClient {
    http: Client,
    spreadsheet_id: String,
    credentials: ServiceAccountCredentials,
    token: Mutex<Option<AccessToken>>,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    refresh_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
struct ValueRangeBody {
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    error: GoogleError,
}

#[derive(Deserialize)]
struct GoogleError {
    message: String,
}

impl GoogleSheetsClient {
    /// Fails only when the HTTP client cannot be built (for example when no
    /// TLS backend can be initialised).
    pub fn new(
        spreadsheet_id: impl Into<String>,
        credentials: ServiceAccountCredentials,
    ) -> Result<Self, StoreError> {
        let http = Client::builder()
            .user_agent(concat!("flightmates/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            spreadsheet_id: spreadsheet_id.into(),
            credentials,
            token: Mutex::new(None),
        })
    }

    /// URL of `…/spreadsheets/{id}/values/{range}{suffix}`, with the range
    /// percent-encoded as a single path segment.
    fn values_url(&self, range: &str, suffix: &str) -> Result<Url, StoreError> {
        let mut url = Url::parse(SHEETS_API)
            .map_err(|e| StoreError::InvalidRange(format!("bad API base {SHEETS_API}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidRange(format!("bad API base {SHEETS_API}")))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{range}{suffix}"));
        Ok(url)
    }

    async fn access_token(&self) -> Result<String, StoreError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Utc::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn fetch_token(&self) -> Result<AccessToken, StoreError> {
        let now = Utc::now();
        let claims = Claims {
            iss: &self.credentials.client_email,
            scope: SCOPE,
            aud: TOKEN_URL,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_TTL_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)?;

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(format!("token endpoint returned {status}: {body}")));
        }

        let token: TokenResponse = response.json().await?;
        debug!("obtained access token valid for {}s", token.expires_in);
        Ok(AccessToken {
            value: token.access_token,
            refresh_at: now + chrono::Duration::seconds(token.expires_in - TOKEN_REFRESH_MARGIN_SECS),
        })
    }

    async fn write(&self, url: Url, rows: Vec<Vec<String>>, append: bool) -> Result<(), StoreError> {
        let token = self.access_token().await?;
        let body = ValueRangeBody { values: rows };
        let request = if append {
            self.http.post(url)
        } else {
            self.http.put(url)
        };
        let response = request.bearer_auth(token).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SheetClient for GoogleSheetsClient {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, StoreError> {
        let url = self.values_url(range, "")?;
        let token = self.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;
        let body: ValueRange = check_status(response).await?.json().await?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError> {
        let mut url = self.values_url(range, ":append")?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION)
            .append_pair("insertDataOption", "INSERT_ROWS");
        self.write(url, rows, true).await
    }

    async fn update_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError> {
        let mut url = self.values_url(range, "")?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION);
        self.write(url, rows, false).await
    }
}

/// Converts a non-2xx response into [`StoreError::Api`], preferring the
/// message from Google's error envelope.
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GoogleErrorBody>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleSheetsClient {
        GoogleSheetsClient::new(
            "spreadsheet-123",
            ServiceAccountCredentials::new("bot@example.iam.gserviceaccount.com", "not-a-key"),
        )
        .unwrap()
    }

    #[test]
    fn new_keeps_spreadsheet_id_and_starts_without_token() {
        let client = client();
        assert_eq!(client.spreadsheet_id, "spreadsheet-123");
        assert!(client.token.try_lock().unwrap().is_none());
    }

    #[test]
    fn range_is_encoded_as_one_segment() {
        let url = client().values_url("Sheet 1!A:E", ":append").unwrap();
        assert!(url
            .as_str()
            .starts_with("https://sheets.googleapis.com/v4/spreadsheets/spreadsheet-123/values/"));
        assert!(url.as_str().contains("Sheet%201"));
        assert!(url.as_str().ends_with(":append"));
    }

    #[test]
    fn header_range_keeps_a1_punctuation() {
        let url = client().values_url("Sheet1!A1:E1", "").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/spreadsheet-123/values/Sheet1!A1:E1"
        );
    }

    #[test]
    fn cells_become_strings() {
        assert_eq!(cell_to_string(Value::from("JFK")), "JFK");
        assert_eq!(cell_to_string(Value::Null), "");
        assert_eq!(cell_to_string(Value::from(34600111222u64)), "34600111222");
    }

    #[actix_web::test]
    async fn invalid_key_fails_before_any_request() {
        let err = client().get_values("Sheet1!A:E").await.unwrap_err();
        assert!(matches!(err, StoreError::Token(_)));
    }

    #[test]
    fn google_error_envelope_is_parsed() {
        let body = r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#;
        let parsed: GoogleErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "The caller does not have permission");
    }
}
