//! # Flight Row Store
//!
//! Persists flight records as rows of a spreadsheet. The adapter in this
//! module only knows about ranges and rows; the transport lives behind the
//! [`SheetClient`] trait so the same adapter runs against Google Sheets in
//! production and against [`memory::MemorySheet`] in tests and local runs.
//!
//! ## Layout
//!
//! Row 1 holds a header, every following row one record, in five columns:
//! phone number, departure airport, arrival date, arrival time, timestamp.
//!
//! ## Guarantees
//!
//! None beyond what the sheet itself gives. Appends are not deduplicated or
//! retried, concurrent appends may interleave in any order, and the
//! positional `id` handed out by [`FlightStore::list_all`] changes whenever
//! rows are inserted or deleted outside this system.

pub mod memory;
pub mod rows;
pub mod sheets;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use common::FlightRecord;
use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{Config, ConfigError, StoreKind};
use crate::credentials::ServiceAccountCredentials;

use self::memory::MemorySheet;
use self::rows::{record_from_row, row_from_record, HEADER, LAST_COLUMN};
use self::sheets::GoogleSheetsClient;

/// Errors raised while talking to the row store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request to the sheet API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not sign the service-account token request: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("authentication with the sheet API failed: {0}")]
    Auth(String),

    #[error("sheet API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid sheet range: {0}")]
    InvalidRange(String),

    #[error("row store unavailable: {0}")]
    Unavailable(String),
}

/// Minimal value-range operations of a spreadsheet.
///
/// Ranges use A1 notation including the sheet name (`Sheet1!A:E`). Rows are
/// returned as strings with trailing empty cells and rows omitted, the way
/// the Sheets API reports them.
#[async_trait]
pub trait SheetClient: Send + Sync {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, StoreError>;

    /// Appends `rows` after the last non-empty row of the table in `range`.
    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError>;

    /// Overwrites the cells starting at the top-left corner of `range`.
    async fn update_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError>;
}

/// Outcome of [`FlightStore::ensure_header`]. Callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderInit {
    AlreadyPresent,
    Written,
    Failed,
}

#[derive(Clone)]
pub struct FlightStore {
    sheet: Arc<dyn SheetClient>,
    sheet_name: String,
}

impl std::fmt::Debug for FlightStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightStore")
            .field("sheet_name", &self.sheet_name)
            .finish_non_exhaustive()
    }
}

impl FlightStore {
    pub fn new(sheet: Arc<dyn SheetClient>, sheet_name: impl Into<String>) -> Self {
        Self {
            sheet,
            sheet_name: sheet_name.into(),
        }
    }

    /// Builds the store selected by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let sheet: Arc<dyn SheetClient> = match config.store {
            StoreKind::Memory => {
                info!("using in-memory row store; rows are lost on restart");
                Arc::new(MemorySheet::new())
            }
            StoreKind::Sheets => {
                let spreadsheet_id = config.spreadsheet_id().ok_or(ConfigError::Invalid {
                    message: "spreadsheet_id is required for the sheets store".to_string(),
                })?;
                let credentials = ServiceAccountCredentials::from_config(config)?;
                info!(
                    "using Google Sheets row store (spreadsheet {}, sheet {})",
                    spreadsheet_id, config.sheet_name
                );
                Arc::new(GoogleSheetsClient::new(spreadsheet_id, credentials)?)
            }
        };
        Ok(Self::new(sheet, config.sheet_name.clone()))
    }

    fn data_range(&self) -> String {
        format!("{}!A:{}", self.sheet_name, LAST_COLUMN)
    }

    fn header_range(&self) -> String {
        format!("{}!A1:{}1", self.sheet_name, LAST_COLUMN)
    }

    /// Reads every record below the header row.
    pub async fn list_all(&self) -> Result<Vec<FlightRecord>, StoreError> {
        let rows = self.sheet.get_values(&self.data_range()).await?;
        if rows.len() <= 1 {
            return Ok(Vec::new());
        }

        let records = rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| record_from_row(index + 1, row))
            .collect();
        Ok(records)
    }

    /// Appends `record` as one new row stamped with the current time.
    pub async fn append(&self, record: &FlightRecord) -> Result<(), StoreError> {
        if record.has_return_leg() {
            debug!(
                "return-leg fields for {} are not part of the sheet layout and were not stored",
                record.phone_number
            );
        }
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let row = row_from_record(record, &timestamp);
        self.sheet.append_values(&self.data_range(), vec![row]).await
    }

    /// Writes the header row if the first row is empty.
    ///
    /// Never fails the caller: any error is logged and reported as
    /// [`HeaderInit::Failed`].
    pub async fn ensure_header(&self) -> HeaderInit {
        let range = self.header_range();
        let current = match self.sheet.get_values(&range).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("error reading header row {}: {}", range, e);
                return HeaderInit::Failed;
            }
        };

        if current.first().is_some_and(|row| !row.is_empty()) {
            return HeaderInit::AlreadyPresent;
        }

        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        match self.sheet.update_values(&range, vec![header]).await {
            Ok(()) => {
                info!("wrote header row to {}", range);
                HeaderInit::Written
            }
            Err(e) => {
                warn!("error writing header row {}: {}", range, e);
                HeaderInit::Failed
            }
        }
    }
}
