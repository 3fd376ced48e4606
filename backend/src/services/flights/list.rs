//! # Flight Listing Service
//!
//! Backend logic for `GET /api/flights`.
//!
//! ## Workflow
//!
//! 1.  **Header check**: `ensure_header` writes the column titles into row 1
//!     of an empty sheet. Its outcome is ignored; a sheet that cannot be
//!     initialised may still be readable.
//! 2.  **Read**: every row below the header becomes a `FlightRecord` whose `id`
//!     is its row number.
//! 3.  **HTTP Response**: the records are returned as a JSON array, `[]` for an
//!     empty sheet.

use actix_web::{web, HttpResponse};
use common::FlightRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Actix web handler for `GET /api/flights`.
///
/// # Returns
/// - `200 OK` with a JSON array of `FlightRecord`.
/// - `500 Internal Server Error` with `{"error": "Failed to read flights"}` when
///   the row store cannot be read.
pub(crate) async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let flights = list_flights(&state).await?;
    Ok(HttpResponse::Ok().json(flights))
}

async fn list_flights(state: &AppState) -> Result<Vec<FlightRecord>, ApiError> {
    state.store.ensure_header().await;
    state.store.list_all().await.map_err(ApiError::ListFailed)
}
