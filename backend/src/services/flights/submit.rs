//! # Flight Submission Service
//!
//! Backend logic for `POST /api/flights`.
//!
//! ## Workflow
//!
//! 1.  **Payload**: the body is deserialized into a `FlightRecord`. Malformed
//!     JSON is answered by the shared `JsonConfig` error handler.
//! 2.  **Validation**: `validate_submission` checks the four required fields.
//!     Nothing is written when any of them is missing.
//! 3.  **Append**: the record is appended as one row with a server timestamp.
//!     There is no duplicate check and no retry.
//! 4.  **HTTP Response**: `{"success": true}`.

use actix_web::{web, HttpResponse};
use common::requests::SubmitAck;
use common::{validate_submission, FlightRecord};
use log::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Actix web handler for `POST /api/flights`.
///
/// # Arguments
/// * `payload` - The submitted flight, as JSON.
///
/// # Returns
/// - `200 OK` with `{"success": true}` once the row is appended.
/// - `400 Bad Request` with `{"error": "Missing required fields: ..."}`.
/// - `500 Internal Server Error` with `{"error": "Failed to add flight"}` when
///   the append fails.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<FlightRecord>,
) -> Result<HttpResponse, ApiError> {
    save_flight(&state, &payload).await?;
    Ok(HttpResponse::Ok().json(SubmitAck::ok()))
}

/// Validates `record` and appends it unchanged. Nothing is written when
/// validation fails.
async fn save_flight(state: &AppState, record: &FlightRecord) -> Result<(), ApiError> {
    validate_submission(record)?;
    state
        .store
        .append(record)
        .await
        .map_err(ApiError::AppendFailed)?;
    info!(
        "flight added: {} from {} arriving {} {}",
        record.phone_number, record.departure_airport, record.arrival_date, record.arrival_time
    );
    Ok(())
}
