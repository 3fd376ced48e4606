//! # Flight Service Module
//!
//! HTTP endpoints for reading and submitting attendee flights. Both handlers
//! are thin: they delegate to the row store held in `AppState` and translate
//! its outcome into an HTTP response.
//!
//! ## Sub-modules:
//! - `list`: Returns every stored flight as a JSON array.
//! - `submit`: Validates a submitted flight and appends it to the store.

mod list;
mod submit;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all flight endpoints.
const API_PATH: &str = "/api/flights";

/// Configures and returns the Actix `Scope` for the flight routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/flights`**:
///     - **Handler**: `list::process`
///     - **Description**: Makes sure the sheet has its header row, then returns
///       every stored record as a JSON array of `FlightRecord`. An empty sheet
///       yields `[]`. Store failures answer `500` with a generic message.
///
/// *   **`POST /api/flights`**:
///     - **Handler**: `submit::process`
///     - **Description**: Accepts a `FlightRecord` JSON object. Missing
///       required fields answer `400` and nothing is written; otherwise one
///       row is appended and `{"success": true}` is returned.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(submit::process))
}
