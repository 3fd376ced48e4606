//! Types and rules shared by the flightmates server and the browser client.
//!
//! The server uses the model and the validator; the client uses the model, the
//! companion matcher and the viewer session. Nothing in here performs I/O.

pub mod display;
pub mod matching;
pub mod model;
pub mod requests;
pub mod session;
pub mod validation;

pub use model::flight::FlightRecord;
pub use validation::{validate_submission, ValidationError};
