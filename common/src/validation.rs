//! Presence checks applied by the submit endpoint before a record is appended.
//!
//! Only presence is checked. Phone-number shape, airport-code charset and
//! date/time formats are accepted as-is.

use thiserror::Error;

use crate::model::flight::FlightRecord;

/// A submission lacked one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// JSON names of the missing fields, in declaration order.
    pub missing: Vec<&'static str>,
}

/// Rejects a record whose phone number, departure airport, arrival date or
/// arrival time is absent, empty or whitespace-only.
pub fn validate_submission(record: &FlightRecord) -> Result<(), ValidationError> {
    let required = [
        ("phoneNumber", &record.phone_number),
        ("departureAirport", &record.departure_airport),
        ("arrivalDate", &record.arrival_date),
        ("arrivalTime", &record.arrival_time),
    ];

    let missing: Vec<&'static str> = required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
