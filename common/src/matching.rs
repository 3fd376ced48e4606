//! Travel-companion matching.
//!
//! Given the list of submitted flights and the viewer's own flight (the
//! pivot), split the list into companions and everyone else. A candidate is a
//! companion when it departs from the same airport, or when it arrives on the
//! same day within [`ARRIVAL_WINDOW_MINUTES`] of the pivot. Records sharing the
//! pivot's phone number are the viewer's own and appear in neither list.

use chrono::NaiveDateTime;

use crate::model::flight::FlightRecord;

/// Largest arrival gap, in whole minutes, that still counts as travelling together.
pub const ARRIVAL_WINDOW_MINUTES: i64 = 30;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Result of [`partition`]. Both lists keep the input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Companions<'a> {
    pub matches: Vec<&'a FlightRecord>,
    pub others: Vec<&'a FlightRecord>,
}

impl Companions<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.others.is_empty()
    }

    /// Title for the `others` list: it only reads as "other" when a
    /// companion list is shown above it.
    pub fn others_heading(&self) -> &'static str {
        if self.matches.is_empty() {
            "All Attendees"
        } else {
            "Other Attendees"
        }
    }
}

/// Splits `flights` into companions of `pivot` and the remaining attendees.
pub fn partition<'a>(flights: &'a [FlightRecord], pivot: &FlightRecord) -> Companions<'a> {
    let mut companions = Companions::default();
    for candidate in flights {
        if is_self(candidate, pivot) {
            continue;
        }
        if is_companion(candidate, pivot) {
            companions.matches.push(candidate);
        } else {
            companions.others.push(candidate);
        }
    }
    companions
}

/// The matching predicate, without self-exclusion.
pub fn is_companion(candidate: &FlightRecord, pivot: &FlightRecord) -> bool {
    let same_airport = !candidate.departure_airport.is_empty()
        && candidate.departure_airport == pivot.departure_airport;
    if same_airport {
        return true;
    }

    let same_day = candidate.arrival_date == pivot.arrival_date;
    same_day && close_in_time(candidate, pivot)
}

fn is_self(candidate: &FlightRecord, pivot: &FlightRecord) -> bool {
    candidate.phone_number == pivot.phone_number
}

fn close_in_time(candidate: &FlightRecord, pivot: &FlightRecord) -> bool {
    if candidate.arrival_time.is_empty() || pivot.arrival_time.is_empty() {
        return false;
    }
    match (arrival_instant(candidate), arrival_instant(pivot)) {
        (Some(a), Some(b)) => (a - b).num_minutes().abs() <= ARRIVAL_WINDOW_MINUTES,
        _ => false,
    }
}

/// Combines the arrival date and time into a single instant, if both parse.
pub fn arrival_instant(record: &FlightRecord) -> Option<NaiveDateTime> {
    let combined = format!("{}T{}", record.arrival_date.trim(), record.arrival_time.trim());
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&combined, format).ok())
}
