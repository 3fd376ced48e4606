//! Mapping between `FlightRecord` and sheet rows.

use common::FlightRecord;
use log::debug;

/// Header written to row 1 of an empty sheet.
pub const HEADER: [&str; 5] = [
    "WhatsApp Number",
    "Departure Airport",
    "Arrival Date",
    "Arrival Time",
    "Timestamp",
];

/// Rightmost column of the record layout.
pub const LAST_COLUMN: char = 'E';

const PHONE: usize = 0;
const DEPARTURE: usize = 1;
const ARRIVAL_DATE: usize = 2;
const ARRIVAL_TIME: usize = 3;
const TIMESTAMP: usize = 4;

/// Builds the record stored in spreadsheet row `row_number` (1-based).
///
/// Missing cells become empty strings; a missing timestamp becomes `None`.
pub fn record_from_row(row_number: usize, row: &[String]) -> FlightRecord {
    if row.len() < HEADER.len() {
        debug!(
            "row {} has {} of {} columns; padding with empty values",
            row_number,
            row.len(),
            HEADER.len()
        );
    }

    let cell = |index: usize| row.get(index).cloned().unwrap_or_default();

    FlightRecord {
        id: Some(row_number.to_string()),
        phone_number: cell(PHONE),
        departure_airport: cell(DEPARTURE),
        arrival_date: cell(ARRIVAL_DATE),
        arrival_time: cell(ARRIVAL_TIME),
        timestamp: Some(cell(TIMESTAMP)).filter(|t| !t.is_empty()),
        ..FlightRecord::default()
    }
}

/// Row appended for `record`, in column order, ending with `timestamp`.
pub fn row_from_record(record: &FlightRecord, timestamp: &str) -> Vec<String> {
    vec![
        record.phone_number.clone(),
        record.departure_airport.clone(),
        record.arrival_date.clone(),
        record.arrival_time.clone(),
        timestamp.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn maps_full_row() {
        let row = strings(&["+1", "JFK", "2025-09-10", "14:00", "2025-08-01T10:00:00.000Z"]);
        let record = record_from_row(7, &row);
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.phone_number, "+1");
        assert_eq!(record.arrival_time, "14:00");
        assert_eq!(record.timestamp.as_deref(), Some("2025-08-01T10:00:00.000Z"));
        assert_eq!(record.return_date, None);
    }

    #[test]
    fn empty_row_yields_empty_fields() {
        let record = record_from_row(3, &[]);
        assert_eq!(record.phone_number, "");
        assert_eq!(record.departure_airport, "");
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn row_keeps_column_order_and_ends_with_timestamp() {
        let mut record = FlightRecord::new("+1", "JFK", "2025-09-10", "14:00");
        record.destination_airport = Some("BCN".into());
        let row = row_from_record(&record, "ts");
        assert_eq!(row, strings(&["+1", "JFK", "2025-09-10", "14:00", "ts"]));
        assert_eq!(row.len(), HEADER.len());
    }
}
