//! Client-side state for one viewer of the flight board.
//!
//! The browser app feeds every network outcome into a [`ViewerSession`] and
//! renders from it. A successful submission makes the submitted record the
//! pivot; the caller is then expected to re-fetch the list. A failed
//! submission leaves the pivot untouched.

use crate::matching::{partition, Companions};
use crate::model::flight::FlightRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerSession {
    flights: Vec<FlightRecord>,
    pivot: Option<FlightRecord>,
    loading: bool,
    last_error: Option<String>,
    submissions: u32,
}

impl ViewerSession {
    /// A fresh session is loading until the first listing arrives.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn pivot(&self) -> Option<&FlightRecord> {
        self.pivot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of successful submissions in this session.
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// A good listing replaces the old one and clears any earlier error.
    pub fn listing_loaded(&mut self, flights: Vec<FlightRecord>) {
        self.flights = flights;
        self.loading = false;
        self.last_error = None;
    }

    /// A failed refresh keeps the last good listing on screen.
    pub fn listing_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
    }

    pub fn submission_succeeded(&mut self, record: FlightRecord) {
        self.pivot = Some(record);
        self.last_error = None;
        self.submissions += 1;
    }

    pub fn submission_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Splits the current listing against the pivot. Without a pivot every
    /// record is listed under `others`.
    pub fn companions(&self) -> Companions<'_> {
        match &self.pivot {
            Some(pivot) => partition(&self.flights, pivot),
            None => Companions {
                matches: Vec::new(),
                others: self.flights.iter().collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<FlightRecord> {
        vec![
            FlightRecord::new("+1", "JFK", "2025-09-10", "14:00"),
            FlightRecord::new("+2", "JFK", "2025-09-11", "09:00"),
            FlightRecord::new("+3", "LAX", "2025-09-10", "18:00"),
        ]
    }

    #[test]
    fn starts_loading_without_pivot() {
        let session = ViewerSession::new();
        assert!(session.is_loading());
        assert!(session.pivot().is_none());
        assert!(session.companions().is_empty());
    }

    #[test]
    fn without_pivot_everyone_is_other() {
        let mut session = ViewerSession::new();
        session.listing_loaded(board());
        assert!(!session.is_loading());
        let split = session.companions();
        assert!(split.matches.is_empty());
        assert_eq!(split.others.len(), 3);
    }

    #[test]
    fn successful_submission_sets_pivot() {
        let mut session = ViewerSession::new();
        session.listing_loaded(board());
        session.submission_succeeded(FlightRecord::new("+1", "JFK", "2025-09-10", "14:00"));

        assert_eq!(session.submissions(), 1);
        let split = session.companions();
        assert_eq!(split.matches.len(), 1);
        assert_eq!(split.matches[0].phone_number, "+2");
        assert_eq!(split.others.len(), 1);
        assert_eq!(split.others[0].phone_number, "+3");
    }

    #[test]
    fn failed_submission_keeps_previous_pivot() {
        let mut session = ViewerSession::new();
        let first = FlightRecord::new("+1", "JFK", "2025-09-10", "14:00");
        session.submission_succeeded(first.clone());
        session.submission_failed("Failed to add flight");

        assert_eq!(session.pivot(), Some(&first));
        assert_eq!(session.last_error(), Some("Failed to add flight"));
        assert_eq!(session.submissions(), 1);
    }

    #[test]
    fn failed_refresh_keeps_listing() {
        let mut session = ViewerSession::new();
        session.listing_loaded(board());
        session.listing_failed("Failed to read flights");
        assert_eq!(session.flights().len(), 3);
        assert_eq!(session.last_error(), Some("Failed to read flights"));
    }

    #[test]
    fn successful_refresh_clears_earlier_error() {
        let mut session = ViewerSession::new();
        session.listing_failed("Failed to read flights");
        session.listing_loaded(board());
        assert_eq!(session.last_error(), None);
        assert_eq!(session.flights().len(), 3);
    }
}
