use serde::{Deserialize, Deserializer, Serialize};

/// One attendee's flight, as submitted through the form and as read back from
/// the row store.
///
/// The four required fields default to an empty string when absent from the
/// JSON payload, or when sent as `null`, so that a missing field surfaces as
/// a `ValidationError` rather than a deserialization failure. The return-leg fields are explicitly
/// optional: `None` means the submitter did not provide them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Positional handle derived from the row offset (row 2 is `"2"`).
    ///
    /// Not stable: any external insert or delete in the sheet reassigns it.
    /// Only use it as a rendering key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Messaging contact including the international prefix.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,

    /// Three-letter uppercase departure airport code.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub departure_airport: String,

    /// ISO date of arrival (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arrival_date: String,

    /// Local arrival time (`HH:MM`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arrival_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_airport: Option<String>,

    /// RFC 3339 submission time assigned by the server on append.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FlightRecord {
    pub fn new(
        phone_number: impl Into<String>,
        departure_airport: impl Into<String>,
        arrival_date: impl Into<String>,
        arrival_time: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            departure_airport: departure_airport.into(),
            arrival_date: arrival_date.into(),
            arrival_time: arrival_time.into(),
            ..Self::default()
        }
    }

    /// True when any of the return-leg fields carries a value.
    pub fn has_return_leg(&self) -> bool {
        [&self.return_date, &self.return_time, &self.destination_airport]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// Compares the fields a submitter controls, ignoring the store-assigned
    /// `id` and `timestamp`.
    pub fn same_submission(&self, other: &FlightRecord) -> bool {
        self.phone_number == other.phone_number
            && self.departure_airport == other.departure_airport
            && self.arrival_date == other.arrival_date
            && self.arrival_time == other.arrival_time
    }
}
