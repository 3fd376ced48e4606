//! Presentation helpers for phone numbers, dates and times.

use chrono::{NaiveDate, NaiveTime};

/// Deep link that opens a WhatsApp chat with `phone`. Only digits are kept.
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

/// Phone number with a leading `+`, added when the submitter left it out.
pub fn display_phone(phone: &str) -> String {
    if phone.starts_with('+') {
        phone.to_string()
    } else {
        format!("+{phone}")
    }
}

/// `2025-09-10` → `Sep 10, 2025`. Unparseable input is returned unchanged.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `14:05` → `2:05 PM`. Unparseable input is returned unchanged.
pub fn format_time(time: &str) -> String {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time.to_string())
}

/// Normalises what the user typed into an airport field: uppercase, at most
/// three characters.
pub fn airport_code(input: &str) -> String {
    input.trim().to_uppercase().chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_strips_formatting() {
        assert_eq!(whatsapp_link("+34 600-111 222"), "https://wa.me/34600111222");
    }

    #[test]
    fn display_phone_adds_missing_prefix() {
        assert_eq!(display_phone("34600111222"), "+34600111222");
        assert_eq!(display_phone("+34600111222"), "+34600111222");
    }

    #[test]
    fn formats_dates_and_times() {
        assert_eq!(format_date("2025-09-10"), "Sep 10, 2025");
        assert_eq!(format_time("14:05"), "2:05 PM");
        assert_eq!(format_time("00:30"), "12:30 AM");
    }

    #[test]
    fn falls_back_to_raw_input() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_time("noon"), "noon");
    }

    #[test]
    fn airport_codes_are_uppercased_and_clipped() {
        assert_eq!(airport_code("jfk"), "JFK");
        assert_eq!(airport_code(" madrid"), "MAD");
        assert_eq!(airport_code(""), "");
    }
}
