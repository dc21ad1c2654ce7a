use chrono::{DateTime, NaiveDate};

/// Calendar date layout used for transaction dates and filter bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored calendar date, accepting plain `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}
