use chrono::{DateTime, NaiveDate};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// `2024-06-01` → `June 1, 2024`; anything unparseable is shown as given
pub fn format_date(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

/// RFC 3339 timestamp → `June 1, 2024 14:05`
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(timestamp) => timestamp.format("%B %-d, %Y %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-06-01"), "June 1, 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-06-01T14:05:00Z"), "June 1, 2024 14:05");
        assert_eq!(format_timestamp(""), "");
    }
}
