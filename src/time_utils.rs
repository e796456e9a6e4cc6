use chrono::{DateTime, Datelike, Days, NaiveDate};

/// Calendar date of a unix timestamp (seconds), interpreted in UTC.
pub fn unix_to_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

/// `YYYY-MM-DD` business day string as consumed by the chart engine.
pub fn iso_date(seconds: i64) -> Option<String> {
    unix_to_date(seconds).map(|date| date.format("%Y-%m-%d").to_string())
}

/// `April 5, 2021`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Sunday..Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// `April 4, 2021-April 10, 2021`
pub fn week_range_label(date: NaiveDate) -> String {
    let (start, end) = week_bounds(date);
    format!("{}-{}", long_date(start), long_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_first_of_january() {
        assert_eq!(iso_date(0).as_deref(), Some("1970-01-01"));
        // one second before midnight UTC stays on the same day
        assert_eq!(iso_date(86_399).as_deref(), Some("1970-01-01"));
        assert_eq!(iso_date(86_400).as_deref(), Some("1970-01-02"));
    }

    #[test]
    fn week_starts_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2021, 4, 4).unwrap();
        let (start, end) = week_bounds(sunday);
        assert_eq!(start, sunday);
        assert_eq!(end, NaiveDate::from_ymd_opt(2021, 4, 10).unwrap());
    }
}
