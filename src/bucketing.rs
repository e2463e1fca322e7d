use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// Day key for `timestamp` if its local calendar year and month match.
pub fn bucket_key(timestamp: &DateTime<Utc>, year: i32, month: u32) -> Option<String> {
    bucket_key_in(&Local, timestamp, year, month)
}

pub fn bucket_key_in<Tz: TimeZone>(
    tz: &Tz,
    timestamp: &DateTime<Utc>,
    year: i32,
    month: u32,
) -> Option<String> {
    let local = timestamp.with_timezone(tz).date_naive();
    if local.year() == year && local.month() == month {
        Some(date_key(local))
    } else {
        None
    }
}

/// Same as [`bucket_key`] for a raw RFC 3339 string. Unparseable input never matches.
pub fn bucket_key_str(raw: &str, year: i32, month: u32) -> Option<String> {
    parse_timestamp(raw).and_then(|timestamp| bucket_key(&timestamp, year, month))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn day_key(timestamp: &DateTime<Utc>) -> String {
    day_key_in(&Local, timestamp)
}

pub fn day_key_in<Tz: TimeZone>(tz: &Tz, timestamp: &DateTime<Utc>) -> String {
    date_key(timestamp.with_timezone(tz).date_naive())
}

pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    day_key(timestamp)
}

pub fn format_date_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Value for a `datetime-local` form input.
pub fn to_local_input(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw).expect("valid timestamp")
    }

    #[test]
    fn bucket_key_pads_month_and_day() {
        let ts = utc("2024-03-05T12:00:00Z");
        assert_eq!(
            bucket_key_in(&Utc, &ts, 2024, 3).as_deref(),
            Some("2024-03-05")
        );
    }

    #[test]
    fn bucket_key_rejects_other_months() {
        let ts = utc("2024-03-05T12:00:00Z");
        assert_eq!(bucket_key_in(&Utc, &ts, 2024, 4), None);
        assert_eq!(bucket_key_in(&Utc, &ts, 2023, 3), None);
    }

    #[test]
    fn bucket_key_uses_the_given_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let ts = utc("2024-01-31T20:00:00Z");
        assert_eq!(bucket_key_in(&tokyo, &ts, 2024, 1), None);
        assert_eq!(
            bucket_key_in(&tokyo, &ts, 2024, 2).as_deref(),
            Some("2024-02-01")
        );
        assert_eq!(day_key_in(&tokyo, &ts), "2024-02-01");
    }

    #[test]
    fn malformed_timestamps_never_match() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(bucket_key_str("2024-13-45T99:00:00Z", 2024, 1), None);
    }

    #[test]
    fn local_helpers_agree_on_the_day() {
        let ts = utc("2024-07-04T15:42:00Z");
        let local = ts.with_timezone(&Local);
        let key = day_key(&ts);
        assert_eq!(
            bucket_key(&ts, local.year(), local.month()).as_deref(),
            Some(key.as_str())
        );
        assert_eq!(format_date(&ts), key);
        assert!(format_date_time(&ts).starts_with(&key));
        assert_eq!(format_date_time(&ts).len(), "2024-07-04 15:42".len());
        assert_eq!(to_local_input(&ts).replacen('T', " ", 1), format_date_time(&ts));
    }

    #[test]
    fn parse_timestamp_normalizes_offsets() {
        let ts = utc("2024-06-01T09:30:00+09:00");
        assert_eq!(ts, utc("2024-06-01T00:30:00Z"));
    }
}
