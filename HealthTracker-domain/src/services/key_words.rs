use chrono::{DateTime, FixedOffset};

/// Date pattern of the key words. Hour and minute appear twice, once bare
/// and once as `hh:mm`, so both spellings are searchable.
pub const KEY_WORDS_DATE_FORMAT: &str = "%B %d, %Y %I %M %I:%M %p";

/// Build the search text of a record from its date and state label
pub fn build_key_words(record_date: &DateTime<FixedOffset>, state: &str) -> String {
    format!("{} {}", record_date.format(KEY_WORDS_DATE_FORMAT), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn test_key_words_format() {
        let date = offset(0).with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(
            build_key_words(&date, "Normal Blood Pressure"),
            "March 05, 2024 02 07 02:07 PM Normal Blood Pressure"
        );
    }

    #[test]
    fn test_key_words_use_owner_offset() {
        // 23:30 UTC on Dec 31 is already New Year in UTC+8
        let utc = offset(0).with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
        let local = utc.with_timezone(&offset(8));
        assert_eq!(
            build_key_words(&local, "Obesity"),
            "January 01, 2024 07 30 07:30 AM Obesity"
        );
    }

    #[test]
    fn test_key_words_end_with_label() {
        let date = offset(-5).with_ymd_and_hms(2022, 7, 19, 0, 0, 0).unwrap();
        for label in ["Alarmingly Low", "Hypertension Stage II (Very High)", "Underweight", ""] {
            let key_words = build_key_words(&date, label);
            assert!(key_words.ends_with(label));
            assert!(key_words.starts_with("July 19, 2022 12 00 12:00 AM"));
        }
    }
}
