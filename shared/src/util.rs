/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Split a `YYYY-MM-DDTHH:MM` pickup string into its date and time halves.
///
/// The halves are opaque display strings; nothing here checks the calendar.
/// A missing time half yields an empty string.
pub fn split_datetime(value: &str) -> (String, String) {
    match value.split_once('T') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (value.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_datetime() {
        assert_eq!(
            split_datetime("2026-10-20T08:30"),
            ("2026-10-20".to_string(), "08:30".to_string())
        );
    }

    #[test]
    fn test_split_datetime_without_time() {
        assert_eq!(
            split_datetime("2026-10-20"),
            ("2026-10-20".to_string(), String::new())
        );
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
