use chrono::NaiveDate;

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a trip date for display.
/// ISO dates become "Oct 15, 2024"; anything else is shown as recorded.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        day.format("%b %d, %Y").to_string()
    } else {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Jane Smith", "JAN"));
        assert!(contains_ignore_case("Jane Smith", ""));
        assert!(!contains_ignore_case("Jane Smith", "doe"));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-10-05"), "Oct 05, 2024");
        assert_eq!(format_date("2024-10-05T09:30:00Z"), "Oct 05, 2024");
        assert_eq!(format_date("Spring 2025"), "Spring 2025");
        assert_eq!(format_date(""), "");
    }
}
