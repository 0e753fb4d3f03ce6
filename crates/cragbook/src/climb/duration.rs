//! Free-text session durations ("1h 20m", "45m", "90").

/// Parse a duration into minutes.
///
/// Accepts hour and minute parts in any combination, with or without a
/// space between them, and a bare number meaning minutes. Values that do
/// not fit in a `u32` of minutes are rejected.
pub fn parse_duration_minutes(text: &str) -> Option<u32> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }
    if let Ok(minutes) = text.parse::<u32>() {
        return Some(minutes);
    }

    let mut total = 0u32;
    let mut digits = String::new();
    let mut matched = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            'h' | 'm' => {
                let value: u32 = digits.parse().ok()?;
                digits.clear();
                let minutes = if ch == 'h' { value.checked_mul(60)? } else { value };
                total = total.checked_add(minutes)?;
                matched = true;
            }
            // unit suffixes: "min", "hrs", "hours"
            'i' | 'n' | 's' | 'r' | 'o' | 'u' if digits.is_empty() => {}
            ' ' => {}
            _ => return None,
        }
    }

    (matched && digits.is_empty()).then_some(total)
}

/// Format minutes as "1h 20m" / "45m".
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_minutes("1h 20m"), Some(80));
        assert_eq!(parse_duration_minutes("1h20m"), Some(80));
        assert_eq!(parse_duration_minutes("45m"), Some(45));
        assert_eq!(parse_duration_minutes("45 min"), Some(45));
        assert_eq!(parse_duration_minutes("2h"), Some(120));
        assert_eq!(parse_duration_minutes("2 hrs"), Some(120));
        assert_eq!(parse_duration_minutes("1 hour 5 mins"), Some(65));
        assert_eq!(parse_duration_minutes("90"), Some(90));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration_minutes(""), None);
        assert_eq!(parse_duration_minutes("a while"), None);
        assert_eq!(parse_duration_minutes("1h 20"), None);
        assert_eq!(parse_duration_minutes("h"), None);
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert_eq!(parse_duration_minutes("99999999h"), None);
        assert_eq!(parse_duration_minutes("4294967295m 1m"), None);
        assert_eq!(parse_duration_minutes("99999999999"), None);
        assert_eq!(parse_duration_minutes("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(80), "1h 20m");
    }
}
