//! Playback clock formatting.

/// Format a position in seconds as `mm:ss`.
///
/// Minutes are not wrapped into hours. Non-finite and negative positions
/// render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(5.9), "00:05");
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(600.4), "10:00");
        assert_eq!(format_time(6000.0), "100:00");
    }

    #[test]
    fn test_format_time_invalid_input() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }
}
