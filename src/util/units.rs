//! Units formatting and conversion utilities
//!
//! Provides functions for human-readable formatting of durations,
//! iteration counts, and iteration throughput.

use std::time::Duration;

/// Format duration into human-readable string
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use corb::util::units::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 3600 {
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if total_secs >= 60 {
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{}m {}s", minutes, seconds)
    } else if total_secs > 0 {
        if millis > 0 {
            format!("{}.{:02}s", total_secs, millis / 10)
        } else {
            format!("{}s", total_secs)
        }
    } else {
        format!("{}ms", millis)
    }
}

/// Format a counter with thousands separators
///
/// # Examples
/// ```
/// use corb::util::units::format_count;
///
/// assert_eq!(format_count(950), "950");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}

/// Calculate iteration throughput from a counter and duration
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use corb::util::units::calculate_iterations_per_second;
///
/// let rate = calculate_iterations_per_second(1000, Duration::from_secs(2));
/// assert!((rate - 500.0).abs() < 0.01);
/// ```
pub fn calculate_iterations_per_second(iterations: u64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }

    iterations as f64 / duration.as_secs_f64()
}

/// Format an iteration rate with appropriate units
///
/// # Examples
/// ```
/// use corb::util::units::format_rate;
///
/// assert_eq!(format_rate(1500.0), "1.5K iter/s");
/// assert_eq!(format_rate(2500000.0), "2.5M iter/s");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate >= 1_000_000.0 {
        format!("{:.1}M iter/s", rate / 1_000_000.0)
    } else if rate >= 1_000.0 {
        format!("{:.1}K iter/s", rate / 1_000.0)
    } else {
        format!("{:.0} iter/s", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m 1s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(25000), "25,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_calculate_iterations_per_second() {
        let rate = calculate_iterations_per_second(1000, Duration::from_secs(1));
        assert!((rate - 1000.0).abs() < 0.01);

        let rate = calculate_iterations_per_second(500, Duration::from_millis(500));
        assert!((rate - 1000.0).abs() < 0.01);

        assert_eq!(calculate_iterations_per_second(1000, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(500.0), "500 iter/s");
        assert_eq!(format_rate(1500.0), "1.5K iter/s");
        assert_eq!(format_rate(2500000.0), "2.5M iter/s");
    }
}
