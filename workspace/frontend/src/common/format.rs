//! Display-value formatting shared by the dashboard components.

use chrono::NaiveDate;

/// Percentage with one decimal digit and a trailing `%`.
pub fn percent1(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Two-decimal fixed display, used for the MSE card.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Signed coefficient with four decimals; strictly positive values get a
/// leading `+`.
pub fn signed4(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.4}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Magnitude bar width in percent: `min(|coefficient| * 20, 100)`.
pub fn bar_width(coefficient: f64) -> f64 {
    (coefficient.abs() * 20.0).min(100.0)
}

/// Chart axis label: `YYYY-MM-DD` wire dates become short dates, anything
/// else renders verbatim.
pub fn short_date(raw: &str) -> String {
    match raw.parse::<NaiveDate>() {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_has_one_decimal_and_suffix() {
        assert_eq!(percent1(0.67 * 100.0), "67.0%");
        assert_eq!(percent1(61.2), "61.2%");
        assert_eq!(percent1(100.0), "100.0%");
        assert_eq!(percent1(0.0), "0.0%");
    }

    #[test]
    fn test_fixed2() {
        assert_eq!(fixed2(12.34), "12.34");
        assert_eq!(fixed2(12.345), "12.35");
        assert_eq!(fixed2(0.0), "0.00");
    }

    #[test]
    fn test_signed4_leading_plus_only_when_positive() {
        assert_eq!(signed4(0.8421), "+0.8421");
        assert_eq!(signed4(-0.015), "-0.0150");
        assert_eq!(signed4(0.0), "0.0000");
    }

    #[test]
    fn test_bar_width_scaling() {
        assert!((bar_width(-0.015) - 0.3).abs() < 1e-9);
        assert!((bar_width(2.0) - 40.0).abs() < 1e-9);
        assert_eq!(bar_width(5.0), 100.0);
        assert_eq!(bar_width(-6.0), 100.0);
        assert_eq!(bar_width(250.0), 100.0);
    }

    #[test]
    fn test_short_date_projection() {
        assert_eq!(short_date("2024-01-15"), "1/15/2024");
        assert_eq!(short_date("2024-11-03"), "11/3/2024");
        // Anything the backend sends that is not a plain date stays as-is.
        assert_eq!(short_date("not-a-date"), "not-a-date");
        assert_eq!(short_date(""), "");
    }
}
