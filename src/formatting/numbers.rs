//! Number rendering for reports.
//!
//! Currency uses a `$` prefix, comma thousands separators and two decimals,
//! with the minus sign after the symbol (`$-1,250.00`). Percentages use one
//! decimal. Non-finite values render as `N/A`.

/// Label printed wherever a value is +/- infinity or NaN
pub const NOT_AVAILABLE: &str = "N/A";

/// Round to two decimal places, the same way `{:.2}` renders the value.
///
/// Rounding works on the exact decimal expansion of the stored value, so
/// 2.675 (stored just below) becomes 2.67 and agrees with the text report.
/// Non-finite values pass through unchanged and negative zero becomes zero.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{value:.2}").parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Insert comma separators into a string of ASCII digits
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.1}%")
}

/// One-decimal figure without a unit suffix
pub fn format_points(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.1}")
}

pub fn format_hours(value: f64) -> String {
    format!("{} hours/week", format_points(value))
}

/// Payback period in months, or `N/A` when the investment never pays back
pub fn format_payback(months: f64) -> String {
    if months.is_finite() {
        format!("{months:.1} months")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(2.906_976_744), 2.91);
        assert_eq!(round_to_cents(66.5), 66.5);
        assert_eq!(round_to_cents(-0.001), 0.0);
        assert!(round_to_cents(-0.001).is_sign_positive());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_to_cents_uses_stored_value() {
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.115), 1.11);
        assert_eq!(round_to_cents(8.345), 8.35);
        assert_eq!(round_to_cents(-1.115), -1.11);
    }

    #[test]
    fn test_rounded_value_matches_currency_text() {
        for value in [2.675, 1.115, 8.345, 1234.565, -0.005] {
            let rounded = round_to_cents(value);
            assert_eq!(
                format_currency(rounded),
                format_currency(value),
                "value {value}"
            );
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("133200"), "133,200");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(25000.0), "$25,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-2500.0), "$-2,500.00");
        assert_eq!(format_currency(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(68.0), "68.0%");
        assert_eq!(format_percentage(-12.34), "-12.3%");
        assert_eq!(format_percentage(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(format_payback(2.906_976_744), "2.9 months");
        assert_eq!(format_payback(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(23.0), "23.0 hours/week");
    }
}
