//! Display Formatting
//!
//! Currency and date formatting for renderers. Pure string helpers; locale
//! is fixed to en-US style output.

use chrono::NaiveDate;

/// Format an amount as US dollars with thousands separators and cents.
///
/// Negative amounts render as `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to cents first so 1999.999 groups as 2,000.00.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Currency for optional amounts; absent values render as an em dash.
pub fn format_opt_currency(amount: Option<f64>) -> String {
    match amount {
        Some(v) => format_currency(v),
        None => "—".to_string(),
    }
}

/// Format an ISO date or RFC 3339 timestamp as `Jan 05, 2024`.
///
/// Unrecognized input is returned verbatim so a backend format change never
/// blanks out the column.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
    }

    #[test]
    fn test_currency_negative_and_rounding() {
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(1999.999), "$2,000.00");
    }

    #[test]
    fn test_opt_currency_dash_for_none() {
        assert_eq!(format_opt_currency(None), "—");
        assert_eq!(format_opt_currency(Some(5.0)), "$5.00");
    }

    #[test]
    fn test_date_from_iso_and_timestamp() {
        assert_eq!(format_date("2024-01-05"), "Jan 05, 2024");
        assert_eq!(format_date("2024-01-05T12:30:00Z"), "Jan 05, 2024");
    }

    #[test]
    fn test_date_fallback_verbatim() {
        assert_eq!(format_date("last tuesday"), "last tuesday");
    }
}
