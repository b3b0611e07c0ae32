//! Display formatting for dashboard numbers and dates.
//!
//! Output follows the en-US conventions the templates were written against:
//! grouped thousands, `.` decimals, short month names. Rounding is half away
//! from zero on the shortest decimal representation of the value, so `1.005`
//! rounds to `1.01` the way the browser's number formatter does.

use crate::error::FormatError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Most fraction digits `format_number` keeps.
const NUMBER_MAX_FRACTION: usize = 3;

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

/// `1,234.5`
pub const EN_US: NumberLocale = NumberLocale {
    group_separator: ',',
    decimal_separator: '.',
};

impl Default for NumberLocale {
    fn default() -> Self {
        EN_US
    }
}

/// (ISO code, display prefix, fraction digits)
const CURRENCIES: [(&str, &str, usize); 11] = [
    ("USD", "$", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("JPY", "¥", 0),
    ("INR", "₹", 2),
    ("CAD", "CA$", 2),
    ("AUD", "A$", 2),
    ("CNY", "CN¥", 2),
    ("KRW", "₩", 0),
    ("MXN", "MX$", 2),
    ("BRL", "R$", 2),
];

impl NumberLocale {
    /// Render `value` with grouping and between `min_fraction` and
    /// `max_fraction` fraction digits (trailing zeros trimmed down to the
    /// minimum).
    pub fn format_decimal(&self, value: f64, min_fraction: usize, max_fraction: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let (int_digits, mut frac_digits) = round_half_away(value.abs(), max_fraction);
        while frac_digits.len() > min_fraction && frac_digits.ends_with('0') {
            frac_digits.pop();
        }

        let mut out = String::new();
        if value < 0.0 && !(is_all_zeros(&int_digits) && is_all_zeros(&frac_digits)) {
            out.push('-');
        }
        out.push_str(&self.group(&int_digits));
        if !frac_digits.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&frac_digits);
        }
        out
    }

    /// Grouped number with up to three fraction digits: `1,234,567.891`.
    pub fn format_number(&self, value: f64) -> String {
        self.format_decimal(value, 0, NUMBER_MAX_FRACTION)
    }

    /// Currency amount: `$1,234.50`, `-€3.00`, `¥1,235`.
    pub fn format_currency(&self, amount: f64, currency: &str) -> String {
        let code = currency.trim().to_ascii_uppercase();
        let (prefix, digits) = CURRENCIES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, symbol, digits)| (symbol.to_string(), *digits))
            .unwrap_or_else(|| (format!("{code}\u{a0}"), 2));

        let body = self.format_decimal(amount.abs(), digits, digits);
        let negative = amount < 0.0 && !is_all_zeros(&body);
        format!("{}{prefix}{body}", if negative { "-" } else { "" })
    }

    /// `value` is already scaled by 100: `42.3` renders as `42.3%`.
    pub fn format_percentage(&self, value: f64) -> String {
        format!("{}%", self.format_decimal(value, 1, 1))
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

/// Split `abs` into integer digits and exactly `max_fraction` fraction
/// digits, rounding half away from zero.
fn round_half_away(abs: f64, max_fraction: usize) -> (String, String) {
    // f64's Display never switches to exponent notation.
    let repr = abs.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(
        frac_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(max_fraction),
    );

    let round_up = frac_part
        .as_bytes()
        .get(max_fraction)
        .is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - max_fraction);
    (
        int_digits.iter().map(|&b| b as char).collect(),
        frac_digits.iter().map(|&b| b as char).collect(),
    )
}

fn is_all_zeros(text: &str) -> bool {
    text.chars().all(|c| !c.is_ascii_digit() || c == '0')
}

/// Parse the date layouts the server emits.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`
/// (with `T` or a space). The calendar date is taken as written, with no
/// time zone shift.
pub fn parse_date(text: &str) -> Result<NaiveDate, FormatError> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(stamp.date_naive());
    }
    for layout in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(stamp.date());
        }
    }
    Err(FormatError::InvalidDate(text.to_string()))
}

/// `Jan 5, 2024`
pub fn format_calendar_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_date(text: &str) -> Result<String, FormatError> {
    parse_date(text).map(|date| format_calendar_date(&date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_groups_thousands() {
        assert_eq!(EN_US.format_number(0.0), "0");
        assert_eq!(EN_US.format_number(999.0), "999");
        assert_eq!(EN_US.format_number(1000.0), "1,000");
        assert_eq!(EN_US.format_number(1234567.0), "1,234,567");
        assert_eq!(EN_US.format_number(-1234567.0), "-1,234,567");
    }

    #[test]
    fn number_keeps_at_most_three_fraction_digits() {
        assert_eq!(EN_US.format_number(1234567.891), "1,234,567.891");
        assert_eq!(EN_US.format_number(3.14159), "3.142");
        assert_eq!(EN_US.format_number(2.5), "2.5");
        assert_eq!(EN_US.format_number(2.0004), "2");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(EN_US.format_decimal(1.005, 2, 2), "1.01");
        assert_eq!(EN_US.format_decimal(0.25, 1, 1), "0.3");
        assert_eq!(EN_US.format_decimal(-0.25, 1, 1), "-0.3");
        assert_eq!(EN_US.format_decimal(999.9996, 0, 3), "1,000");
    }

    #[test]
    fn negative_values_that_round_to_zero_lose_their_sign() {
        assert_eq!(EN_US.format_number(-0.0001), "0");
        assert_eq!(EN_US.format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(EN_US.format_number(f64::NAN), "NaN");
        assert_eq!(EN_US.format_number(f64::INFINITY), "∞");
        assert_eq!(EN_US.format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn currency_uses_symbol_and_fraction_digits() {
        assert_eq!(EN_US.format_currency(1234.5, DEFAULT_CURRENCY), "$1,234.50");
        assert_eq!(EN_US.format_currency(-1234.5, "usd"), "-$1,234.50");
        assert_eq!(EN_US.format_currency(3.0, "EUR"), "€3.00");
        assert_eq!(EN_US.format_currency(1234.5, "JPY"), "¥1,235");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        assert_eq!(EN_US.format_currency(1234.5, "CHF"), "CHF\u{a0}1,234.50");
    }

    #[test]
    fn percentage_has_exactly_one_decimal() {
        assert_eq!(EN_US.format_percentage(42.3), "42.3%");
        assert_eq!(EN_US.format_percentage(42.0), "42.0%");
        assert_eq!(EN_US.format_percentage(7.25), "7.3%");
        assert_eq!(EN_US.format_percentage(0.0), "0.0%");
        assert_eq!(EN_US.format_percentage(12345.67), "12,345.7%");
        assert_eq!(EN_US.format_percentage(-3.04), "-3.0%");
    }

    #[test]
    fn percentage_always_one_decimal_digit() {
        for value in [0.01, 1.0, 9.99, 33.333, 100.0, 250.55, 1e6] {
            let text = EN_US.format_percentage(value);
            let (_, fraction) = text.trim_end_matches('%').split_once('.').unwrap();
            assert_eq!(fraction.len(), 1, "{text}");
        }
    }

    #[test]
    fn date_short_month_day_year() {
        assert_eq!(format_date("2024-01-05").unwrap(), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-31T23:59:59Z").unwrap(), "Dec 31, 2023");
        assert_eq!(format_date("2023-06-15 08:30:00").unwrap(), "Jun 15, 2023");
        assert_eq!(format_date("2023-06-15T08:30").unwrap(), "Jun 15, 2023");
    }

    #[test]
    fn date_rejects_garbage() {
        assert_eq!(
            format_date("not a date"),
            Err(FormatError::InvalidDate("not a date".to_string()))
        );
        assert!(format_date("2023-02-30").is_err());
    }

    #[test]
    fn custom_separators() {
        let locale = NumberLocale {
            group_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(locale.format_number(1234.5), "1.234,5");
    }
}
