//! Expiration month and year choices.
//!
//! Both ranges are half-open: months run 1 through 11 and years 2020
//! through 2039.

use std::ops::Range;

/// Months offered by the month selector
pub const MONTH_RANGE: Range<u8> = 1..12;
/// Four-digit years offered by the year selector
pub const YEAR_RANGE: Range<u16> = 2020..2040;

/// Option values for the month selector, in display order.
pub fn month_options() -> Vec<String> {
    MONTH_RANGE.map(|month| month.to_string()).collect()
}

/// Option values for the year selector, in display order.
pub fn year_options() -> Vec<String> {
    YEAR_RANGE.map(|year| year.to_string()).collect()
}

/// Drop the century from a selected year: `"2027"` becomes `"27"`.
///
/// The first two characters are removed, so the empty placeholder option
/// stays empty.
pub fn year_suffix(selected: &str) -> String {
    selected.chars().skip(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_options_stop_before_twelve() {
        let months = month_options();
        assert_eq!(months.len(), 11);
        assert_eq!(months.first().map(String::as_str), Some("1"));
        assert_eq!(months.last().map(String::as_str), Some("11"));
    }

    #[test]
    fn year_options_stop_before_2040() {
        let years = year_options();
        assert_eq!(years.len(), 20);
        assert_eq!(years.first().map(String::as_str), Some("2020"));
        assert_eq!(years.last().map(String::as_str), Some("2039"));
    }

    #[test]
    fn year_suffix_keeps_last_two_digits() {
        assert_eq!(year_suffix("2027"), "27");
        assert_eq!(year_suffix("2020"), "20");
    }

    #[test]
    fn year_suffix_of_placeholder_is_empty() {
        assert_eq!(year_suffix(""), "");
    }
}
