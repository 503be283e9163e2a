//! Release date parsing for the "Aired" and "Published" fields.
//!
//! Values seen on the site:
//!
//! ```text
//! Aug 26, 2016
//! Apr 6, 2002 to Jun 29, 2002
//! Jul 22, 1997 to ?
//! Apr 1999 to ?
//! 2016
//! Not available
//! ```

use chrono::NaiveDate;

use crate::patterns::{DATE_RANGE_SEPARATOR, MONTH_YEAR, YEAR_ONLY};

/// Full day formats, tried in order.
const DAY_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%b %d %Y", "%Y-%m-%d"];

/// Start and end of a release window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Parse a single date in any of the site's precisions.
///
/// Month-only values resolve to the first of the month, year-only values to
/// January 1st. `?` and free text resolve to `None`.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() || value == "?" {
        return None;
    }

    for fmt in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    if let Some(caps) = MONTH_YEAR.captures(value) {
        let padded = format!("{} 1, {}", &caps[1], &caps[2]);
        return ["%b %d, %Y", "%B %d, %Y"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&padded, fmt).ok());
    }

    if let Some(caps) = YEAR_ONLY.captures(value) {
        let year: i32 = caps[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

/// Parse an aired/published value into a date range.
///
/// A range is split on `to`. A value without a range names a one-off release
/// and sets both ends to the same date.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use mal_scraper::metadata::parse_date_range;
///
/// let range = parse_date_range("Apr 6, 2002 to ?");
/// assert_eq!(range.start, NaiveDate::from_ymd_opt(2002, 4, 6));
/// assert_eq!(range.end, None);
/// ```
#[must_use]
pub fn parse_date_range(value: &str) -> DateRange {
    let mut parts = DATE_RANGE_SEPARATOR.splitn(value.trim(), 2);
    let start = parts.next().and_then(parse_date);

    match parts.next() {
        Some(end) => DateRange { start, end: parse_date(end) },
        None => DateRange { start, end: start },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_date_precisions() {
        assert_eq!(parse_date("Aug 26, 2016"), ymd(2016, 8, 26));
        assert_eq!(parse_date("Apr 6, 2002"), ymd(2002, 4, 6));
        assert_eq!(parse_date("September 3, 1999"), ymd(1999, 9, 3));
        assert_eq!(parse_date("Apr 1999"), ymd(1999, 4, 1));
        assert_eq!(parse_date("2016"), ymd(2016, 1, 1));
    }

    #[test]
    fn test_parse_date_unknown_values() {
        assert_eq!(parse_date("?"), None);
        assert_eq!(parse_date("Not available"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_range_both_ends() {
        let range = parse_date_range("Apr 6, 2002 to Jun 29, 2002");
        assert_eq!(range.start, ymd(2002, 4, 6));
        assert_eq!(range.end, ymd(2002, 6, 29));
    }

    #[test]
    fn test_single_date_sets_both_ends() {
        let range = parse_date_range("Aug 26, 2016");
        assert_eq!(range.start, ymd(2016, 8, 26));
        assert_eq!(range.end, ymd(2016, 8, 26));
    }

    #[test]
    fn test_open_ended_range() {
        let range = parse_date_range("Jul 22, 1997 to ?");
        assert_eq!(range.start, ymd(1997, 7, 22));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_not_available() {
        assert_eq!(parse_date_range("Not available"), DateRange::default());
    }
}
