//! Numeric panel values: episode, chapter and volume counts and durations.

use crate::patterns::{DURATION_HOURS, DURATION_MINUTES, DURATION_SECONDS};

/// Parse a positive count ("12", "1,071"). "Unknown" and zero are absent.
#[must_use]
pub fn parse_count(value: &str) -> Option<u32> {
    let digits: String = value.trim().chars().filter(|c| *c != ',').collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parse a duration into whole minutes.
///
/// Seconds-only durations round up to one minute so short music videos do
/// not read as zero-length.
///
/// # Example
///
/// ```rust
/// use mal_scraper::metadata::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("1 hr. 46 min."), Some(106));
/// assert_eq!(parse_duration_minutes("24 min. per ep."), Some(24));
/// assert_eq!(parse_duration_minutes("Unknown"), None);
/// ```
#[must_use]
pub fn parse_duration_minutes(value: &str) -> Option<u32> {
    // A missing component is zero; one too large for u32 makes the whole value absent.
    let component = |re: &regex::Regex| -> Option<u32> {
        match re.captures(value) {
            Some(c) => c[1].parse().ok(),
            None => Some(0),
        }
    };

    let hours = component(&DURATION_HOURS)?;
    let minutes = component(&DURATION_MINUTES)?;
    let seconds = component(&DURATION_SECONDS)?;

    let total = hours.checked_mul(60).and_then(|m| m.checked_add(minutes))?;
    if total > 0 {
        Some(total)
    } else if seconds > 0 {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("13"), Some(13));
        assert_eq!(parse_count(" 1,071 "), Some(1071));
        assert_eq!(parse_count("Unknown"), None);
        assert_eq!(parse_count("0"), None);
    }

    #[test]
    fn test_parse_duration_variants() {
        assert_eq!(parse_duration_minutes("2 hr."), Some(120));
        assert_eq!(parse_duration_minutes("45 sec."), Some(1));
        assert_eq!(parse_duration_minutes("3 min. 20 sec."), Some(3));
        assert_eq!(parse_duration_minutes(""), None);
    }

    #[test]
    fn test_parse_duration_overflow_is_absent() {
        assert_eq!(parse_duration_minutes("100000000 hr."), None);
        assert_eq!(parse_duration_minutes("71582788 hr. 15 min."), Some(4_294_967_295));
        assert_eq!(parse_duration_minutes("71582788 hr. 16 min."), None);
        assert_eq!(parse_duration_minutes("99999999999 min."), None);
    }
}
