//! Parsers for secondary information panel values.
//!
//! Each parser takes the text value of one panel field and returns a typed
//! value, or `None` when the site shows a stand-in such as "Unknown", "?" or
//! "None".

pub mod counts;
pub mod dates;
pub mod rating;

pub use counts::{parse_count, parse_duration_minutes};
pub use dates::{parse_date, parse_date_range, DateRange};
pub use rating::{parse_rating, parse_status, AgeRating, Rating, ReleaseStatus};
