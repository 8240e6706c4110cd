//! monthkey — local-calendar month/day normalization.
//!
//! Parses date-like inputs (`"2020"`, `"2020-01"`, `"2020-01-15"`, millisecond
//! Unix timestamps, or already-resolved `DateTime` values) into a single
//! calendar day in a configured zone, and formats the result back to a
//! `YYYY-MM` month key. Date-only values are anchored at 12:00 local so a
//! daylight-saving transition can never shift them across a midnight
//! boundary.
//!
//! Also ships two generic collection helpers ([`collect::group_by`],
//! [`collect::sorted_by_key`]).
//!
//! Pure computation; no I/O, no retained state, no clock access.

pub mod collect;
pub mod error;
pub mod normalize;
pub mod types;

pub use error::NormalizeError;
pub use normalize::{month_key, normalize, Normalizer};
pub use types::DateInput;
