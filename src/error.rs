//! Structured error types for date normalization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
  /// A year/month/day component of a date string failed integer parsing.
  #[error("invalid number in date string: {0}")]
  InvalidNumber(#[from] std::num::ParseIntError),

  /// The components name no calendar day in the configured zone
  /// (month 13, day 32, or a day the zone skipped outright).
  #[error("no such calendar day: {year:04}-{month:02}-{day:02}")]
  InvalidDate { year: i32, month: u32, day: u32 },

  /// Millisecond timestamp outside chrono's representable range.
  #[error("timestamp out of range: {0} ms")]
  BadTimestamp(i64),
}
