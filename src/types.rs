//! Input types for date normalization.

use chrono::{DateTime, TimeZone};

/// A date-like value accepted by [`crate::Normalizer`].
///
/// The three variants mirror the three shapes callers hold dates in:
/// a calendar string, an absolute instant, or an already-resolved value.
#[derive(Debug, Clone)]
pub enum DateInput<Tz: TimeZone> {
  /// `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`; components need not be zero-padded.
  Text(String),
  /// Milliseconds since the Unix epoch — an absolute instant, hour included.
  Millis(i64),
  /// An already-resolved date value; passed through untouched.
  Date(DateTime<Tz>),
}

impl<Tz: TimeZone> From<&str> for DateInput<Tz> {
  fn from(s: &str) -> Self {
    Self::Text(s.to_string())
  }
}

impl<Tz: TimeZone> From<String> for DateInput<Tz> {
  fn from(s: String) -> Self {
    Self::Text(s)
  }
}

impl<Tz: TimeZone> From<i64> for DateInput<Tz> {
  fn from(ms: i64) -> Self {
    Self::Millis(ms)
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<Tz> {
  fn from(dt: DateTime<Tz>) -> Self {
    Self::Date(dt)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};

  #[test]
  fn conversions_pick_the_matching_variant() {
    let text: DateInput<Utc> = "2020-01".into();
    assert!(matches!(text, DateInput::Text(s) if s == "2020-01"));

    let owned: DateInput<Utc> = String::from("2020").into();
    assert!(matches!(owned, DateInput::Text(_)));

    let millis: DateInput<Utc> = 1_577_880_000_000i64.into();
    assert!(matches!(millis, DateInput::Millis(1_577_880_000_000)));

    let fixed = Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap();
    let date: DateInput<Utc> = fixed.into();
    assert!(matches!(date, DateInput::Date(d) if d == fixed));
  }
}
