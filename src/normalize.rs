//! Calendar-day normalization anchored at local noon.
//!
//! Date-only inputs ("2020-01", "2020-01-15") have to be resolved against a
//! timezone, and that resolution is where the trouble lives: when a
//! daylight-saving transition lands on midnight, a midnight-constructed value
//! can resolve onto the previous calendar day, so "2017-10" formats back as
//! "2017-09". The same slip happens under buggy zone data that applies a
//! shift it shouldn't. No documented DST rule moves local clocks by twelve
//! hours or more, so anchoring every date-only value at 12:00 keeps it inside
//! its calendar day under any rule set, current or historical. The noon
//! anchor is a correctness requirement, not a convention.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::NormalizeError;
use crate::types::DateInput;

/// Resolves [`DateInput`] values against a fixed timezone.
///
/// The zone is injected at construction so behavior can be tested across many
/// zones in one process; [`Normalizer::default`] binds to the host's ambient
/// local zone. Every call is a pure function of its argument and the zone —
/// there is no clock access and no retained state.
#[derive(Debug, Clone)]
pub struct Normalizer<Tz: TimeZone> {
  tz: Tz,
}

impl<Tz: TimeZone> Normalizer<Tz> {
  pub fn new(tz: Tz) -> Self {
    Self { tz }
  }

  /// The zone this normalizer resolves against.
  pub fn timezone(&self) -> &Tz {
    &self.tz
  }

  /// Normalize a date-like input to a single calendar day in this zone.
  ///
  /// Textual input resolves to hour 12 of the named day (day 1 when absent,
  /// January when month is also absent). Millisecond input is an absolute
  /// instant and keeps its own hour. Already-resolved values pass through
  /// untouched, so `normalize` is idempotent.
  pub fn normalize(
    &self,
    input: impl Into<DateInput<Tz>>,
  ) -> Result<DateTime<Tz>, NormalizeError> {
    match input.into() {
      DateInput::Text(s) => self.parse_text(&s),
      DateInput::Millis(ms) => {
        let instant = Utc
          .timestamp_millis_opt(ms)
          .single()
          .ok_or(NormalizeError::BadTimestamp(ms))?;
        Ok(instant.with_timezone(&self.tz))
      }
      DateInput::Date(dt) => Ok(dt),
    }
  }

  fn parse_text(&self, s: &str) -> Result<DateTime<Tz>, NormalizeError> {
    // "2020-01-15" | "2020-01" | "2020"; components past the third are ignored.
    let mut parts = s.split('-');
    let year: i32 = parts.next().unwrap_or_default().parse()?;
    let month: u32 = match parts.next() {
      Some(m) => m.parse()?,
      None => 1,
    };
    let day: u32 = match parts.next() {
      Some(d) => d.parse()?,
      None => 1,
    };

    // Hour 12, never midnight. Out-of-range components (month 13, day 32) and
    // days a zone skipped outright are rejected rather than rolled over.
    self
      .tz
      .with_ymd_and_hms(year, month, day, 12, 0, 0)
      .earliest()
      .ok_or(NormalizeError::InvalidDate { year, month, day })
  }
}

impl<Tz: TimeZone> Normalizer<Tz>
where
  Tz::Offset: fmt::Display,
{
  /// Month key for `input`: four-digit year, `-`, two-digit month ("2020-01").
  ///
  /// Purely a formatting step over [`Normalizer::normalize`].
  pub fn month_key(&self, input: impl Into<DateInput<Tz>>) -> Result<String, NormalizeError> {
    Ok(self.normalize(input)?.format("%Y-%m").to_string())
  }
}

impl Default for Normalizer<Local> {
  fn default() -> Self {
    Self { tz: Local }
  }
}

/// Normalize against the host's ambient local zone.
pub fn normalize(input: impl Into<DateInput<Local>>) -> Result<DateTime<Local>, NormalizeError> {
  Normalizer::default().normalize(input)
}

/// Month key against the host's ambient local zone.
pub fn month_key(input: impl Into<DateInput<Local>>) -> Result<String, NormalizeError> {
  Normalizer::default().month_key(input)
}
