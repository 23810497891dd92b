//! Display zone - resolves civil times to instants and back
//!
//! Every timestamp reconciliation touches is a civil date-time with no
//! offset. `DisplayZone` is the single place that decides which instant such
//! a string denotes and how an instant is rendered, so the same zone is
//! applied consistently to parsing, arithmetic, and formatting.
//!
//! # DST handling
//! - Ambiguous local times (the repeated hour at fall-back) resolve to the
//!   earliest instant.
//! - Non-existent local times (the skipped hour at spring-forward) are read
//!   with the offset in force before the transition, which moves them forward
//!   by the length of the gap: `02:30` on a one-hour gap renders as `03:30`.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use daybook_domain::constants::{MILLIS_PER_MINUTE, SUMMARY_TIME_FORMAT};
use daybook_domain::{DaybookError, Result};

/// Accepted civil date-time layouts, tried in order.
const CIVIL_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// How far back to look for the offset in force before a DST gap.
const GAP_PROBE_HOURS: i64 = 24;

/// IANA zone every civil time in a run is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    tz: Tz,
}

impl DisplayZone {
    /// Resolve an IANA zone name such as `Europe/Berlin`.
    ///
    /// # Errors
    /// Returns `DaybookError::TimezoneUnavailable` if the name is not in the
    /// bundled timezone database.
    pub fn resolve(name: &str) -> Result<Self> {
        name.trim().parse::<Tz>().map(|tz| Self { tz }).map_err(|err| {
            DaybookError::TimezoneUnavailable(format!("'{name}' could not be resolved: {err}"))
        })
    }

    /// IANA name of the zone.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Parse a civil date-time (no offset).
    ///
    /// Accepts `2024-05-23T10:00:00`, fractional seconds, minute precision,
    /// the space-separated summary layout `2024-05-23 10:00`, and a bare
    /// date (midnight).
    ///
    /// # Errors
    /// Returns `DaybookError::MalformedTimestamp` for anything else,
    /// including strings that carry a UTC offset.
    pub fn parse_civil(text: &str) -> Result<NaiveDateTime> {
        let trimmed = text.trim();

        if let Some(parsed) = CIVIL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        {
            return Ok(parsed);
        }

        NaiveDate::parse_from_str(trimmed, DATE_ONLY_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                DaybookError::MalformedTimestamp(format!("'{text}' is not a civil date-time"))
            })
    }

    /// Instant denoted by `civil` read as local time in this zone.
    ///
    /// # Errors
    /// Returns `DaybookError::MalformedTimestamp` if the local time cannot be
    /// placed on the timeline at all (out of the representable range).
    pub fn to_instant(&self, civil: NaiveDateTime) -> Result<DateTime<Utc>> {
        match self.tz.from_local_datetime(&civil) {
            LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => self.resolve_in_gap(civil),
        }
    }

    /// Parse and resolve in one step.
    ///
    /// # Errors
    /// See [`Self::parse_civil`] and [`Self::to_instant`].
    pub fn instant_of(&self, text: &str) -> Result<DateTime<Utc>> {
        self.to_instant(Self::parse_civil(text)?)
    }

    /// Render `instant` as `yyyy-MM-dd HH:mm` in this zone. Seconds are
    /// truncated, not rounded.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz).format(SUMMARY_TIME_FORMAT).to_string()
    }

    /// Add a possibly fractional number of minutes, at millisecond precision.
    ///
    /// # Errors
    /// Returns `DaybookError::InvalidInput` if `minutes` is not finite or the
    /// result leaves the representable range.
    pub fn add_minutes(&self, instant: DateTime<Utc>, minutes: f64) -> Result<DateTime<Utc>> {
        let millis = (minutes * MILLIS_PER_MINUTE).round();
        if !millis.is_finite() {
            return Err(DaybookError::InvalidInput(format!("duration {minutes} is not finite")));
        }

        #[allow(clippy::cast_possible_truncation)]
        let millis = millis as i64;

        Duration::try_milliseconds(millis)
            .and_then(|delta| instant.checked_add_signed(delta))
            .ok_or_else(|| {
                DaybookError::InvalidInput(format!(
                    "adding {minutes} minutes to {instant} is out of range"
                ))
            })
    }

    fn resolve_in_gap(&self, civil: NaiveDateTime) -> Result<DateTime<Utc>> {
        let out_of_range = || {
            DaybookError::MalformedTimestamp(format!(
                "{civil} cannot be placed in {}",
                self.tz.name()
            ))
        };

        let probe =
            civil.checked_sub_signed(Duration::hours(GAP_PROBE_HOURS)).ok_or_else(out_of_range)?;
        let before = self.tz.from_local_datetime(&probe).earliest().ok_or_else(out_of_range)?;
        let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));

        civil
            .checked_sub_signed(offset)
            .map(|utc| Utc.from_utc_datetime(&utc))
            .ok_or_else(out_of_range)
    }
}
