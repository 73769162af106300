//! UTC timestamp formatting and date filter parsing.

// crates.io
use time::{
	Date, PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
	format_description::well_known::Rfc3339, macros::format_description,
};
// self
use crate::{_prelude::*, error::ConfigError};

const API_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
const SPACED_DATE_TIME: &[BorrowedFormatItem<'static>] = format_description!(
	"[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);
const T_DATE_TIME: &[BorrowedFormatItem<'static>] = format_description!(
	"[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);
const DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats `at` in UTC as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc(at: OffsetDateTime) -> Result<String, ConfigError> {
	at.to_offset(UtcOffset::UTC)
		.format(API_FORMAT)
		.map_err(|source| ConfigError::TimestampFormat { source })
}

/// Parses a date filter supplied as text.
///
/// Accepts RFC 3339 with any offset, and `YYYY-MM-DD HH:MM[:SS[.fff]]` or
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]` taken as UTC. A bare `YYYY-MM-DD` means midnight UTC.
pub fn parse_date(input: &str) -> Result<OffsetDateTime, ConfigError> {
	let raw = input.trim();

	if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Ok(at);
	}
	if let Ok(at) = PrimitiveDateTime::parse(raw, SPACED_DATE_TIME)
		.or_else(|_| PrimitiveDateTime::parse(raw, T_DATE_TIME))
	{
		return Ok(at.assume_utc());
	}
	if let Ok(date) = Date::parse(raw, DATE) {
		return Ok(date.midnight().assume_utc());
	}

	Err(ConfigError::InvalidDate { input: input.to_owned() })
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn format_utc_converts_offsets() {
		assert_eq!(
			format_utc(datetime!(2016-01-01 12:00:00 UTC)).expect("Timestamp should format."),
			"2016-01-01T12:00:00Z"
		);
		assert_eq!(
			format_utc(datetime!(2016-02-01 07:30:05 -05:00)).expect("Timestamp should format."),
			"2016-02-01T12:30:05Z"
		);
	}

	#[test]
	fn format_utc_drops_subseconds() {
		assert_eq!(
			format_utc(datetime!(2016-01-01 12:00:00.987 UTC)).expect("Timestamp should format."),
			"2016-01-01T12:00:00Z"
		);
	}

	#[test]
	fn parse_date_accepts_supported_shapes() {
		let utc = |raw: &str| {
			format_utc(parse_date(raw).expect("Date should parse."))
				.expect("Timestamp should format.")
		};

		assert_eq!(utc("2016-01-01T12:00:00Z"), "2016-01-01T12:00:00Z");
		assert_eq!(utc("2016-01-01T12:00:00+02:00"), "2016-01-01T10:00:00Z");
		assert_eq!(utc("2016-01-01 12:00:00"), "2016-01-01T12:00:00Z");
		assert_eq!(utc("2016-01-01T12:00:00"), "2016-01-01T12:00:00Z");
		assert_eq!(utc(" 2016-01-31 "), "2016-01-31T00:00:00Z");
	}

	#[test]
	fn parse_date_accepts_short_and_fractional_times() {
		assert_eq!(
			parse_date("2016-01-01 12:00").expect("Minutes-only time should parse."),
			datetime!(2016-01-01 12:00:00 UTC)
		);
		assert_eq!(
			parse_date("2016-01-01T08:30").expect("Minutes-only time should parse."),
			datetime!(2016-01-01 08:30:00 UTC)
		);
		assert_eq!(
			parse_date("2016-01-01T16:04:13.5261200").expect("Fractional seconds should parse."),
			datetime!(2016-01-01 16:04:13.52612 UTC)
		);
		assert_eq!(
			format_utc(parse_date("2016-01-01 12:00:00.25").expect("Fractional seconds should parse."))
				.expect("Timestamp should format."),
			"2016-01-01T12:00:00Z"
		);
		assert!(parse_date("2016-01-01 12").is_err());
	}

	#[test]
	fn parse_date_rejects_garbage() {
		let err = parse_date("last tuesday").expect_err("Free text must be rejected.");

		assert!(matches!(err, ConfigError::InvalidDate { input } if input == "last tuesday"));
	}
}
