//! Timecode parsing for clip durations.
//!
//! Accepted grammar: `H+:MM:SS`. Hours are one or more ASCII digits, minutes
//! and seconds are exactly two digits in `00..=59`. Surrounding whitespace is
//! ignored; anything else is rejected.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    #[error("expected HH:MM:SS")]
    Shape,

    #[error("{field} must be digits")]
    NotDigits { field: &'static str },

    #[error("{field} must be two digits between 00 and 59")]
    OutOfRange { field: &'static str },

    #[error("timecode is too large")]
    Overflow,
}

/// Parse a timecode into whole seconds.
pub fn parse_timecode(text: &str) -> Result<u64, TimecodeError> {
    let mut parts = text.trim().split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimecodeError::Shape);
    };

    let hours = digits(hours, "hours")?;
    let minutes = sexagesimal(minutes, "minutes")?;
    let seconds = sexagesimal(seconds, "seconds")?;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or(TimecodeError::Overflow)
}

fn digits(field_text: &str, field: &'static str) -> Result<u64, TimecodeError> {
    if field_text.is_empty() || !field_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimecodeError::NotDigits { field });
    }
    field_text.parse().map_err(|_| TimecodeError::Overflow)
}

fn sexagesimal(field_text: &str, field: &'static str) -> Result<u64, TimecodeError> {
    let value = digits(field_text, field)?;
    if field_text.len() != 2 || value > 59 {
        return Err(TimecodeError::OutOfRange { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_timecodes() {
        assert_eq!(parse_timecode("00:00:00"), Ok(0));
        assert_eq!(parse_timecode("00:02:00"), Ok(120));
        assert_eq!(parse_timecode("01:00:05"), Ok(3605));
        assert_eq!(parse_timecode("  00:00:59 "), Ok(59));
        assert_eq!(parse_timecode("100:00:00"), Ok(360_000));
        assert_eq!(parse_timecode("1:30:00"), Ok(5400));
    }

    #[test]
    fn test_reject_wrong_shape() {
        assert_eq!(parse_timecode("120"), Err(TimecodeError::Shape));
        assert_eq!(parse_timecode("02:00"), Err(TimecodeError::Shape));
        assert_eq!(parse_timecode("00:00:00:00"), Err(TimecodeError::Shape));
        assert_eq!(parse_timecode(""), Err(TimecodeError::Shape));
    }

    #[test]
    fn test_reject_bad_fields() {
        assert_eq!(
            parse_timecode("aa:00:00"),
            Err(TimecodeError::NotDigits { field: "hours" })
        );
        assert_eq!(
            parse_timecode("00::00"),
            Err(TimecodeError::NotDigits { field: "minutes" })
        );
        assert_eq!(
            parse_timecode("00:00:1.5"),
            Err(TimecodeError::NotDigits { field: "seconds" })
        );
        assert_eq!(
            parse_timecode("-1:00:00"),
            Err(TimecodeError::NotDigits { field: "hours" })
        );
        assert_eq!(
            parse_timecode("00:60:00"),
            Err(TimecodeError::OutOfRange { field: "minutes" })
        );
        assert_eq!(
            parse_timecode("00:00:5"),
            Err(TimecodeError::OutOfRange { field: "seconds" })
        );
    }

    #[test]
    fn test_overflow_detected() {
        assert_eq!(
            parse_timecode("99999999999999999999:00:00"),
            Err(TimecodeError::Overflow)
        );
        assert_eq!(
            parse_timecode("18446744073709551615:00:00"),
            Err(TimecodeError::Overflow)
        );
    }
}
