use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Result of reading operator-entered text as an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    Valid(OffsetDateTime),
    Invalid,
}

impl ParsedTimestamp {
    /// Parse free text as an instant.
    ///
    /// Accepts RFC 3339 / ISO 8601 date-times, optionally with `/` as the date
    /// separator and a space instead of `T`. A date-time without an offset is
    /// read in `local_offset`; a bare date is midnight UTC. Anything else is
    /// `Invalid`. Valid instants are truncated to whole milliseconds.
    pub fn parse(raw: &str, local_offset: UtcOffset) -> Self {
        let Some(text) = normalize(raw) else {
            return Self::Invalid;
        };

        let parsed = OffsetDateTime::parse(&text, &Rfc3339)
            .or_else(|_| OffsetDateTime::parse(&text, &Iso8601::DEFAULT))
            .or_else(|_| {
                Date::parse(&text, format_description!("[year]-[month]-[day]"))
                    .map(|date| date.midnight().assume_utc())
            })
            .or_else(|_| {
                PrimitiveDateTime::parse(&text, &Iso8601::DEFAULT)
                    .map(|dt| dt.assume_offset(local_offset))
            });

        match parsed {
            Ok(instant) => Self::Valid(truncate_to_millis(instant)),
            Err(_) => Self::Invalid,
        }
    }

    pub fn instant(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Valid(instant) => Some(*instant),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SS.sssZ` in UTC.
pub fn to_canonical(instant: OffsetDateTime) -> Option<String> {
    instant
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .ok()
}

pub(crate) fn truncate_to_millis(instant: OffsetDateTime) -> OffsetDateTime {
    instant
        .replace_millisecond(instant.millisecond())
        .unwrap_or(instant)
}

/// Rewrite the accepted loose forms into ISO 8601 extended form.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.find(['T', 't', ' ']) {
        Some(idx) => {
            let date = trimmed[..idx].replace('/', "-");
            let rest = trimmed[idx + 1..].trim_start().to_ascii_uppercase();
            if rest.is_empty() {
                return None;
            }
            Some(format!("{}T{}", date, rest))
        }
        None => Some(trimmed.replace('/', "-")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    fn parse_utc(raw: &str) -> ParsedTimestamp {
        ParsedTimestamp::parse(raw, UtcOffset::UTC)
    }

    #[test]
    fn test_rfc3339_with_zulu() {
        assert_eq!(
            parse_utc("2024-05-01T12:00:00Z"),
            ParsedTimestamp::Valid(datetime!(2024-05-01 12:00 UTC))
        );
    }

    #[test]
    fn test_rfc3339_with_offset_and_fraction() {
        let parsed = parse_utc("2024-05-01T14:00:00.250+02:00");
        assert_eq!(
            parsed.instant(),
            Some(datetime!(2024-05-01 12:00:00.250 UTC))
        );
    }

    #[test]
    fn test_slash_date_and_space_separator() {
        assert_eq!(
            parse_utc("2024/05/01 12:30:15Z"),
            ParsedTimestamp::Valid(datetime!(2024-05-01 12:30:15 UTC))
        );
    }

    #[test]
    fn test_lowercase_designators() {
        assert_eq!(
            parse_utc("2024-05-01t12:00:00z"),
            ParsedTimestamp::Valid(datetime!(2024-05-01 12:00 UTC))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(parse_utc("  2024-05-01T12:00:00Z \n").is_valid());
    }

    #[test]
    fn test_missing_offset_uses_local_offset() {
        let parsed = ParsedTimestamp::parse("2024-05-01T12:00:00", offset!(+9));
        assert_eq!(parsed.instant(), Some(datetime!(2024-05-01 03:00 UTC)));
    }

    #[test]
    fn test_missing_seconds_uses_local_offset() {
        let parsed = ParsedTimestamp::parse("2024-05-01 12:00", offset!(-5));
        assert_eq!(parsed.instant(), Some(datetime!(2024-05-01 17:00 UTC)));
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let parsed = ParsedTimestamp::parse("2024-05-01", offset!(+9));
        assert_eq!(parsed.instant(), Some(datetime!(2024-05-01 00:00 UTC)));
    }

    #[test]
    fn test_sub_millisecond_precision_is_truncated() {
        let parsed = parse_utc("2024-05-01T12:00:00.123999Z");
        assert_eq!(
            parsed.instant(),
            Some(datetime!(2024-05-01 12:00:00.123 UTC))
        );
    }

    #[test]
    fn test_invalid_inputs() {
        for raw in [
            "",
            "   ",
            "not-a-date",
            "2024-13-01T00:00:00Z",
            "2024-02-30T00:00:00Z",
            "2024-05-01T25:00:00Z",
            "2024-05-01T",
            "12:00:00",
        ] {
            assert_eq!(parse_utc(raw), ParsedTimestamp::Invalid, "input {:?}", raw);
        }
    }

    #[test]
    fn test_canonical_rendering_is_utc_millis() {
        let instant = datetime!(2024-05-01 14:00:00.5 +02:00);
        assert_eq!(
            to_canonical(instant).as_deref(),
            Some("2024-05-01T12:00:00.500Z")
        );
    }

    #[test]
    fn test_canonical_rendering_of_parsed_value() {
        let parsed = parse_utc("2024/05/01 12:00:00Z");
        let rendered = parsed.instant().and_then(to_canonical);
        assert_eq!(rendered.as_deref(), Some("2024-05-01T12:00:00.000Z"));
    }
}
