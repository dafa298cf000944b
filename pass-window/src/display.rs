use std::fmt;

use time::{OffsetDateTime, UtcOffset};

use crate::field::TimestampField;
use crate::timestamp::{truncate_to_millis, ParsedTimestamp};

/// Shown in place of a duration when there is nothing to count.
pub const DURATION_SENTINEL: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLabel {
    Editing,
    InvalidAos,
    InvalidLos,
    Aos,
    Los,
    Over,
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DisplayLabel::Editing => "EDITING",
            DisplayLabel::InvalidAos => "INVALID AOS",
            DisplayLabel::InvalidLos => "INVALID LOS",
            DisplayLabel::Aos => "AOS",
            DisplayLabel::Los => "LOS",
            DisplayLabel::Over => "OVER",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub label: DisplayLabel,
    pub duration: String,
}

impl DisplayState {
    fn sentinel(label: DisplayLabel) -> Self {
        Self {
            label,
            duration: DURATION_SENTINEL.to_string(),
        }
    }

    fn counting(label: DisplayLabel, remaining_ms: i128) -> Self {
        Self {
            label,
            duration: format_duration(u64::try_from(remaining_ms).unwrap_or(u64::MAX)),
        }
    }
}

/// Work out the label and duration for the two fields at `now`.
///
/// Priority is fixed: any field being edited wins, then an invalid AOS, then
/// an invalid LOS, and only then the window comparison. AOS is counted while
/// strictly in the future; LOS is counted up to and including its instant.
pub fn derive_display(
    aos: &TimestampField,
    los: &TimestampField,
    local_offset: UtcOffset,
    now: OffsetDateTime,
) -> DisplayState {
    let aos_time = aos.parsed(local_offset);
    let los_time = los.parsed(local_offset);

    if aos.is_editing() || los.is_editing() {
        return DisplayState::sentinel(DisplayLabel::Editing);
    }

    let (aos_time, los_time) = match (aos_time, los_time) {
        (ParsedTimestamp::Invalid, _) => return DisplayState::sentinel(DisplayLabel::InvalidAos),
        (_, ParsedTimestamp::Invalid) => return DisplayState::sentinel(DisplayLabel::InvalidLos),
        (ParsedTimestamp::Valid(aos_time), ParsedTimestamp::Valid(los_time)) => {
            (aos_time, los_time)
        }
    };

    let now = truncate_to_millis(now);
    let to_aos_ms = (aos_time - now).whole_milliseconds();
    let to_los_ms = (los_time - now).whole_milliseconds();

    if to_aos_ms > 0 {
        DisplayState::counting(DisplayLabel::Aos, to_aos_ms)
    } else if to_los_ms >= 0 {
        DisplayState::counting(DisplayLabel::Los, to_los_ms)
    } else {
        DisplayState::sentinel(DisplayLabel::Over)
    }
}

/// Format milliseconds as `MM:SS`, or `HH:MM:SS` once there is a whole hour.
/// Components are padded to two digits but never cut, so 123 hours is `123:00:00`.
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
