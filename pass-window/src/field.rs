use std::fmt;

use time::UtcOffset;

use crate::timestamp::{to_canonical, ParsedTimestamp};

/// Which end of the tracked window a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Aos,
    Los,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Aos, FieldKind::Los];

    /// Key the raw text is persisted under.
    pub fn store_key(self) -> &'static str {
        match self {
            FieldKind::Aos => "timer-aos-time",
            FieldKind::Los => "timer-los-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Aos => "AOS",
            FieldKind::Los => "LOS",
        }
    }

    pub fn other(self) -> Self {
        match self {
            FieldKind::Aos => FieldKind::Los,
            FieldKind::Los => FieldKind::Aos,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    #[default]
    Editing,
    Locked,
}

impl FieldMode {
    pub fn toggled(self) -> Self {
        match self {
            FieldMode::Editing => FieldMode::Locked,
            FieldMode::Locked => FieldMode::Editing,
        }
    }
}

/// One operator-entered timestamp: raw text plus edit/locked mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimestampField {
    raw: String,
    mode: FieldMode,
}

/// What the front-end needs to draw a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub display_text: String,
    pub is_invalid: bool,
    pub is_editing: bool,
}

impl TimestampField {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            mode: FieldMode::Editing,
        }
    }

    pub fn locked(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            mode: FieldMode::Locked,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FieldMode::Editing
    }

    /// Replace the raw text. Locked fields are read-only; returns whether
    /// the text was taken.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.raw = raw.into();
        true
    }

    pub(crate) fn set_mode(&mut self, mode: FieldMode) {
        self.mode = mode;
    }

    pub fn parsed(&self, local_offset: UtcOffset) -> ParsedTimestamp {
        ParsedTimestamp::parse(&self.raw, local_offset)
    }

    pub fn view(&self, local_offset: UtcOffset) -> FieldView {
        let parsed = self.parsed(local_offset);
        let display_text = match (self.mode, parsed) {
            (FieldMode::Locked, ParsedTimestamp::Valid(instant)) => {
                to_canonical(instant).unwrap_or_else(|| self.raw.clone())
            }
            _ => self.raw.clone(),
        };

        FieldView {
            display_text,
            is_invalid: !parsed.is_valid(),
            is_editing: self.is_editing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_starts_editing() {
        let field = TimestampField::new("2024-05-01T12:00:00Z");
        assert_eq!(field.mode(), FieldMode::Editing);
        assert_eq!(field.raw(), "2024-05-01T12:00:00Z");
    }

    #[test]
    fn locked_field_rejects_text_changes() {
        let mut field = TimestampField::locked("2024-05-01T12:00:00Z");
        assert!(!field.set_raw("something else"));
        assert_eq!(field.raw(), "2024-05-01T12:00:00Z");
    }

    #[test]
    fn editing_view_shows_raw_text() {
        let field = TimestampField::new("2024/05/01 12:00:00Z");
        let view = field.view(UtcOffset::UTC);
        assert_eq!(view.display_text, "2024/05/01 12:00:00Z");
        assert!(view.is_editing);
        assert!(!view.is_invalid);
    }

    #[test]
    fn locked_valid_view_shows_canonical_form() {
        let field = TimestampField::locked("2024/05/01 14:00:00+02:00");
        let view = field.view(UtcOffset::UTC);
        assert_eq!(view.display_text, "2024-05-01T12:00:00.000Z");
        assert!(!view.is_editing);
        assert!(!view.is_invalid);
    }

    #[test]
    fn locked_invalid_view_falls_back_to_raw_text() {
        let field = TimestampField::locked("not-a-date");
        let view = field.view(UtcOffset::UTC);
        assert_eq!(view.display_text, "not-a-date");
        assert!(view.is_invalid);
    }

    #[test]
    fn invalid_marker_shows_while_editing_too() {
        let view = TimestampField::new("").view(UtcOffset::UTC);
        assert!(view.is_invalid);
        assert!(view.is_editing);
    }

    #[test]
    fn field_kinds_have_distinct_keys() {
        assert_eq!(FieldKind::Aos.store_key(), "timer-aos-time");
        assert_eq!(FieldKind::Los.store_key(), "timer-los-time");
        assert_eq!(FieldKind::Aos.other(), FieldKind::Los);
    }
}
