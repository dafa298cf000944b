use time::{OffsetDateTime, UtcOffset};
use tracing::{info, warn};

use crate::display::{derive_display, DisplayState};
use crate::field::{FieldKind, FieldMode, FieldView, TimestampField};
use crate::store::{KeyValueStore, StoreError};

/// Owns the AOS and LOS fields and the store their text is remembered in.
pub struct TimeWindowTracker<S> {
    aos: TimestampField,
    los: TimestampField,
    store: S,
    local_offset: UtcOffset,
}

impl<S: KeyValueStore> TimeWindowTracker<S> {
    /// Start both fields in editing mode with whatever text the store remembers.
    /// Unreadable entries start empty.
    pub fn load(store: S, local_offset: UtcOffset) -> Self {
        let read = |kind: FieldKind| match store.get(kind.store_key()) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!(field = %kind, error = %e, "could not read stored timestamp");
                String::new()
            }
        };
        let aos = TimestampField::new(read(FieldKind::Aos));
        let los = TimestampField::new(read(FieldKind::Los));

        Self {
            aos,
            los,
            store,
            local_offset,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &TimestampField {
        match kind {
            FieldKind::Aos => &self.aos,
            FieldKind::Los => &self.los,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut TimestampField {
        match kind {
            FieldKind::Aos => &mut self.aos,
            FieldKind::Los => &mut self.los,
        }
    }

    pub fn local_offset(&self) -> UtcOffset {
        self.local_offset
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the raw text of an editing field. Returns false if the field is locked.
    pub fn set_raw(&mut self, kind: FieldKind, raw: impl Into<String>) -> bool {
        self.field_mut(kind).set_raw(raw)
    }

    /// Editing -> Locked, persisting the raw text. No-op if already locked.
    ///
    /// The field is locked even if the store write fails.
    pub fn commit(&mut self, kind: FieldKind) -> Result<(), StoreError> {
        let field = self.field_mut(kind);
        if !field.is_editing() {
            return Ok(());
        }
        field.set_mode(FieldMode::Locked);
        let raw = field.raw().to_string();
        info!(field = %kind, raw = %raw, "timestamp committed");
        self.store.set(kind.store_key(), &raw)
    }

    /// Locked -> Editing. Never touches the store.
    pub fn edit(&mut self, kind: FieldKind) {
        self.field_mut(kind).set_mode(FieldMode::Editing);
    }

    /// Flip the field between editing and locked, returning the new mode.
    pub fn toggle(&mut self, kind: FieldKind) -> Result<FieldMode, StoreError> {
        match self.field(kind).mode() {
            FieldMode::Editing => self.commit(kind)?,
            FieldMode::Locked => self.edit(kind),
        }
        Ok(self.field(kind).mode())
    }

    pub fn view(&self, kind: FieldKind) -> FieldView {
        self.field(kind).view(self.local_offset)
    }

    pub fn display(&self, now: OffsetDateTime) -> DisplayState {
        derive_display(&self.aos, &self.los, self.local_offset, now)
    }
}
