use crate::app::Tracker;
use crate::cli::RunArgs;
use crate::config::PassConfig;
use anyhow::{Context, Result};
use pass_window::{
    derive_display, FieldKind, JsonFileStore, KeyValueStore, MemoryStore, TimeWindowTracker,
    TimestampField,
};
use time::{OffsetDateTime, UtcOffset};
use tracing::{info, warn};

pub fn open_store(cfg: &PassConfig, ephemeral: bool) -> Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        info!("using in-memory store");
        return Ok(Box::new(MemoryStore::new()));
    }
    let path = cfg.state_path()?;
    info!(path = %path.display(), "using file store");
    Ok(Box::new(JsonFileStore::new(path)))
}

/// Build the tracker from the store, then apply command-line overrides.
pub fn initialize_tracker(
    store: Box<dyn KeyValueStore>,
    local_offset: UtcOffset,
    args: &RunArgs,
) -> Tracker {
    let mut tracker = TimeWindowTracker::load(store, local_offset);

    if let Some(aos) = &args.aos {
        tracker.set_raw(FieldKind::Aos, aos.as_str());
    }
    if let Some(los) = &args.los {
        tracker.set_raw(FieldKind::Los, los.as_str());
    }

    if args.locked {
        for kind in FieldKind::ALL {
            if let Err(e) = tracker.commit(kind) {
                warn!(field = %kind, error = %e, "failed to persist timestamp on startup");
            }
        }
    }

    tracker
}

/// One-line summary of the stored window, treating both timestamps as locked.
pub fn status_line<S: KeyValueStore + ?Sized>(
    store: &S,
    local_offset: UtcOffset,
    now: OffsetDateTime,
) -> Result<String> {
    let read = |kind: FieldKind| -> Result<TimestampField> {
        let raw = store
            .get(kind.store_key())
            .with_context(|| format!("Failed to read stored {}", kind))?;
        Ok(TimestampField::locked(raw.unwrap_or_default()))
    };
    let aos = read(FieldKind::Aos)?;
    let los = read(FieldKind::Los)?;

    let state = derive_display(&aos, &los, local_offset, now);
    Ok(format!("{} {}", state.label, state.duration))
}

pub fn clear_stored<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
    for kind in FieldKind::ALL {
        store
            .remove(kind.store_key())
            .with_context(|| format!("Failed to clear stored {}", kind))?;
    }
    info!("stored timestamps cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pass_window::FieldMode;
    use time::macros::datetime;

    fn stored(aos: &str, los: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(FieldKind::Aos.store_key(), aos).unwrap();
        store.set(FieldKind::Los.store_key(), los).unwrap();
        store
    }

    #[test]
    fn cli_values_override_stored_text_without_persisting() {
        let args = RunArgs {
            aos: Some("2024-05-01T12:00:00Z".to_string()),
            ..RunArgs::default()
        };
        let tracker =
            initialize_tracker(Box::new(stored("old", "keep")), UtcOffset::UTC, &args);

        assert_eq!(tracker.field(FieldKind::Aos).raw(), "2024-05-01T12:00:00Z");
        assert_eq!(tracker.field(FieldKind::Los).raw(), "keep");
        assert_eq!(tracker.field(FieldKind::Aos).mode(), FieldMode::Editing);
        assert_eq!(
            tracker.store().get("timer-aos-time").unwrap().as_deref(),
            Some("old")
        );
    }

    #[test]
    fn locked_flag_commits_both_fields() {
        let args = RunArgs {
            los: Some("2024-05-01T12:10:00Z".to_string()),
            locked: true,
            ..RunArgs::default()
        };
        let tracker = initialize_tracker(
            Box::new(stored("2024-05-01T12:00:00Z", "")),
            UtcOffset::UTC,
            &args,
        );

        for kind in FieldKind::ALL {
            assert_eq!(tracker.field(kind).mode(), FieldMode::Locked);
        }
        assert_eq!(
            tracker.store().get("timer-los-time").unwrap().as_deref(),
            Some("2024-05-01T12:10:00Z")
        );
    }

    #[test]
    fn status_line_reports_window() {
        let store = stored("2024-05-01T12:00:00Z", "2024-05-01T12:10:00Z");
        let line = status_line(&store, UtcOffset::UTC, datetime!(2024-05-01 12:02:30 UTC)).unwrap();
        assert_eq!(line, "LOS 07:30");
    }

    #[test]
    fn status_line_with_nothing_stored_is_invalid_aos() {
        let store = MemoryStore::new();
        let line = status_line(&store, UtcOffset::UTC, datetime!(2024-05-01 12:00 UTC)).unwrap();
        assert_eq!(line, "INVALID AOS --:--");
    }

    #[test]
    fn clear_removes_both_keys() {
        let mut store = stored("a", "b");
        clear_stored(&mut store).unwrap();
        assert_eq!(store.get("timer-aos-time").unwrap(), None);
        assert_eq!(store.get("timer-los-time").unwrap(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PassConfig {
            state_path: Some(dir.path().join("state.json")),
            ..PassConfig::default()
        };
        let mut store = open_store(&cfg, true).unwrap();
        store.set("timer-aos-time", "x").unwrap();
        assert!(!dir.path().join("state.json").exists());

        let mut file_store = open_store(&cfg, false).unwrap();
        file_store.set("timer-aos-time", "x").unwrap();
        assert!(dir.path().join("state.json").exists());
    }
}
