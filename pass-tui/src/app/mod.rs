use pass_window::{
    to_canonical, DisplayState, FieldKind, FieldMode, FieldView, KeyValueStore, TimeWindowTracker,
};
use time::OffsetDateTime;
use tracing::warn;

mod state;
pub use state::{StatusKind, TextInput, TimerSize};

pub type Tracker = TimeWindowTracker<Box<dyn KeyValueStore>>;

pub struct App {
    pub running: bool,
    pub tracker: Tracker,
    pub focused: FieldKind,
    pub timer_size: TimerSize,

    // Latest clock tick and the display derived from it
    pub now: OffsetDateTime,
    pub display: DisplayState,

    // Cursor-aware buffers mirroring each field's raw text
    pub aos_input: TextInput,
    pub los_input: TextInput,

    pub status_message: Option<(String, StatusKind)>,
}

impl App {
    pub fn new(tracker: Tracker, now: OffsetDateTime, timer_size: TimerSize) -> Self {
        let aos_input = TextInput::from_str(tracker.field(FieldKind::Aos).raw());
        let los_input = TextInput::from_str(tracker.field(FieldKind::Los).raw());
        let display = tracker.display(now);
        Self {
            running: true,
            tracker,
            focused: FieldKind::Aos,
            timer_size,
            now,
            display,
            aos_input,
            los_input,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn on_tick(&mut self, now: OffsetDateTime) {
        self.now = now;
        self.refresh();
    }

    /// Recompute the label and duration from the current fields and clock.
    pub fn refresh(&mut self) {
        self.display = self.tracker.display(self.now);
    }

    pub fn input(&self, kind: FieldKind) -> &TextInput {
        match kind {
            FieldKind::Aos => &self.aos_input,
            FieldKind::Los => &self.los_input,
        }
    }

    fn input_mut(&mut self, kind: FieldKind) -> &mut TextInput {
        match kind {
            FieldKind::Aos => &mut self.aos_input,
            FieldKind::Los => &mut self.los_input,
        }
    }

    pub fn field_view(&self, kind: FieldKind) -> FieldView {
        self.tracker.view(kind)
    }

    pub fn focused_is_editing(&self) -> bool {
        self.tracker.field(self.focused).is_editing()
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn toggle_timer_size(&mut self) {
        self.timer_size = match self.timer_size {
            TimerSize::Compact => TimerSize::Large,
            TimerSize::Large => TimerSize::Compact,
        };
    }

    pub fn set_status(&mut self, message: String, kind: StatusKind) {
        self.status_message = Some((message, kind));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Commit or unlock the focused field.
    pub fn toggle_focused(&mut self) {
        let kind = self.focused;
        match self.tracker.toggle(kind) {
            Ok(FieldMode::Locked) => {
                self.set_status(format!("{} saved", kind), StatusKind::Success);
            }
            Ok(FieldMode::Editing) => {
                let raw = self.tracker.field(kind).raw().to_string();
                self.input_mut(kind).set(&raw);
                self.clear_status();
            }
            Err(e) => {
                warn!(field = %kind, error = %e, "failed to persist timestamp");
                self.set_status(format!("Could not save {}: {}", kind, e), StatusKind::Error);
            }
        }
        self.refresh();
    }

    /// Apply an edit to the focused field's buffer and push the text to the tracker.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if !self.focused_is_editing() {
            return;
        }
        let kind = self.focused;
        let input = self.input_mut(kind);
        edit(input);
        let raw = input.value.clone();
        self.tracker.set_raw(kind, raw);
        self.refresh();
    }

    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|input| input.insert(c));
    }

    pub fn input_backspace(&mut self) {
        self.edit_focused(TextInput::backspace);
    }

    pub fn input_delete(&mut self) {
        self.edit_focused(TextInput::delete);
    }

    pub fn input_clear(&mut self) {
        self.edit_focused(TextInput::clear);
    }

    /// Replace the focused field with the current instant.
    pub fn input_fill_now(&mut self) {
        let Some(now) = to_canonical(self.now) else {
            return;
        };
        self.edit_focused(|input| input.set(&now));
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        let input = self.input_mut(self.focused);
        if left {
            input.move_left();
        } else {
            input.move_right();
        }
    }

    pub fn input_cursor_home_end(&mut self, home: bool) {
        let input = self.input_mut(self.focused);
        if home {
            input.home();
        } else {
            input.end();
        }
    }

    /// Hint shown in the status line when there is no message.
    pub fn get_contextual_status(&self) -> String {
        let kind = self.focused;
        if self.focused_is_editing() {
            format!("Editing {}: type a timestamp, Enter to lock", kind)
        } else if self.tracker.view(kind).is_invalid {
            format!("{} is not a valid timestamp: Enter to edit", kind)
        } else {
            format!("{} locked: Enter to edit", kind)
        }
    }
}
