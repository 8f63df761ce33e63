use chrono::{Local, NaiveDate, Timelike};

use crate::calendar::{Category, Event, EventId, EventStore, EventSubmission, StoreError};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Filter,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Events,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Closed,
    Creating { date: NaiveDate, draft: EventDraft },
    Editing { event_id: EventId, date: NaiveDate, draft: EventDraft },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing { .. })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating { date, .. } | EditorState::Editing { date, .. } => Some(*date),
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        match self {
            EditorState::Editing { event_id, .. } => Some(event_id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating { draft, .. } | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating { draft, .. } | EditorState::Editing { draft, .. } => Some(draft),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub start_input: String,
    pub end_input: String,
    pub start_touched: bool,
    pub end_touched: bool,
    pub active_field: FormField,
}

impl EventDraft {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            category: Category::Work,
            description: String::new(),
            start_hour: 9,
            start_minute: 0,
            end_hour: 10,
            end_minute: 0,
            start_input: "09:00".to_string(),
            end_input: "10:00".to_string(),
            start_touched: false,
            end_touched: false,
            active_field: FormField::Title,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        let start = event.start.time();
        let end = event.end.time();
        Self {
            title: event.title.clone(),
            category: event.category,
            description: event.description.clone().unwrap_or_default(),
            start_hour: start.hour(),
            start_minute: start.minute(),
            end_hour: end.hour(),
            end_minute: end.minute(),
            start_input: format!("{:02}:{:02}", start.hour(), start.minute()),
            end_input: format!("{:02}:{:02}", end.hour(), end.minute()),
            start_touched: false,
            end_touched: false,
            active_field: FormField::Title,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::StartTime,
            FormField::StartTime => FormField::EndTime,
            FormField::EndTime => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Description,
            FormField::Category => FormField::Title,
            FormField::StartTime => FormField::Category,
            FormField::EndTime => FormField::StartTime,
            FormField::Description => FormField::EndTime,
        };
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn parse_start_input(&mut self) {
        parse_time_buffer(&mut self.start_input, &mut self.start_hour, &mut self.start_minute);
    }

    pub fn parse_end_input(&mut self) {
        parse_time_buffer(&mut self.end_input, &mut self.end_hour, &mut self.end_minute);
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::new()
    }
}

// Accepts "HH:MM", "HHMM", "HMM", or a bare hour; clamps out-of-range parts
// and rewrites the buffer canonically. Garbage keeps the previous value.
fn parse_time_buffer(buffer: &mut String, hour: &mut u32, minute: &mut u32) {
    let digits = buffer.replace(':', "");
    let Ok(value) = digits.parse::<u32>() else { return };

    if digits.len() == 3 || digits.len() == 4 {
        *hour = (value / 100).min(23);
        *minute = (value % 100).min(59);
    } else if digits.len() <= 2 {
        *hour = value.min(23);
        *minute = 0;
    } else {
        return;
    }
    *buffer = format!("{:02}:{:02}", hour, minute);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    StartTime,
    EndTime,
    Description,
}

pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub selected_date: NaiveDate,
    pub store: EventStore,
    pub editor: EditorState,
    pub editor_error: Option<StoreError>,
    pub delete_confirmation_event_id: Option<EventId>,
    pub filter: String,
    pub selected_event_index: usize,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub save_status: SaveStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            focus: Focus::Grid,
            selected_date: Local::now().date_naive(),
            store: EventStore::new(),
            editor: EditorState::Closed,
            editor_error: None,
            delete_confirmation_event_id: None,
            filter: String::new(),
            selected_event_index: 0,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            save_status: SaveStatus::Saved,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.store = EventStore::from_events(events);
        self
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Grid => Focus::Events,
            Focus::Events => Focus::Grid,
        };
    }

    // The grid ignores the filter; only the side list narrows.
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.store.filtered(&self.filter)
    }

    pub fn selected_listed_event(&self) -> Option<&Event> {
        self.filtered_events().get(self.selected_event_index).copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let count = self.filtered_events().len();
        if count > 0 && self.selected_event_index < count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        if self.selected_event_index > 0 {
            self.selected_event_index -= 1;
        }
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    fn clamp_event_selection(&mut self) {
        let count = self.filtered_events().len();
        if self.selected_event_index >= count {
            self.selected_event_index = count.saturating_sub(1);
        }
    }

    pub fn open_create(&mut self, date: NaiveDate) {
        self.editor = EditorState::Creating { date, draft: EventDraft::new() };
        self.editor_error = None;
        self.mode = Mode::Insert;
    }

    // Also moves the selection to the event's day, so the grid follows the
    // edit.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(event) = self.store.get(id) else { return false };
        let date = event.start.date_naive();
        self.editor = EditorState::Editing {
            event_id: event.id.clone(),
            date,
            draft: EventDraft::for_event(event),
        };
        self.selected_date = date;
        self.editor_error = None;
        self.mode = Mode::Insert;
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
        self.editor_error = None;
        self.delete_confirmation_event_id = None;
        self.mode = Mode::Normal;
    }

    // Ok(Some(id)) means the store changed and a snapshot write is due;
    // Ok(None) means nothing to commit (no open form, or an empty title);
    // Err is a validation rejection, with the form left open to show it.
    pub fn submit_editor(&mut self) -> Result<Option<EventId>, StoreError> {
        let (existing_id, date) = match &self.editor {
            EditorState::Closed => return Ok(None),
            EditorState::Creating { date, .. } => (None, *date),
            EditorState::Editing { event_id, date, .. } => (Some(event_id.clone()), *date),
        };

        let (title, description, category, start_parts, end_parts) = {
            let Some(draft) = self.editor.draft_mut() else { return Ok(None) };
            draft.parse_start_input();
            draft.parse_end_input();
            (
                draft.title.trim().to_string(),
                (!draft.description.is_empty()).then(|| draft.description.clone()),
                draft.category,
                (draft.start_hour, draft.start_minute),
                (draft.end_hour, draft.end_minute),
            )
        };

        if title.is_empty() {
            return Ok(None);
        }

        let Some(start) = date.and_hms_opt(start_parts.0, start_parts.1, 0) else {
            return Ok(None);
        };
        let Some(end) = date.and_hms_opt(end_parts.0, end_parts.1, 0) else {
            return Ok(None);
        };

        let submission = EventSubmission {
            id: existing_id,
            title,
            description,
            category,
            start: start.and_utc(),
            end: end.and_utc(),
        };

        match self.store.submit(submission) {
            Ok(id) => {
                self.close_editor();
                self.clamp_event_selection();
                Ok(Some(id))
            }
            Err(error) => {
                self.editor_error = Some(error.clone());
                Err(error)
            }
        }
    }

    // Only an editing form has anything to delete; creating drafts ignore it.
    pub fn request_delete(&mut self) {
        if let Some(event_id) = self.editor.event_id() {
            self.delete_confirmation_event_id = Some(event_id.to_string());
        }
    }

    pub fn confirm_delete(&mut self) -> Option<Event> {
        let id = self.delete_confirmation_event_id.take()?;
        let removed = self.store.remove(&id);
        self.close_editor();
        self.clamp_event_selection();
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation_event_id = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
