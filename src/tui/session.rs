use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use moncal::{
    app::{AppState, Mode, SaveStatus},
    input::{command_mode, filter_mode, insert_mode, normal_mode},
    storage::config::Config,
    storage::snapshot::{JsonSnapshotFile, SnapshotStore},
    ui::theme::Theme,
};

use crate::tui::{presentation::ui, sample_events::add_sample_events};

pub fn run_tui(sample: bool) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let snapshot = JsonSnapshotFile::new(config.snapshot_path());
    let events = match snapshot.load() {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!("Could not read events snapshot, starting empty: {}", e);
            Vec::new()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    let mut app = AppState::new().with_theme(theme).with_events(events);

    if sample {
        add_sample_events(&mut app);
    }

    let res = run_app(&mut terminal, &mut app, &snapshot);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SnapshotStore>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    snapshot: &S,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => normal_mode::handle_key(key.code, app),
                        }
                    }
                }
                Mode::Command => {
                    if handle_command_mode(key.code, app, snapshot) {
                        return Ok(());
                    }
                }
                Mode::Insert => {
                    // A pending delete dialog swallows every key until
                    // answered.
                    if app.delete_confirmation_event_id.is_some() {
                        handle_delete_confirmation(key.code, app, snapshot);
                    } else {
                        handle_insert_mode(key.code, app, snapshot);
                    }
                }
                Mode::Filter => handle_filter_mode(key.code, app),
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

// Returns true when the command asks to leave the session.
fn handle_command_mode<S: SnapshotStore>(code: KeyCode, app: &mut AppState, snapshot: &S) -> bool {
    match code {
        KeyCode::Enter => {
            let command_text = app.command_buffer.clone();
            let cmd = command_mode::parse_command(&command_text);

            match cmd {
                command_mode::Command::Quit => return true,
                command_mode::Command::Write => {
                    app.command_buffer.clear();
                    app.mode = Mode::Normal;
                    persist_events(app, snapshot);
                }
                command_mode::Command::Goto(date) => {
                    app.selected_date = date;
                    app.command_buffer.clear();
                    app.mode = Mode::Normal;
                }
                command_mode::Command::Help => {
                    app.show_help = !app.show_help;
                    app.command_buffer.clear();
                    app.mode = Mode::Normal;
                }
                command_mode::Command::Theme(theme_name) => {
                    app.theme = Theme::get_by_name(&theme_name);
                    app.command_buffer.clear();
                    app.mode = Mode::Normal;
                }
                command_mode::Command::NewEvent(title) => {
                    app.command_buffer.clear();
                    app.open_create(app.selected_date);
                    if let Some(title) = title
                        && let Some(draft) = app.editor.draft_mut()
                    {
                        draft.title = title;
                    }
                }
                _ => {
                    app.command_buffer.clear();
                    app.mode = Mode::Normal;
                }
            }
            false
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            false
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn handle_insert_mode<S: SnapshotStore>(code: KeyCode, app: &mut AppState, snapshot: &S) {
    match code {
        KeyCode::Esc => app.close_editor(),
        KeyCode::Enter => match app.submit_editor() {
            Ok(Some(id)) => {
                tracing::info!("Stored event: {}", id);
                persist_events(app, snapshot);
            }
            // Nothing committed yet, or the form is showing a validation
            // error and stays open.
            Ok(None) | Err(_) => {}
        },
        KeyCode::Delete => app.request_delete(),
        _ => insert_mode::handle_key(code, app),
    }
}

fn handle_delete_confirmation<S: SnapshotStore>(code: KeyCode, app: &mut AppState, snapshot: &S) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(event) = app.confirm_delete() {
                tracing::info!("Deleted event: {}", event.id);
                persist_events(app, snapshot);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }
        _ => {}
    }
}

fn handle_filter_mode(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Normal,
        _ => filter_mode::handle_key(code, app),
    }
}

fn persist_events<S: SnapshotStore>(app: &mut AppState, snapshot: &S) {
    match snapshot.save(app.store.events()) {
        Ok(()) => app.save_status = SaveStatus::Saved,
        Err(e) => {
            tracing::error!("Failed to write events snapshot: {}", e);
            app.save_status = SaveStatus::Error(format!("Save failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use moncal::calendar::Event;
    use moncal::storage::snapshot::SnapshotError;

    struct MemorySnapshot {
        saved: RefCell<Vec<Vec<Event>>>,
        fail: bool,
    }

    impl MemorySnapshot {
        fn new() -> Self {
            Self { saved: RefCell::new(Vec::new()), fail: false }
        }

        fn failing() -> Self {
            Self { saved: RefCell::new(Vec::new()), fail: true }
        }

        fn save_count(&self) -> usize {
            self.saved.borrow().len()
        }

        fn last_saved(&self) -> Vec<Event> {
            self.saved.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl SnapshotStore for MemorySnapshot {
        fn load(&self) -> Result<Vec<Event>, SnapshotError> {
            Ok(Vec::new())
        }

        fn save(&self, events: &[Event]) -> Result<(), SnapshotError> {
            if self.fail {
                return Err(SnapshotError::Io(io::Error::other("disk full")));
            }
            self.saved.borrow_mut().push(events.to_vec());
            Ok(())
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_with_draft(title: &str) -> AppState {
        let mut app = AppState::new();
        app.open_create(date(2025, 1, 15));
        if let Some(draft) = app.editor.draft_mut() {
            draft.title = title.to_string();
        }
        app
    }

    #[test]
    fn quit_command_ends_the_session() {
        let mut app = AppState::new();
        let snapshot = MemorySnapshot::new();
        app.mode = Mode::Command;
        app.command_buffer = ":q".to_string();

        assert!(handle_command_mode(KeyCode::Enter, &mut app, &snapshot));
    }

    #[test]
    fn write_command_persists_the_store() {
        let mut app = app_with_draft("Standup");
        let snapshot = MemorySnapshot::new();
        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);

        app.mode = Mode::Command;
        app.command_buffer = ":w".to_string();
        let quit = handle_command_mode(KeyCode::Enter, &mut app, &snapshot);

        assert!(!quit);
        assert_eq!(snapshot.save_count(), 2);
        assert_eq!(snapshot.last_saved().len(), 1);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn goto_command_moves_the_selection() {
        let mut app = AppState::new();
        let snapshot = MemorySnapshot::new();
        app.mode = Mode::Command;
        app.command_buffer = ":goto 2025-06-01".to_string();

        handle_command_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(app.selected_date, date(2025, 6, 1));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn theme_command_switches_the_palette() {
        let mut app = AppState::new();
        let snapshot = MemorySnapshot::new();
        app.mode = Mode::Command;
        app.command_buffer = ":theme gruvbox".to_string();

        handle_command_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(app.theme.name, "gruvbox");
    }

    #[test]
    fn new_command_opens_a_prefilled_form() {
        let mut app = AppState::new();
        let snapshot = MemorySnapshot::new();
        app.selected_date = date(2025, 1, 15);
        app.mode = Mode::Command;
        app.command_buffer = ":new Team meeting".to_string();

        handle_command_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.editor.draft().unwrap().title, "Team meeting");
        assert_eq!(app.editor.date(), Some(date(2025, 1, 15)));
    }

    #[test]
    fn enter_commits_the_draft_and_saves_a_snapshot() {
        let mut app = app_with_draft("Standup");
        let snapshot = MemorySnapshot::new();

        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(app.store.len(), 1);
        assert_eq!(snapshot.save_count(), 1);
        assert_eq!(snapshot.last_saved()[0].title, "Standup");
        assert_eq!(app.save_status, SaveStatus::Saved);
    }

    #[test]
    fn rejected_draft_saves_nothing_and_keeps_the_form() {
        let mut app = app_with_draft("Backwards");
        if let Some(draft) = app.editor.draft_mut() {
            draft.start_input = "12:00".to_string();
            draft.end_input = "11:00".to_string();
        }
        let snapshot = MemorySnapshot::new();

        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(snapshot.save_count(), 0);
        assert!(app.editor.is_open());
        assert!(app.editor_error.is_some());
    }

    #[test]
    fn escape_discards_the_draft_without_saving() {
        let mut app = app_with_draft("Half-typed");
        let snapshot = MemorySnapshot::new();

        handle_insert_mode(KeyCode::Esc, &mut app, &snapshot);

        assert!(!app.editor.is_open());
        assert_eq!(snapshot.save_count(), 0);
    }

    #[test]
    fn confirmed_delete_persists_the_shrunken_store() {
        let mut app = app_with_draft("Doomed");
        let snapshot = MemorySnapshot::new();
        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);
        let id = app.store.events()[0].id.clone();
        app.open_edit(&id);
        handle_insert_mode(KeyCode::Delete, &mut app, &snapshot);
        assert!(app.delete_confirmation_event_id.is_some());

        handle_delete_confirmation(KeyCode::Char('y'), &mut app, &snapshot);

        assert!(app.store.is_empty());
        assert!(snapshot.last_saved().is_empty());
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn cancelled_delete_returns_to_the_form() {
        let mut app = app_with_draft("Spared");
        let snapshot = MemorySnapshot::new();
        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);
        let id = app.store.events()[0].id.clone();
        app.open_edit(&id);
        handle_insert_mode(KeyCode::Delete, &mut app, &snapshot);

        handle_delete_confirmation(KeyCode::Char('n'), &mut app, &snapshot);

        assert!(app.delete_confirmation_event_id.is_none());
        assert!(app.editor.is_editing());
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn failed_save_shows_up_in_the_status() {
        let mut app = app_with_draft("Standup");
        let snapshot = MemorySnapshot::failing();

        handle_insert_mode(KeyCode::Enter, &mut app, &snapshot);

        assert_eq!(app.store.len(), 1);
        assert!(matches!(app.save_status, SaveStatus::Error(_)));
    }

    #[test]
    fn filter_mode_returns_to_normal_on_escape() {
        let mut app = AppState::new();
        app.mode = Mode::Filter;

        handle_filter_mode(KeyCode::Esc, &mut app);

        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn filter_mode_keeps_its_text_on_enter() {
        let mut app = AppState::new();
        app.mode = Mode::Filter;
        handle_filter_mode(KeyCode::Char('l'), &mut app);
        handle_filter_mode(KeyCode::Char('u'), &mut app);

        handle_filter_mode(KeyCode::Enter, &mut app);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.filter, "lu");
    }
}
