use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Focus, Mode};
use crate::ui::month_view::days_in_month;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') => move_previous_day(state),
        KeyCode::Char('j') => match state.focus {
            Focus::Grid => move_down_week(state),
            Focus::Events => state.move_event_selection_down(),
        },
        KeyCode::Char('k') => match state.focus {
            Focus::Grid => move_up_week(state),
            Focus::Events => state.move_event_selection_up(),
        },
        KeyCode::Char('l') => move_next_day(state),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('a') => state.open_create(state.selected_date),
        KeyCode::Char('E') => edit_selected_event(state),
        KeyCode::Enter => handle_enter_key(state),
        KeyCode::Tab => state.toggle_focus(),
        KeyCode::Char('/') => state.mode = Mode::Filter,
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => move_previous_month(state),
        KeyCode::Char('}') => move_next_month(state),
        _ => {}
    }
}

fn move_previous_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(1)) {
        state.selected_date = new_date;
    }
}

fn move_next_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(1)) {
        state.selected_date = new_date;
    }
}

fn move_down_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn move_up_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn jump_to_today(state: &mut AppState) {
    state.selected_date = chrono::Local::now().date_naive();
}

fn edit_selected_event(state: &mut AppState) {
    let Some(id) = state.selected_listed_event().map(|event| event.id.clone()) else {
        return;
    };
    state.open_edit(&id);
}

fn handle_enter_key(state: &mut AppState) {
    match state.focus {
        Focus::Grid => state.open_create(state.selected_date),
        Focus::Events => edit_selected_event(state),
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn show_help(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":help".to_string();
}

fn move_to_start_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        state.selected_date = first;
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    if let Some(last) = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)) {
        state.selected_date = last;
    }
}

// Month moves keep the day number, clamped to the target month's length.
fn move_previous_month(state: &mut AppState) {
    let (year, month) = match state.selected_date.month() {
        1 => (state.selected_date.year() - 1, 12),
        m => (state.selected_date.year(), m - 1),
    };
    let day = state.selected_date.day().min(days_in_month(year, month));
    if let Some(new_date) = NaiveDate::from_ymd_opt(year, month, day) {
        state.selected_date = new_date;
    }
}

fn move_next_month(state: &mut AppState) {
    let (year, month) = match state.selected_date.month() {
        12 => (state.selected_date.year() + 1, 1),
        m => (state.selected_date.year(), m + 1),
    };
    let day = state.selected_date.day().min(days_in_month(year, month));
    if let Some(new_date) = NaiveDate::from_ymd_opt(year, month, day) {
        state.selected_date = new_date;
    }
}
