use crossterm::event::KeyCode;

use crate::app::{AppState, FormField};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(draft) = state.editor.draft_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => {
            match draft.active_field {
                FormField::StartTime => draft.parse_start_input(),
                FormField::EndTime => draft.parse_end_input(),
                _ => {}
            }
            draft.next_field();
        }
        KeyCode::BackTab => {
            match draft.active_field {
                FormField::StartTime => draft.parse_start_input(),
                FormField::EndTime => draft.parse_end_input(),
                _ => {}
            }
            draft.prev_field();
        }
        KeyCode::Backspace => match draft.active_field {
            FormField::Title => {
                draft.title.pop();
            }
            FormField::Category => {}
            FormField::StartTime => {
                draft.start_input.pop();
                draft.start_touched = true;
            }
            FormField::EndTime => {
                draft.end_input.pop();
                draft.end_touched = true;
            }
            FormField::Description => {
                draft.description.pop();
            }
        },
        KeyCode::Char(c) => match draft.active_field {
            FormField::Title => {
                draft.title.push(c);
            }
            FormField::Category => {
                if c == ' ' {
                    draft.cycle_category();
                }
            }
            FormField::StartTime => {
                if c.is_ascii_digit() || c == ':' {
                    if !draft.start_touched {
                        draft.start_input.clear();
                        draft.start_touched = true;
                    }
                    if draft.start_input.len() < 5 {
                        draft.start_input.push(c);
                    }
                }
            }
            FormField::EndTime => {
                if c.is_ascii_digit() || c == ':' {
                    if !draft.end_touched {
                        draft.end_input.clear();
                        draft.end_touched = true;
                    }
                    if draft.end_input.len() < 5 {
                        draft.end_input.push(c);
                    }
                }
            }
            FormField::Description => {
                draft.description.push(c);
            }
        },
        _ => {}
    }
}
