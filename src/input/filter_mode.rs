use crossterm::event::KeyCode;

use crate::app::AppState;

// Every change resets the list selection so the highlight never points past
// the narrowed list.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char(c) => {
            state.filter.push(c);
            state.reset_event_selection();
        }
        KeyCode::Backspace => {
            state.filter.pop();
            state.reset_event_selection();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::calendar::{Category, EventSubmission};

    fn seed_event(state: &mut AppState, title: &str, start_hour: u32) {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let start = day.and_hms_opt(start_hour, 0, 0).unwrap().and_utc();
        let end = day.and_hms_opt(start_hour + 1, 0, 0).unwrap().and_utc();
        state
            .store
            .submit(EventSubmission {
                id: None,
                title: title.to_string(),
                description: None,
                category: Category::Work,
                start,
                end,
            })
            .unwrap();
    }

    #[test]
    fn typed_characters_build_the_filter() {
        let mut state = AppState::new();

        handle_key(KeyCode::Char('l'), &mut state);
        handle_key(KeyCode::Char('u'), &mut state);
        handle_key(KeyCode::Char('n'), &mut state);

        assert_eq!(state.filter, "lun");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut state = AppState::new();
        state.filter = "lun".to_string();

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.filter, "lu");
    }

    #[test]
    fn narrowing_the_filter_resets_the_selection() {
        let mut state = AppState::new();
        seed_event(&mut state, "Standup", 9);
        seed_event(&mut state, "Lunch", 12);
        state.selected_event_index = 1;

        handle_key(KeyCode::Char('l'), &mut state);

        assert_eq!(state.selected_event_index, 0);
        let titles: Vec<_> = state.filtered_events().iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, vec!["Lunch"]);
    }

    #[test]
    fn backspace_on_an_empty_filter_is_harmless() {
        let mut state = AppState::new();

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.filter, "");
    }
}
