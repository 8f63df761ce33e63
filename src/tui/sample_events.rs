use chrono::Local;

use moncal::{
    app::AppState,
    calendar::{Category, EventSubmission},
};

pub fn add_sample_events(app: &mut AppState) {
    let today = Local::now().date_naive();

    let Some(tomorrow) = today.succ_opt() else { return };
    let Some(yesterday) = today.pred_opt() else { return };

    let events = vec![
        ("Morning Standup", today, (9, 0), (9, 30), Category::Work, None),
        ("Team Sync", today, (14, 0), (15, 0), Category::Work, Some("Quarterly goals")),
        ("Gym", tomorrow, (7, 0), (8, 0), Category::Personal, None),
        ("Sprint Planning", tomorrow, (15, 0), (16, 30), Category::Work, Some("Zoom")),
        ("Dentist", yesterday, (11, 0), (11, 30), Category::Others, None),
        ("Lunch with Team", yesterday, (12, 30), (13, 30), Category::Personal, Some("Downtown Cafe")),
    ];

    for (title, date, (start_h, start_m), (end_h, end_m), category, description) in events {
        let Some(start) = date.and_hms_opt(start_h, start_m, 0) else { continue };
        let Some(end) = date.and_hms_opt(end_h, end_m, 0) else { continue };

        let submission = EventSubmission {
            id: None,
            title: title.to_string(),
            description: description.map(String::from),
            category,
            start: start.and_utc(),
            end: end.and_utc(),
        };

        // Samples clashing with already loaded events are simply skipped.
        if let Err(e) = app.store.submit(submission) {
            tracing::debug!("Skipped sample event {}: {}", title, e);
        }
    }
}
