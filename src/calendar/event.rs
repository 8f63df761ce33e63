use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub type EventId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

// Snapshots written before categories existed omit the field; they load as
// `Work`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Personal,
    Others,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Others => "Others",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Category::Work => Category::Personal,
            Category::Personal => Category::Others,
            Category::Others => Category::Work,
        }
    }
}

// Ids are a pure function of the creation start instant and title.
pub fn derive_event_id(start: DateTime<Utc>, title: &str) -> EventId {
    format!("{}-{}", start.to_rfc3339_opts(SecondsFormat::Millis, true), title)
}

impl Event {
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date_naive() == date
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    // Only events starting on the candidate's day can conflict, and only the
    // candidate's boundaries are tested. Back-to-back events touch without
    // conflicting.
    pub fn conflicts_with(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        if self.start.date_naive() != start.date_naive() {
            return false;
        }
        (start >= self.start && start < self.end) || (end > self.start && end <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event_at(id: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
        let start = date.and_hms_opt(start.0, start.1, 0).unwrap().and_utc();
        let end = date.and_hms_opt(end.0, end.1, 0).unwrap().and_utc();
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            category: Category::Work,
            start,
            end,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn category_defaults_to_work() {
        assert_eq!(Category::default(), Category::Work);
    }

    #[test]
    fn category_missing_from_snapshot_becomes_work() {
        let json = r#"{
            "id": "2025-03-10T09:00:00.000Z-Standup",
            "title": "Standup",
            "description": null,
            "start": "2025-03-10T09:00:00Z",
            "end": "2025-03-10T09:30:00Z"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, Category::Work);
    }

    #[test]
    fn category_serializes_lowercase() {
        let event = event_at("a", day(), (9, 0), (10, 0));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"category\":\"work\""));
    }

    #[test]
    fn category_cycles_through_all_three() {
        assert_eq!(Category::Work.next(), Category::Personal);
        assert_eq!(Category::Personal.next(), Category::Others);
        assert_eq!(Category::Others.next(), Category::Work);
    }

    #[test]
    fn id_derives_from_start_and_title() {
        let start = day().and_hms_opt(9, 0, 0).unwrap().and_utc();
        let id = derive_event_id(start, "Standup");
        assert_eq!(id, "2025-03-10T09:00:00.000Z-Standup");
    }

    #[test]
    fn event_duration_in_minutes() {
        let event = event_at("a", day(), (9, 0), (10, 30));
        assert_eq!(event.duration_minutes(), 90);
    }

    #[test]
    fn contained_interval_conflicts() {
        let existing = event_at("a", day(), (9, 0), (10, 0));
        let start = day().and_hms_opt(9, 30, 0).unwrap().and_utc();
        let end = day().and_hms_opt(9, 45, 0).unwrap().and_utc();
        assert!(existing.conflicts_with(start, end));
    }

    #[test]
    fn containing_interval_does_not_conflict() {
        // Only the candidate's own boundaries are tested, so an interval
        // swallowing an existing event whole slips through.
        let existing = event_at("a", day(), (9, 0), (10, 0));
        let start = day().and_hms_opt(8, 0, 0).unwrap().and_utc();
        let end = day().and_hms_opt(11, 0, 0).unwrap().and_utc();
        assert!(!existing.conflicts_with(start, end));
    }

    #[test]
    fn back_to_back_interval_does_not_conflict() {
        let existing = event_at("a", day(), (9, 0), (10, 0));
        let start = day().and_hms_opt(10, 0, 0).unwrap().and_utc();
        let end = day().and_hms_opt(11, 0, 0).unwrap().and_utc();
        assert!(!existing.conflicts_with(start, end));
    }

    #[test]
    fn interval_ending_at_existing_start_does_not_conflict() {
        let existing = event_at("a", day(), (10, 0), (11, 0));
        let start = day().and_hms_opt(9, 0, 0).unwrap().and_utc();
        let end = day().and_hms_opt(10, 0, 0).unwrap().and_utc();
        assert!(!existing.conflicts_with(start, end));
    }

    #[test]
    fn identical_interval_conflicts() {
        let existing = event_at("a", day(), (9, 0), (10, 0));
        assert!(existing.conflicts_with(existing.start, existing.end));
    }

    #[test]
    fn same_times_on_other_day_do_not_conflict() {
        let existing = event_at("a", day(), (9, 0), (10, 0));
        let other_day = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let start = other_day.and_hms_opt(9, 0, 0).unwrap().and_utc();
        let end = other_day.and_hms_opt(10, 0, 0).unwrap().and_utc();
        assert!(!existing.conflicts_with(start, end));
    }
}
