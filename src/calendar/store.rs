use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::calendar::event::{derive_event_id, Category, Event, EventId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Event times overlap. Please choose a different time.")]
    OverlappingEvents,
}

// `id` is `Some` when the submission replaces a stored event, `None` when it
// creates a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSubmission {
    pub id: Option<EventId>,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

// Insertion order is kept throughout; listings are never time-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn submit(&mut self, submission: EventSubmission) -> Result<EventId, StoreError> {
        if submission.end <= submission.start {
            return Err(StoreError::InvalidTimeRange);
        }

        let conflict = self
            .events
            .iter()
            .filter(|event| submission.id.as_deref() != Some(event.id.as_str()))
            .any(|event| event.conflicts_with(submission.start, submission.end));
        if conflict {
            return Err(StoreError::OverlappingEvents);
        }

        let is_edit = submission.id.is_some();
        let id = match submission.id {
            Some(existing) => existing,
            None => derive_event_id(submission.start, &submission.title),
        };

        let event = Event {
            id: id.clone(),
            title: submission.title,
            description: submission.description,
            category: submission.category,
            start: submission.start,
            end: submission.end,
        };

        // A new event always appends, even when its derived id repeats one
        // preserved by an earlier start edit; only an edit may replace.
        if is_edit {
            match self.events.iter_mut().find(|slot| slot.id == id) {
                Some(slot) => *slot = event,
                // Target vanished (hand-edited snapshot): keep the edit.
                None => self.events.push(event),
            }
        } else {
            self.events.push(event);
        }

        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.starts_on(date)).collect()
    }

    pub fn filtered(&self, keyword: &str) -> Vec<&Event> {
        if keyword.is_empty() {
            return self.events.iter().collect();
        }
        let needle = keyword.to_lowercase();
        self.events
            .iter()
            .filter(|event| event.title.to_lowercase().contains(&needle))
            .collect()
    }
}
