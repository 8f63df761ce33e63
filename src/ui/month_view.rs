use chrono::{Datelike, NaiveDate};

use crate::app::AppState;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

// Padding cells carry no date; they square off the leading and trailing rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            is_selected: false,
            is_today: false,
            has_events: false,
        }
    }

    pub fn padding() -> Self {
        Self {
            date: None,
            is_selected: false,
            is_today: false,
            has_events: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_first
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

// Rows of exactly seven cells, Sunday first: leading padding puts day 1 in
// its weekday column, trailing padding completes the final row.
pub fn month_grid(reference: NaiveDate) -> MonthGrid {
    let year = reference.year();
    let month = reference.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    let leading = first_day.weekday().num_days_from_sunday() as usize;
    for _ in 0..leading {
        current_week.days.push(DayCell::padding());
    }

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else { break };
        current_week.days.push(DayCell::new(date));

        if current_week.days.len() == DAYS_PER_WEEK {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }
    }

    if !current_week.days.is_empty() {
        while current_week.days.len() < DAYS_PER_WEEK {
            current_week.days.push(DayCell::padding());
        }
        weeks.push(current_week);
    }

    MonthGrid { year, month, weeks }
}

pub fn calculate_layout(state: &AppState) -> MonthGrid {
    let today = chrono::Local::now().date_naive();
    let mut grid = month_grid(state.selected_date);

    for week in &mut grid.weeks {
        for cell in week.days.iter_mut() {
            if let Some(date) = cell.date {
                *cell = DayCell::new(date)
                    .with_selected(date == state.selected_date)
                    .with_today(date == today)
                    .with_events(!state.store.events_on(date).is_empty());
            }
        }
    }

    grid
}
