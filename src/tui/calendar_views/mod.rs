pub mod day;
pub mod event_list;
pub mod month;
