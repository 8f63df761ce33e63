pub mod month_view;
pub mod theme;

pub use month_view::{calculate_layout, month_grid, DayCell, MonthGrid, Week};
pub use theme::Theme;
