use chrono::{Datelike, NaiveDate};

use crate::models::{CalendarDay, GridCell, MonthCursor};

/// Leading empty cells (one per weekday before the 1st, Sunday first)
/// followed by every day of the month in order.
pub fn month_grid(month: MonthCursor) -> Vec<CalendarDay> {
    let first = month.first_day();
    let padding = month.first_weekday() as usize;

    let mut grid = vec![CalendarDay::Empty; padding];
    grid.extend(
        first
            .iter_days()
            .take(month.days_in_month() as usize)
            .map(CalendarDay::Day),
    );
    grid
}

/// Today is bookable, anything earlier is not.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn grid_cells(month: MonthCursor, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<GridCell> {
    month_grid(month)
        .into_iter()
        .map(|cell| match cell {
            CalendarDay::Empty => GridCell {
                day: None,
                date: None,
                selectable: false,
                selected: false,
            },
            CalendarDay::Day(date) => GridCell {
                day: Some(date.day()),
                date: Some(date),
                selectable: is_selectable(date, today),
                selected: selected == Some(date),
            },
        })
        .collect()
}
