//! Deriving the month view of the shared calendar
//!
//! Everything here is a pure function of a reference day and the current
//! events: build a [`MonthGrid`] whenever either changes, render it, throw it
//! away. The only state worth keeping between renders is a [`MonthCursor`].

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Months, NaiveDate};

use crate::event::Event;
use crate::store::EventStore;

/// How many events a day cell lists before collapsing the rest into a count
pub const DAY_CELL_EVENT_LIMIT: usize = 3;

/// The number of columns in the grid, Sunday through Saturday
pub const DAYS_PER_WEEK: usize = 7;

/// The first calendar day of `day`'s month
pub fn first_day_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap(/* every month has a day 1 */)
}

/// The last calendar day of `day`'s month (inclusive)
pub fn last_day_of_month(day: NaiveDate) -> NaiveDate {
    first_day_of_month(day)
        .checked_add_months(Months::new(1))
        .and_then(|next_month_start| next_month_start.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The same day one calendar month later, with the day of month clamped to
/// one that exists (e.g. Jan 31 becomes Feb 28, or Feb 29 in leap years)
pub fn next_month(reference_day: NaiveDate) -> NaiveDate {
    reference_day.checked_add_months(Months::new(1)).unwrap_or(reference_day)
}

/// The same day one calendar month earlier, clamped like [`next_month`]
pub fn prev_month(reference_day: NaiveDate) -> NaiveDate {
    reference_day.checked_sub_months(Months::new(1)).unwrap_or(reference_day)
}

/// One day of the displayed month and the events to show in its cell
#[derive(Clone, Debug, Serialize)]
pub struct DayCell<'a> {
    date: NaiveDate,
    events: Vec<&'a Event>,
    overflow: usize,
}

impl<'a> DayCell<'a> {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first few events of the day, in store order (at most
    /// [`DAY_CELL_EVENT_LIMIT`] of them)
    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    /// How many further events of the day did not fit in the cell
    pub fn overflow(&self) -> usize {
        self.overflow
    }
}

/// A month of day cells, aligned under Sun..Sat column headers
#[derive(Clone, Debug, Serialize)]
pub struct MonthGrid<'a> {
    month_start: NaiveDate,
    leading_blanks: usize,
    days: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Derive the grid of `reference_day`'s month from the current events
    pub fn build(reference_day: NaiveDate, events: &'a EventStore) -> Self {
        let month_start = first_day_of_month(reference_day);
        let month_end = last_day_of_month(reference_day);
        let leading_blanks = month_start.weekday().num_days_from_sunday() as usize;

        let days = month_start.iter_days()
            .take(month_end.day() as usize)
            .map(|date| {
                let mut on_day = events.events_on_day(date);
                let overflow = on_day.len().saturating_sub(DAY_CELL_EVENT_LIMIT);
                on_day.truncate(DAY_CELL_EVENT_LIMIT);
                DayCell { date, events: on_day, overflow }
            })
            .collect();

        Self { month_start, leading_blanks, days }
    }

    /// The first calendar day of the displayed month
    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    /// How many empty cells come before day 1, so that it lands under its
    /// weekday header (0 means the month starts on a Sunday)
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// The days of the month, in calendar order
    pub fn days(&self) -> &[DayCell<'a>] {
        &self.days
    }

    /// How many empty cells come after the last day to complete the final row
    pub fn trailing_blanks(&self) -> usize {
        let filled = self.leading_blanks + self.days.len();
        (DAYS_PER_WEEK - filled % DAYS_PER_WEEK) % DAYS_PER_WEEK
    }

    /// The total number of cells, always a multiple of seven
    pub fn cell_count(&self) -> usize {
        self.leading_blanks + self.days.len() + self.trailing_blanks()
    }
}

/// The one piece of state a calendar view keeps between renders: which month
/// it is looking at.
///
/// Any day can serve as the reference for its month. Navigation moves the
/// reference a whole month at a time and never fails, clamping the day of
/// month when the target month is shorter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthCursor {
    reference_day: NaiveDate,
}

impl MonthCursor {
    /// A cursor on `day`'s month
    pub fn new(day: NaiveDate) -> Self {
        Self { reference_day: day }
    }

    pub fn reference_day(&self) -> NaiveDate {
        self.reference_day
    }

    /// Move to the next month
    pub fn next(&mut self) {
        self.reference_day = next_month(self.reference_day);
    }

    /// Move to the previous month
    pub fn prev(&mut self) {
        self.reference_day = prev_month(self.reference_day);
    }

    /// Jump straight to `day`'s month
    pub fn set(&mut self, day: NaiveDate) {
        self.reference_day = day;
    }

    /// The grid for the month currently looked at
    pub fn grid<'a>(&self, events: &'a EventStore) -> MonthGrid<'a> {
        MonthGrid::build(self.reference_day, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn draft_on(date: NaiveDate, title: &str) -> EventDraft {
        EventDraft {
            title: Some(title.to_string()),
            start_time: date.and_hms_opt(12, 0, 0),
            ..EventDraft::default()
        }
    }

    #[test]
    fn grid_shape_june_2024() {
        let events = EventStore::new();
        // June 2024 starts on a Saturday and has 30 days
        let grid = MonthGrid::build(day(2024, 6, 15), &events);
        assert_eq!(grid.month_start(), day(2024, 6, 1));
        assert_eq!(grid.leading_blanks(), 6);
        assert_eq!(grid.days().len(), 30);
        assert_eq!(grid.trailing_blanks(), 6);
        assert_eq!(grid.cell_count(), 42);
        assert_eq!(grid.days()[0].date(), day(2024, 6, 1));
        assert_eq!(grid.days()[29].date(), day(2024, 6, 30));
    }

    #[test]
    fn grid_shape_september_2024() {
        let events = EventStore::new();
        // September 2024 starts on a Sunday, so no leading blanks at all
        let grid = MonthGrid::build(day(2024, 9, 30), &events);
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.days().len(), 30);
        assert_eq!(grid.trailing_blanks(), 5);
        assert_eq!(grid.cell_count(), 35);
    }

    #[test]
    fn grid_handles_february() {
        let events = EventStore::new();

        let leap = MonthGrid::build(day(2024, 2, 10), &events);
        assert_eq!(leap.days().len(), 29);
        assert_eq!(leap.days()[28].date(), day(2024, 2, 29));

        let regular = MonthGrid::build(day(2023, 2, 10), &events);
        assert_eq!(regular.days().len(), 28);
        assert_eq!(regular.days()[27].date(), day(2023, 2, 28));
    }

    #[test]
    fn grid_is_always_whole_weeks() {
        let events = EventStore::new();
        for year in 2020..=2030 {
            for month in 1..=12 {
                let grid = MonthGrid::build(day(year, month, 1), &events);
                assert!(grid.leading_blanks() < DAYS_PER_WEEK);
                assert!(grid.trailing_blanks() < DAYS_PER_WEEK);
                assert_eq!(grid.cell_count() % DAYS_PER_WEEK, 0,
                           "ragged grid for {}-{}", year, month);
            }
        }
    }

    #[test]
    fn day_cells_cap_their_events() {
        let mut events = EventStore::new();
        let busy_day = day(2024, 6, 15);
        for n in 0..4 {
            events.create_event(draft_on(busy_day, &format!("event {}", n)), "u1");
        }
        events.create_event(draft_on(day(2024, 6, 16), "the quiet one"), "u1");

        let grid = MonthGrid::build(busy_day, &events);
        let busy_cell = &grid.days()[14];
        assert_eq!(busy_cell.date(), busy_day);
        assert_eq!(busy_cell.events().len(), DAY_CELL_EVENT_LIMIT);
        assert_eq!(busy_cell.overflow(), 1);
        assert_eq!(busy_cell.events()[0].title(), "event 0");

        let quiet_cell = &grid.days()[15];
        assert_eq!(quiet_cell.events().len(), 1);
        assert_eq!(quiet_cell.overflow(), 0);
    }

    #[test]
    fn month_navigation_clamps_short_months() {
        assert_eq!(next_month(day(2024, 1, 31)), day(2024, 2, 29));
        assert_eq!(next_month(day(2023, 1, 31)), day(2023, 2, 28));
        assert_eq!(prev_month(day(2024, 3, 31)), day(2024, 2, 29));
        assert_eq!(next_month(day(2024, 12, 15)), day(2025, 1, 15));
        assert_eq!(prev_month(day(2025, 1, 15)), day(2024, 12, 15));
    }

    #[test]
    fn cursor_walks_months_both_ways() {
        let mut cursor = MonthCursor::new(day(2024, 6, 15));
        cursor.next();
        assert_eq!(cursor.reference_day(), day(2024, 7, 15));
        cursor.prev();
        cursor.prev();
        assert_eq!(cursor.reference_day(), day(2024, 5, 15));
        cursor.set(day(2030, 1, 1));
        assert_eq!(cursor.reference_day(), day(2030, 1, 1));
    }
}
