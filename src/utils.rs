///! Some utility functions

use chrono::Datelike;

use crate::event::Event;
use crate::month_grid::{MonthGrid, DAYS_PER_WEEK};
use crate::planner::Planner;
use crate::suggestion::Suggestion;

/// A debug utility that pretty-prints an event and its RSVP tally
pub fn print_event(event: &Event) {
    let tally = event.tally();
    println!("    {} {} ({})\t✓{} ?{} ✗{}",
             event.start_time().format("%m-%d %H:%M"),
             event.title(),
             event.location(),
             tally.going, tally.maybe, tally.declined);
}

/// A debug utility that pretty-prints a suggestion and its vote count
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("    ▲{} {}\t{}", suggestion.vote_count(), suggestion.title(), suggestion.id());
}

/// A debug utility that pretty-prints a month grid the way a calendar page
/// lays it out, one column per weekday, a `*` on days that have events
pub fn print_month_grid(grid: &MonthGrid) {
    println!("{}", grid.month_start().format("%B %Y"));
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let mut column = 0;
    let mut cell = |text: String| {
        print!("{:>3} ", text);
        column += 1;
        if column % DAYS_PER_WEEK == 0 {
            println!();
        }
    };

    for _ in 0..grid.leading_blanks() {
        cell("·".to_string());
    }
    for day in grid.days() {
        let marker = if day.events().is_empty() { "" } else { "*" };
        cell(format!("{}{}", day.date().day(), marker));
    }
    for _ in 0..grid.trailing_blanks() {
        cell("·".to_string());
    }
}

/// A debug utility that pretty-prints the whole planner state
pub fn print_planner(planner: &Planner) {
    println!("ROSTER ({} members)", planner.roster().len());
    for user in planner.roster().iter() {
        println!("    {}\t{}", user.id(), user.name());
    }

    println!("EVENTS ({})", planner.events().len());
    for event in planner.events().iter() {
        print_event(event);
    }

    println!("SUGGESTIONS ({})", planner.suggestions().len());
    for suggestion in planner.suggestions().iter() {
        print_suggestion(suggestion);
    }
}
