//! A ready-made dataset to boot a demo or a test against
//!
//! The dataset follows a fixed script relative to a caller-supplied "today",
//! so a planner seeded for the same day always comes out identical. For the
//! same reason its ids are short fixed strings ("u1", "e1", "s1") rather than
//! random ones.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::activity::{ActivityReport, MonthlyActivity};
use crate::event::{Event, EventId, Rsvp, RsvpStatus};
use crate::month_grid::{first_day_of_month, next_month};
use crate::suggestion::{Suggestion, SuggestionId};
use crate::user::{Roster, User, UserId};

/// The id of the member demos act as (Alex Johnson)
pub const SAMPLE_ACTING_USER: &str = "u1";

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap(/* callers only pass valid wall-clock times */)
}

/// The `day_of_month`-th of the month after `today`'s
fn next_month_day(today: NaiveDate, day_of_month: u32) -> NaiveDate {
    next_month(first_day_of_month(today))
        .with_day(day_of_month)
        .unwrap(/* every month has a 5th and a 12th */)
}

fn ids(ids: &[&str]) -> Vec<UserId> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// The seven demo members
pub fn sample_roster() -> Roster {
    Roster::new(vec![
        User::new("u1", "Alex Johnson",     "https://randomuser.me/api/portraits/men/32.jpg"),
        User::new("u2", "Sarah Williams",   "https://randomuser.me/api/portraits/women/44.jpg"),
        User::new("u3", "Miguel Rodriguez", "https://randomuser.me/api/portraits/men/75.jpg"),
        User::new("u4", "Emma Chen",        "https://randomuser.me/api/portraits/women/17.jpg"),
        User::new("u5", "David Kim",        "https://randomuser.me/api/portraits/men/11.jpg"),
        User::new("u6", "Priya Patel",      "https://randomuser.me/api/portraits/women/89.jpg"),
        User::new("u7", "Thomas Wright",    "https://randomuser.me/api/portraits/men/45.jpg"),
    ])
}

/// Six demo events: four spread over the weeks right after `today`, two more
/// in the following month
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let mut events = Vec::new();

    events.push(Event::new_with_parameters(
        EventId::from("e1"),
        "Movie Night".to_string(),
        "Let's watch the new Dune movie!".to_string(),
        at(today + Duration::days(3), 19, 0),
        at(today + Duration::days(3), 22, 0),
        "Alex's Place".to_string(),
        "u1".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Going),
            Rsvp::new("u2", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Maybe),
            Rsvp::new("u4", RsvpStatus::Going),
            Rsvp::new("u5", RsvpStatus::Declined),
        ],
    ));

    events.push(Event::new_with_parameters(
        EventId::from("e2"),
        "Hiking Trip".to_string(),
        "Day hike to Eagle Mountain. Bring water and snacks!".to_string(),
        at(today + Duration::days(10), 9, 0),
        at(today + Duration::days(10), 16, 0),
        "Eagle Mountain Trailhead".to_string(),
        "u3".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Going),
            Rsvp::new("u6", RsvpStatus::Going),
            Rsvp::new("u7", RsvpStatus::Maybe),
        ],
    ));

    events.push(Event::new_with_parameters(
        EventId::from("e3"),
        "Board Game Night".to_string(),
        "Bringing out Settlers of Catan and Ticket to Ride!".to_string(),
        at(today + Duration::days(7), 18, 30),
        at(today + Duration::days(7), 23, 0),
        "Sarah's Apartment".to_string(),
        "u2".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Going),
            Rsvp::new("u2", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Going),
            Rsvp::new("u4", RsvpStatus::Going),
            Rsvp::new("u5", RsvpStatus::Going),
            Rsvp::new("u6", RsvpStatus::Maybe),
            Rsvp::new("u7", RsvpStatus::Going),
        ],
    ));

    events.push(Event::new_with_parameters(
        EventId::from("e4"),
        "Emma's Birthday Dinner".to_string(),
        "Celebration at Italiano Restaurant. Gift optional!".to_string(),
        at(today + Duration::days(15), 19, 0),
        at(today + Duration::days(15), 22, 0),
        "Italiano Restaurant".to_string(),
        "u4".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Going),
            Rsvp::new("u2", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Going),
            Rsvp::new("u4", RsvpStatus::Going),
            Rsvp::new("u5", RsvpStatus::Going),
            Rsvp::new("u7", RsvpStatus::Going),
        ],
    ));

    events.push(Event::new_with_parameters(
        EventId::from("e5"),
        "Beach Day".to_string(),
        "Let's enjoy the sun and surf! Bring sunscreen.".to_string(),
        at(next_month_day(today, 5), 11, 0),
        at(next_month_day(today, 5), 17, 0),
        "Sunset Beach".to_string(),
        "u6".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Maybe),
            Rsvp::new("u2", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Going),
            Rsvp::new("u4", RsvpStatus::Declined),
            Rsvp::new("u6", RsvpStatus::Going),
        ],
    ));

    events.push(Event::new_with_parameters(
        EventId::from("e6"),
        "Local Band Concert".to_string(),
        "Supporting our friend's band at Downtown Bar".to_string(),
        at(next_month_day(today, 12), 20, 0),
        at(next_month_day(today, 12), 23, 30),
        "Downtown Bar & Venue".to_string(),
        "u5".to_string(),
        vec![
            Rsvp::new("u1", RsvpStatus::Going),
            Rsvp::new("u3", RsvpStatus::Going),
            Rsvp::new("u5", RsvpStatus::Going),
            Rsvp::new("u7", RsvpStatus::Maybe),
        ],
    ));

    events
}

/// Four demo suggestions with a few votes already cast
pub fn sample_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new_with_parameters(
            SuggestionId::from("s1"),
            "Camping Weekend".to_string(),
            "2-day camping trip at Lake Mountain".to_string(),
            ids(&["u1", "u3", "u6"]),
        ),
        Suggestion::new_with_parameters(
            SuggestionId::from("s2"),
            "Cooking Class".to_string(),
            "Italian cooking class at Culinary Center".to_string(),
            ids(&["u2", "u4", "u5"]),
        ),
        Suggestion::new_with_parameters(
            SuggestionId::from("s3"),
            "Kayaking".to_string(),
            "Half day kayaking trip on Cedar River".to_string(),
            ids(&["u1", "u2", "u3", "u6", "u7"]),
        ),
        Suggestion::new_with_parameters(
            SuggestionId::from("s4"),
            "Escape Room".to_string(),
            "Try the new escape room downtown".to_string(),
            ids(&["u1", "u4", "u7"]),
        ),
    ]
}

/// The demo activity digest covering the last six months
pub fn sample_activity() -> ActivityReport {
    let month = |month: &str, events, attendance| MonthlyActivity {
        month: month.to_string(),
        events,
        attendance,
    };

    ActivityReport {
        months: vec![
            month("Jan", 4, 78),
            month("Feb", 6, 85),
            month("Mar", 5, 90),
            month("Apr", 7, 81),
            month("May", 5, 88),
            month("Jun", 8, 90),
        ],
        total_events: 27,
        average_attendance: 85,
        top_location: "Sarah's Apartment".to_string(),
        top_location_events: 8,
    }
}
