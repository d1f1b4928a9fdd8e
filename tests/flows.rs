//! Flows through the planner stores, doing what a UI would do

use chrono::{Local, NaiveDate, NaiveDateTime};

use potluck::{EventDraft, EventId, Planner, PlannerError, Roster, RsvpStatus, SuggestionDraft, SuggestionId};
use potluck::store::{EventStore, SuggestionStore, UPCOMING_EVENTS_LIMIT};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

fn draft(title: &str, start: NaiveDateTime) -> EventDraft {
    EventDraft {
        title: Some(title.to_string()),
        start_time: Some(start),
        ..EventDraft::default()
    }
}

fn votes_of(store: &SuggestionStore, id: &SuggestionId) -> Vec<String> {
    store.get(id).unwrap().votes().to_vec()
}


#[test]
fn test_day_queries_ignore_the_time_of_day() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    events.create_event(draft("Breakfast", at(day(2024, 6, 15), 8, 0)), "u1");
    events.create_event(draft("Dinner", at(day(2024, 6, 15), 19, 30)), "u2");
    events.create_event(draft("Late show", at(day(2024, 6, 16), 0, 30)), "u3");

    let on_the_15th = events.events_on_day(day(2024, 6, 15));
    assert_eq!(on_the_15th.len(), 2);
    assert_eq!(on_the_15th[0].title(), "Breakfast");
    assert_eq!(on_the_15th[1].title(), "Dinner");

    // Half past midnight belongs to the next day, however close it feels
    assert_eq!(events.events_on_day(day(2024, 6, 16)).len(), 1);
    assert!(events.events_on_day(day(2024, 6, 17)).is_empty());
}

#[test]
fn test_one_evening_event_shows_on_its_day_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    let id = events.create_event(draft("Movie", at(day(2024, 6, 15), 19, 0)), "u1").id().clone();
    events.upsert_rsvp(&id, "u2", RsvpStatus::Maybe).unwrap();

    let on_the_day = events.events_on_day(day(2024, 6, 15));
    assert_eq!(on_the_day.len(), 1);
    assert_eq!(on_the_day[0].id(), &id);
    assert!(events.events_on_day(day(2024, 6, 16)).is_empty());
}

#[test]
fn test_created_events_fill_their_gaps() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    let before = Local::now().naive_local();
    let event = events.create_event(EventDraft::default(), "u1");
    let after = Local::now().naive_local();

    assert_eq!(event.title(), "Untitled Event");
    assert_eq!(event.description(), "");
    assert_eq!(event.location(), "");
    assert_eq!(event.created_by(), "u1");
    assert!(event.start_time() >= before && event.start_time() <= after);
    assert_eq!(event.end_time(), event.start_time());

    // The creator is going; nobody else has answered yet
    assert_eq!(event.rsvps().len(), 1);
    assert_eq!(event.rsvps()[0].user_id, "u1");
    assert_eq!(event.rsvps()[0].status, RsvpStatus::Going);

    // An empty title is no better than a missing one
    let untitled = events.create_event(EventDraft { title: Some(String::new()), ..EventDraft::default() }, "u2");
    assert_eq!(untitled.title(), "Untitled Event");
}

#[test]
fn test_rsvps_replace_instead_of_piling_up() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    let id = events.create_event(draft("Quiz Night", at(day(2024, 6, 20), 20, 0)), "u1").id().clone();

    events.upsert_rsvp(&id, "u2", RsvpStatus::Maybe).unwrap();
    events.upsert_rsvp(&id, "u2", RsvpStatus::Maybe).unwrap();
    let event = events.get(&id).unwrap();
    assert_eq!(event.rsvps().len(), 2);
    assert_eq!(event.rsvp_of("u2").unwrap().status, RsvpStatus::Maybe);

    events.upsert_rsvp(&id, "u2", RsvpStatus::Going).unwrap();
    let event = events.get(&id).unwrap();
    assert_eq!(event.rsvps().len(), 2);
    assert_eq!(event.rsvp_of("u2").unwrap().status, RsvpStatus::Going);

    let tally = event.tally();
    assert_eq!((tally.going, tally.maybe, tally.declined), (2, 0, 0));
    assert_eq!(tally.total(), 2);
}

#[test]
fn test_answering_a_missing_event_is_an_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    events.create_event(draft("Quiz Night", at(day(2024, 6, 20), 20, 0)), "u1");

    let ghost = EventId::from("not-there");
    let err = events.upsert_rsvp(&ghost, "u2", RsvpStatus::Going).unwrap_err();
    assert_eq!(err, PlannerError::EventNotFound(ghost.clone()));

    // And the store came through untouched
    assert_eq!(events.len(), 1);
    assert_eq!(events.iter().next().unwrap().rsvps().len(), 1);
}

#[test]
fn test_upcoming_keeps_the_three_soonest() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    events.create_event(draft("Already done", at(day(2024, 6, 10), 10, 0)), "u1");
    events.create_event(draft("D", at(day(2024, 6, 25), 10, 0)), "u1");
    events.create_event(draft("B", at(day(2024, 6, 18), 10, 0)), "u1");
    events.create_event(draft("C", at(day(2024, 6, 20), 10, 0)), "u1");
    events.create_event(draft("A", at(day(2024, 6, 16), 10, 0)), "u1");

    let now = at(day(2024, 6, 15), 12, 0);
    let upcoming = events.upcoming_events(now);
    assert_eq!(upcoming.len(), UPCOMING_EVENTS_LIMIT);
    let titles: Vec<_> = upcoming.iter().map(|event| event.title()).collect();
    assert_eq!(titles, ["A", "B", "C"]);

    // An event starting exactly "now" still counts, and a fresh call sees it
    events.create_event(draft("Right now", now), "u1");
    let titles: Vec<_> = events.upcoming_events(now).iter().map(|event| event.title()).collect();
    assert_eq!(titles, ["Right now", "A", "B"]);
}

#[test]
fn test_upcoming_ties_keep_creation_order() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut events = EventStore::new();
    let start = at(day(2024, 7, 1), 19, 0);
    events.create_event(draft("First in", start), "u1");
    events.create_event(draft("Second in", start), "u2");

    let titles: Vec<_> = events.upcoming_events(at(day(2024, 6, 1), 0, 0)).iter()
        .map(|event| event.title())
        .collect();
    assert_eq!(titles, ["First in", "Second in"]);
}

#[test]
fn test_voting_toggles_cleanly() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut suggestions = SuggestionStore::new();
    let id = suggestions.create_suggestion(SuggestionDraft {
        title: Some("Kayaking".to_string()),
        description: Some("Half day on the river".to_string()),
    }, "u1").unwrap().id().clone();

    // The creator's vote is already in, and they can take it back and re-cast it
    assert_eq!(votes_of(&suggestions, &id), ["u1"]);
    suggestions.toggle_vote(&id, "u1").unwrap();
    assert!(votes_of(&suggestions, &id).is_empty());
    suggestions.toggle_vote(&id, "u1").unwrap();
    assert_eq!(votes_of(&suggestions, &id), ["u1"]);

    suggestions.toggle_vote(&id, "u3").unwrap();
    suggestions.toggle_vote(&id, "u7").unwrap();
    assert_eq!(votes_of(&suggestions, &id), ["u1", "u3", "u7"]);

    // Withdrawing comes out of the middle without reordering anyone
    suggestions.toggle_vote(&id, "u3").unwrap();
    assert_eq!(votes_of(&suggestions, &id), ["u1", "u7"]);

    // Two toggles in a row land back exactly where we started
    let before = votes_of(&suggestions, &id);
    suggestions.toggle_vote(&id, "u5").unwrap();
    suggestions.toggle_vote(&id, "u5").unwrap();
    assert_eq!(votes_of(&suggestions, &id), before);
}

#[test]
fn test_suggestions_need_a_title() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut suggestions = SuggestionStore::new();

    let err = suggestions.create_suggestion(SuggestionDraft::default(), "u1").unwrap_err();
    assert_eq!(err, PlannerError::EmptySuggestionTitle);

    let err = suggestions.create_suggestion(SuggestionDraft {
        title: Some(String::new()),
        description: Some("no name though".to_string()),
    }, "u1").unwrap_err();
    assert_eq!(err, PlannerError::EmptySuggestionTitle);

    assert!(suggestions.is_empty());

    let ghost = SuggestionId::from("s9");
    assert_eq!(suggestions.toggle_vote(&ghost, "u1").unwrap_err(),
               PlannerError::SuggestionNotFound(ghost.clone()));
}

#[test]
fn test_empty_day_drafts_suggest_an_evening_slot() {
    let _ = env_logger::builder().is_test(true).try_init();

    let prefilled = EventDraft::for_day(day(2024, 6, 21));
    assert_eq!(prefilled.start_time, Some(at(day(2024, 6, 21), 18, 0)));
    assert_eq!(prefilled.end_time, Some(at(day(2024, 6, 21), 20, 0)));
    assert_eq!(prefilled.title, None);

    // Fed straight through, the slot survives and the title falls back
    let mut events = EventStore::new();
    let event = events.create_event(EventDraft::for_day(day(2024, 6, 21)), "u4");
    assert_eq!(event.start_time(), at(day(2024, 6, 21), 18, 0));
    assert_eq!(event.title(), "Untitled Event");
}

#[test]
fn test_an_empty_planner_fills_up() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(Roster::default());

    let id = planner.events_mut()
        .create_event(draft("Housewarming", at(day(2024, 9, 7), 17, 0)), "host")
        .id().clone();
    planner.events_mut().upsert_rsvp(&id, "guest", RsvpStatus::Going).unwrap();

    // Nobody is in the roster, so names fall back, but the RSVPs still count
    assert!(planner.user("guest").is_unknown());
    assert_eq!(planner.events().get(&id).unwrap().tally().going, 2);
}
