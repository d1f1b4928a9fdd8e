//! A little tour of the planner: seed the demo dataset, then do the same
//! things a UI would do on behalf of the first member.

use chrono::Local;

use potluck::{EventDraft, Planner, RsvpStatus, SuggestionDraft};
use potluck::month_grid::MonthCursor;
use potluck::seed::SAMPLE_ACTING_USER;
use potluck::utils::{print_event, print_month_grid, print_planner};

fn main() {
    env_logger::init();

    let today = Local::now().date_naive();
    let now = Local::now().naive_local();
    let mut planner = Planner::seeded(today);

    println!("---- The seeded planner ----");
    print_planner(&planner);

    println!();
    println!("---- Coming up next ----");
    let upcoming_ids: Vec<_> = planner.events().upcoming_events(now).iter()
        .map(|event| event.id().clone())
        .collect();
    for id in &upcoming_ids {
        print_event(planner.events().get(id).unwrap());
    }

    // Answer "maybe" on the soonest one, then change our mind
    let soonest = upcoming_ids.first().unwrap();
    planner.events_mut().upsert_rsvp(soonest, SAMPLE_ACTING_USER, RsvpStatus::Maybe).unwrap();
    planner.events_mut().upsert_rsvp(soonest, SAMPLE_ACTING_USER, RsvpStatus::Going).unwrap();

    // Put a picnic on a day next month that has nothing on it yet
    let mut cursor = MonthCursor::new(today);
    cursor.next();
    let free_day = cursor.grid(planner.events())
        .days().iter()
        .find(|cell| cell.events().is_empty())
        .map(|cell| cell.date())
        .unwrap();
    let mut draft = EventDraft::for_day(free_day);
    draft.title = Some("Picnic in the Park".to_string());
    draft.location = Some("Riverside Park".to_string());
    planner.events_mut().create_event(draft, SAMPLE_ACTING_USER);

    // Pitch an idea and watch the votes move
    let pool_party = planner.suggestions_mut()
        .create_suggestion(SuggestionDraft {
            title: Some("Pool Party".to_string()),
            description: Some("Soak at the community pool before summer ends".to_string()),
        }, SAMPLE_ACTING_USER)
        .unwrap()
        .id().clone();
    planner.suggestions_mut().toggle_vote(&pool_party, "u3").unwrap();
    planner.suggestions_mut().toggle_vote(&pool_party, "u4").unwrap();
    planner.suggestions_mut().toggle_vote(&pool_party, "u4").unwrap();  // u4 changed their mind

    println!();
    println!("---- Next month ----");
    print_month_grid(&cursor.grid(planner.events()));

    println!();
    println!("---- After a busy afternoon ----");
    print_planner(&planner);

    println!();
    println!("---- Snapshot ----");
    println!("{}", serde_json::to_string_pretty(&planner).unwrap());
}
