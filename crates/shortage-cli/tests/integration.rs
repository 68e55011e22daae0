//! Integration tests for the shortage tracker
//!
//! These drive the registry through the JSON file store and the prompt
//! loop through scripted input, end to end.

use chrono::{DateTime, Local, TimeZone};
use shortage_api::{AddOutcome, Caller, Category, DeleteOutcome, Room, Shortage, ShortageQuery};
use shortage_cli::Shell;
use shortage_config::{Settings, parse_config};
use shortage_core::{ShortageRegistry, StoreWarning};
use shortage_store::{JsonFileStore, MemoryStore, RecordStore};
use shortage_util::parse_optional_bound;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn at(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(year, month, day, 10, 30, 0).unwrap()
}

fn shortage(title: &str, user: &str, room: Room, category: Category, priority: u8) -> Shortage {
    Shortage::new(title, user, room, category, priority, at(2023, 1, 15))
}

fn open_file(path: &Path) -> ShortageRegistry {
    ShortageRegistry::open(Arc::new(JsonFileStore::new(path)))
}

fn run_session(registry: ShortageRegistry, settings: Settings, script: &str) -> String {
    let mut output = Vec::new();
    let mut shell = Shell::new(registry, settings, Cursor::new(script.to_string()), &mut output);
    shell.run(None).unwrap();
    drop(shell);
    String::from_utf8(output).unwrap()
}

#[test]
fn test_duplicate_keeps_highest_priority() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");
    let mut registry = open_file(&path);

    let speaker = |priority| {
        shortage(
            "Wireless Speaker",
            "User1",
            Room::MeetingRoom,
            Category::Electronics,
            priority,
        )
    };

    assert_eq!(registry.add(speaker(3)), AddOutcome::Inserted);
    assert_eq!(
        registry.add(speaker(2)),
        AddOutcome::Rejected {
            existing_priority: 3
        }
    );
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.records()[0].priority, 3);

    assert_eq!(
        registry.add(speaker(5)),
        AddOutcome::Replaced {
            previous_priority: 3
        }
    );
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.records()[0].priority, 5);

    // The file agrees with memory
    let reopened = open_file(&path);
    assert_eq!(reopened.records(), registry.records());
}

#[test]
fn test_visibility_depends_on_caller() {
    let mut registry = ShortageRegistry::open(Arc::new(MemoryStore::new()));
    registry.add(shortage("Coffee", "User1", Room::Kitchen, Category::Food, 4));
    registry.add(shortage(
        "Monitor",
        "User2",
        Room::MeetingRoom,
        Category::Electronics,
        6,
    ));

    let all = registry.query(&Caller::admin("admin"), &ShortageQuery::all());
    assert_eq!(all.len(), 2);

    let own = registry.query(&Caller::user("user1"), &ShortageQuery::all());
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].title, "Coffee");

    let stranger = registry.query(&Caller::user("User3"), &ShortageQuery::all());
    assert!(stranger.is_empty());
}

#[test]
fn test_delete_requires_owner_or_admin() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");
    let mut registry = open_file(&path);
    registry.add(shortage(
        "Keyboard",
        "User2",
        Room::MeetingRoom,
        Category::Electronics,
        5,
    ));

    assert_eq!(
        registry.delete("Keyboard", "MeetingRoom", &Caller::user("User1")),
        DeleteOutcome::Forbidden
    );
    assert_eq!(registry.len(), 1);
    assert_eq!(open_file(&path).len(), 1);

    assert_eq!(
        registry.delete("keyboard", "meetingroom", &Caller::admin("admin")),
        DeleteOutcome::Deleted
    );
    assert!(registry.is_empty());
    assert!(open_file(&path).is_empty());
}

#[test]
fn test_owner_may_delete_own_record() {
    let mut registry = ShortageRegistry::open(Arc::new(MemoryStore::new()));
    registry.add(shortage("Soap", "User1", Room::Bathroom, Category::Other, 2));

    assert_eq!(
        registry.delete("Soap", "Kitchen", &Caller::user("User1")),
        DeleteOutcome::NotFound
    );
    assert_eq!(
        registry.delete("Soap", "Attic", &Caller::user("User1")),
        DeleteOutcome::InvalidRoom
    );
    assert_eq!(
        registry.delete("SOAP", "Bathroom", &Caller::user("USER1")),
        DeleteOutcome::Deleted
    );
    assert!(registry.is_empty());
}

#[test]
fn test_date_range_filter() {
    let mut registry = ShortageRegistry::open(Arc::new(MemoryStore::new()));
    registry.add(Shortage::new(
        "Paper",
        "User1",
        Room::MeetingRoom,
        Category::Other,
        3,
        at(2023, 1, 15),
    ));
    registry.add(Shortage::new(
        "Milk",
        "User1",
        Room::Kitchen,
        Category::Food,
        7,
        at(2023, 3, 15),
    ));

    let query = ShortageQuery::all().created_between(
        parse_optional_bound("2023-01-01"),
        parse_optional_bound("2023-02-28"),
    );
    let results = registry.query(&Caller::admin("admin"), &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Paper");

    // An unparseable bound means no bound
    let query = ShortageQuery::all()
        .created_between(parse_optional_bound("2023-01-01"), parse_optional_bound("soon"));
    assert_eq!(registry.query(&Caller::admin("admin"), &query).len(), 2);
}

#[test]
fn test_results_sorted_by_priority_then_insertion() {
    let mut registry = ShortageRegistry::open(Arc::new(MemoryStore::new()));
    registry.add(shortage("Tea", "User1", Room::Kitchen, Category::Food, 4));
    registry.add(shortage("Cable", "User1", Room::MeetingRoom, Category::Electronics, 9));
    registry.add(shortage("Sugar", "User1", Room::Kitchen, Category::Food, 4));
    registry.add(shortage("Towels", "User1", Room::Bathroom, Category::Other, 1));

    let titles: Vec<String> = registry
        .query(&Caller::user("User1"), &ShortageQuery::all())
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, ["Cable", "Tea", "Sugar", "Towels"]);
}

#[test]
fn test_stored_json_uses_symbolic_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("shortages.json");
    let mut registry = open_file(&path);
    registry.add(shortage(
        "Projector",
        "User1",
        Room::MeetingRoom,
        Category::Electronics,
        8,
    ));

    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = &json[0];

    assert_eq!(record["title"], "Projector");
    assert_eq!(record["reportedBy"], "User1");
    assert_eq!(record["room"], "MeetingRoom");
    assert_eq!(record["category"], "Electronics");
    assert_eq!(record["priority"], 8);

    let created = record["createdOn"].as_str().unwrap();
    let parsed = DateTime::parse_from_rfc3339(created).unwrap();
    assert_eq!(parsed, at(2023, 1, 15));

    // Pretty-printed for humans
    assert!(text.contains('\n'));
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");

    let mut registry = open_file(&path);
    registry.add(shortage("Coffee", "User1", Room::Kitchen, Category::Food, 4));
    registry.add(shortage("Soap", "User2", Room::Bathroom, Category::Other, 2));
    registry.add(shortage("HDMI", "User1", Room::MeetingRoom, Category::Electronics, 10));

    let reopened = open_file(&path);
    assert_eq!(reopened.records(), registry.records());
}

#[test]
fn test_corrupt_file_starts_empty_with_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");
    fs::write(&path, "{ not json").unwrap();

    let mut registry = open_file(&path);
    assert!(registry.is_empty());

    let warnings = registry.drain_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], StoreWarning::LoadFailed { .. }));

    // The next mutation overwrites the corrupt document
    registry.add(shortage("Coffee", "User1", Room::Kitchen, Category::Food, 4));
    assert_eq!(open_file(&path).len(), 1);
}

#[test]
fn test_missing_file_starts_empty_silently() {
    let dir = tempdir().unwrap();
    let mut registry = open_file(&dir.path().join("absent.json"));
    assert!(registry.is_empty());
    assert!(registry.drain_warnings().is_empty());
}

#[test]
fn test_save_failure_keeps_memory_authoritative() {
    let store = Arc::new(MemoryStore::new());
    store.set_fail_saves(true);
    let mut registry = ShortageRegistry::open(store.clone());

    assert_eq!(
        registry.add(shortage("Coffee", "User1", Room::Kitchen, Category::Food, 4)),
        AddOutcome::Inserted
    );
    assert_eq!(registry.len(), 1);
    assert!(store.saved().is_none());

    let warnings = registry.drain_warnings();
    assert!(matches!(warnings.as_slice(), [StoreWarning::SaveFailed { .. }]));

    store.set_fail_saves(false);
    registry.add(shortage("Tea", "User1", Room::Kitchen, Category::Food, 3));
    assert_eq!(store.saved().unwrap().len(), 2);
    assert!(registry.drain_warnings().is_empty());
}

#[test]
fn test_session_add_list_and_persist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");

    let script = "\
User1
add
Coffee
kitchen
FOOD
4
list





exit
";
    let output = run_session(open_file(&path), Settings::default(), script);

    assert!(output.contains("Shortage added."));
    assert!(output.contains("Coffee - Kitchen - Food - Priority: 4 - Created by: User1 on "));

    let store = JsonFileStore::new(&path);
    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].reported_by, "User1");
}

#[test]
fn test_session_admin_from_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortages.json");

    let mut registry = open_file(&path);
    registry.add(shortage("Coffee", "User1", Room::Kitchen, Category::Food, 4));
    registry.add(shortage("Monitor", "User2", Room::MeetingRoom, Category::Electronics, 6));

    let settings = parse_config(
        r#"
        config_version = 1

        [tracker]
        admins = ["Facilities"]
        "#,
    )
    .unwrap();

    let script = "facilities\nlist\n\n\n\n\n\nexit\n";
    let output = run_session(open_file(&path), settings.clone(), script);
    assert!(output.contains("Monitor - MeetingRoom"));
    assert!(output.contains("Coffee - Kitchen"));

    // The default admin is not an admin under this config
    let output = run_session(open_file(&path), settings, "admin\nlist\n\n\n\n\n\nexit\n");
    assert!(output.contains("No shortages found."));
}

#[test]
fn test_session_delete_forbidden_then_allowed() {
    let store = Arc::new(MemoryStore::with_records(vec![shortage(
        "Keyboard",
        "User2",
        Room::MeetingRoom,
        Category::Electronics,
        5,
    )]));

    let output = run_session(
        ShortageRegistry::open(store.clone()),
        Settings::default(),
        "User1\ndelete\nKeyboard\nMeetingRoom\nexit\n",
    );
    assert!(output.contains("You can only delete shortages you reported."));
    assert_eq!(store.save_count(), 0);

    let output = run_session(
        ShortageRegistry::open(store.clone()),
        Settings::default(),
        "Admin\ndelete\nkeyboard\nmeetingroom\nexit\n",
    );
    assert!(output.contains("Shortage deleted."));
    assert_eq!(store.saved().unwrap().len(), 0);
}

#[test]
fn test_session_reports_duplicate_and_bad_input() {
    let store = Arc::new(MemoryStore::new());
    let script = "\
User1
ADD
Speaker
MeetingRoom
Electronics
3
add
speaker
MeetingRoom
Electronics
2
add
Speaker
Garage
add

delete
Speaker
Garage
exit
";
    let output = run_session(
        ShortageRegistry::open(store.clone()),
        Settings::default(),
        script,
    );

    assert!(output.contains("Shortage added."));
    assert!(output.contains("already exists with priority 3"));
    assert!(output.contains("Invalid room: \"Garage\""));
    assert!(output.contains("Title cannot be empty"));
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_session_prints_save_warnings() {
    let store = Arc::new(MemoryStore::new());
    store.set_fail_saves(true);

    let output = run_session(
        ShortageRegistry::open(store),
        Settings::default(),
        "User1\nadd\nCoffee\nKitchen\nFood\n4\nexit\n",
    );

    assert!(output.contains("Shortage added."));
    assert!(output.contains("Warning: Could not save shortages to memory://shortages"));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let output = run_session(
        ShortageRegistry::open(Arc::new(MemoryStore::new())),
        Settings::default(),
        "User1\nadd\nCoffee\n",
    );
    assert!(output.contains("Title: "));
    assert!(output.contains("Room (MeetingRoom / Kitchen / Bathroom): "));
    assert!(!output.contains("Shortage added."));
}
