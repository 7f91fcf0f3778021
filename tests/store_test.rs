use anyhow::Result;
use serde_json::json;
use team_roster::core::roster::PEOPLE_KEY;
use team_roster::{JsonFileStore, Roster, StateStore};
use tempfile::TempDir;

#[test]
fn file_store_round_trips_values() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());

    assert!(store.load("team-roster:people")?.is_none());

    let value = json!([{"id": "p1", "name": "Ada", "power": 2}]);
    store.save("team-roster:people", &value)?;
    assert_eq!(store.load("team-roster:people")?, Some(value));
    Ok(())
}

#[test]
fn file_store_creates_missing_directories() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path().join("nested").join("data"));
    store.save("key", &json!({"ok": true}))?;
    assert_eq!(store.load("key")?, Some(json!({"ok": true})));
    Ok(())
}

#[test]
fn roster_persists_between_processes_via_files() -> Result<()> {
    let dir = TempDir::new()?;
    let person;
    {
        let mut roster = Roster::load(JsonFileStore::new(dir.path()));
        person = roster.add_person(Some("Ada"), Some(3));
        roster.add_team(Some("Engine"), None);
    }

    let reloaded = Roster::load(JsonFileStore::new(dir.path()));
    assert_eq!(reloaded.people.get(&person).map(|p| p.power), Some(3));
    assert_eq!(reloaded.teams.len(), 1);
    Ok(())
}

#[test]
fn unparseable_file_surfaces_as_a_store_error_and_roster_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("team-roster_people.json");
    std::fs::write(&path, "not json")?;

    let store = JsonFileStore::new(dir.path());
    assert!(store.load(PEOPLE_KEY).is_err());

    // the roster treats an unreadable snapshot as an empty collection
    let roster = Roster::load(JsonFileStore::new(dir.path()));
    assert!(roster.people.is_empty());
    Ok(())
}
