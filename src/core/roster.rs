use serde_json::Value;
use tracing::{debug, error, warn};

use crate::core::people::PersonRepository;
use crate::core::teams::{TeamPatch, TeamRepository};
use crate::domain::ports::StateStore;

pub const PEOPLE_KEY: &str = "team-roster:people";
pub const TEAMS_KEY: &str = "team-roster:teams";

/// Shared application context: one store plus the two entity repositories.
/// Constructed once at startup and passed to whatever layer needs it; this is
/// the app-wide shared instance, made explicit instead of a hidden global.
///
/// Every mutator persists the affected repository snapshot after the change.
/// Persistence is best-effort: a failed write is logged, never surfaced.
pub struct Roster<S: StateStore> {
    store: S,
    pub people: PersonRepository,
    pub teams: TeamRepository,
}

impl<S: StateStore> Roster<S> {
    /// Load both collections from the store, normalizing every record.
    /// Absent or unreadable state falls back to an empty collection.
    pub fn load(store: S) -> Self {
        let people = PersonRepository::from_values(&load_records(&store, PEOPLE_KEY));
        let teams = TeamRepository::from_values(&load_records(&store, TEAMS_KEY));
        debug!(people = people.len(), teams = teams.len(), "roster loaded");
        Self {
            store,
            people,
            teams,
        }
    }

    pub fn add_person(&mut self, name: Option<&str>, power: Option<i64>) -> String {
        let id = self.people.add(name, power);
        self.persist_people();
        id
    }

    pub fn update_person(&mut self, id: &str, name: &str, power: Option<i64>) {
        self.people.update(id, name, power);
        self.persist_people();
    }

    pub fn add_team(&mut self, name: Option<&str>, color: Option<&str>) -> String {
        let id = self.teams.add(name, color);
        self.persist_teams();
        id
    }

    pub fn update_team(&mut self, id: &str, patch: TeamPatch) {
        self.teams.update(id, patch);
        self.persist_teams();
    }

    pub fn remove_team(&mut self, id: &str) {
        self.teams.remove(id);
        self.persist_teams();
    }

    pub(crate) fn persist_people(&self) {
        save_records(&self.store, PEOPLE_KEY, self.people.snapshot());
    }

    pub(crate) fn persist_teams(&self) {
        save_records(&self.store, TEAMS_KEY, self.teams.snapshot());
    }
}

fn load_records<S: StateStore>(store: &S, key: &str) -> Vec<Value> {
    match store.load(key) {
        Ok(Some(Value::Array(items))) => items,
        Ok(Some(_)) => {
            warn!(key, "stored state is not a list, starting empty");
            Vec::new()
        }
        Ok(None) => Vec::new(),
        Err(err) => {
            error!(key, %err, "failed to load stored state, starting empty");
            Vec::new()
        }
    }
}

fn save_records<S: StateStore>(store: &S, key: &str, value: Value) {
    if let Err(err) = store.save(key, &value) {
        warn!(key, %err, "failed to persist state");
    }
}
