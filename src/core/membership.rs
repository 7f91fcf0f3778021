use crate::core::roster::Roster;
use crate::domain::model::Assignment;
use crate::domain::ports::StateStore;
use crate::utils::error::Result;

/// Cross-entity membership rules. Each operation runs as one uninterrupted
/// sequence and persists the affected snapshots only once it has completed,
/// so callers never observe partial state.
impl<S: StateStore> Roster<S> {
    /// Remove a person, first stripping the id from every team so no team
    /// ever references a deleted person. Idempotent.
    pub fn remove_person(&mut self, id: &str) {
        let teams_changed = self.teams.remove_member_everywhere(id);
        self.people.remove(id);
        if teams_changed {
            self.persist_teams();
        }
        self.persist_people();
    }

    /// Move a person between teams and persist the result. Same-team moves
    /// are a no-op; an unknown team id is a caller contract violation.
    pub fn move_member(
        &mut self,
        person_id: &str,
        from_team_id: &str,
        to_team_id: &str,
    ) -> Result<()> {
        self.teams
            .move_member_between_teams(person_id, from_team_id, to_team_id)?;
        self.persist_teams();
        Ok(())
    }

    /// Empty every team's membership, typically right before replaying a
    /// fresh assignment queue.
    pub fn clear_all_members(&mut self) {
        self.teams.clear_all_members();
        self.persist_teams();
    }

    /// Apply a balanced assignment queue in order: clear all memberships,
    /// then append each person to their target team.
    pub fn apply_assignments(&mut self, queue: &[Assignment]) -> Result<()> {
        self.teams.clear_all_members();
        for step in queue {
            self.teams.push_member(&step.team_id, &step.person.id)?;
        }
        self.persist_teams();
        Ok(())
    }
}
