use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::model::Team;
use crate::utils::colors::TEAM_COLORS;
use crate::utils::error::{Result, RosterError};
use crate::utils::id::new_id;

/// Partial update for a team; absent fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub members: Option<Vec<String>>,
}

/// Owns the team collection, including per-team membership lists. Membership
/// is stored per-team, not globally indexed, so removing a team never touches
/// the others.
#[derive(Debug, Default)]
pub struct TeamRepository {
    items: Vec<Team>,
}

impl TeamRepository {
    /// Build from stored records, normalizing each one field-by-field.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            items: values
                .iter()
                .enumerate()
                .map(|(idx, value)| Team::from_value(value, idx))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Team> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Team] {
        &self.items
    }

    /// Whether `color` is taken by a team other than `exclude_id`.
    pub fn color_in_use(&self, color: &str, exclude_id: Option<&str>) -> bool {
        self.items
            .iter()
            .any(|t| Some(t.id.as_str()) != exclude_id && t.color == color)
    }

    /// First palette color not currently in use; empty when the palette is
    /// exhausted.
    pub fn next_default_color(&self, exclude_id: Option<&str>) -> String {
        TEAM_COLORS
            .iter()
            .find(|color| !self.color_in_use(color, exclude_id))
            .map(|color| color.to_string())
            .unwrap_or_default()
    }

    /// Add a team and return the new id. An empty or omitted name gets the
    /// positional default `Team #<count + 1>` (recomputed from the current
    /// length, same churn caveat as people); an omitted color gets the next
    /// free palette color. New teams start with no members.
    pub fn add(&mut self, name: Option<&str>, color: Option<&str>) -> String {
        let provided = name.unwrap_or("");
        let name = if provided.is_empty() {
            format!("Team #{}", self.items.len() + 1)
        } else {
            provided.to_string()
        };
        let color = match color {
            Some(color) => color.to_string(),
            None => self.next_default_color(None),
        };
        let team = Team {
            id: new_id(),
            name,
            color,
            members: Vec::new(),
        };
        debug!(id = %team.id, name = %team.name, color = %team.color, "team added");
        let id = team.id.clone();
        self.items.push(team);
        id
    }

    /// Apply a partial update. Name and members replace unconditionally
    /// (members is a full overwrite, so callers replacing the list wholesale
    /// own its uniqueness). A non-empty color already used by a different
    /// team is rejected with a warning while the rest of the patch still
    /// applies. Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, patch: TeamPatch) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let color = patch.color.and_then(|desired| {
            if desired.is_empty() || !self.color_in_use(&desired, Some(id)) {
                Some(desired)
            } else {
                warn!(color = %desired, team = %id, "color already in use by another team, ignoring color change");
                None
            }
        });
        let team = &mut self.items[idx];
        if let Some(name) = patch.name {
            team.name = name;
        }
        if let Some(members) = patch.members {
            team.members = members;
        }
        if let Some(color) = color {
            team.color = color;
        }
    }

    /// Delete a team. Idempotent; other teams' member lists are unaffected.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    /// Strip `person_id` from every team's member list; returns whether any
    /// team changed.
    pub fn remove_member_everywhere(&mut self, person_id: &str) -> bool {
        let mut changed = false;
        for team in &mut self.items {
            let before = team.members.len();
            team.members.retain(|member| member != person_id);
            changed |= team.members.len() != before;
        }
        changed
    }

    /// Move a member from one team to another. Same-team moves are a no-op;
    /// an unresolved team id is a caller contract violation. Absence in the
    /// source is tolerated and insertion into the destination is idempotent.
    pub fn move_member_between_teams(
        &mut self,
        person_id: &str,
        from_team_id: &str,
        to_team_id: &str,
    ) -> Result<()> {
        if from_team_id == to_team_id {
            return Ok(());
        }
        let from_idx = self
            .index_of(from_team_id)
            .ok_or_else(|| RosterError::TeamNotFound(from_team_id.to_string()))?;
        let to_idx = self
            .index_of(to_team_id)
            .ok_or_else(|| RosterError::TeamNotFound(to_team_id.to_string()))?;

        self.items[from_idx]
            .members
            .retain(|member| member != person_id);
        let destination = &mut self.items[to_idx];
        if !destination.members.iter().any(|member| member == person_id) {
            destination.members.push(person_id.to_string());
        }
        Ok(())
    }

    /// Append a member to a team if not already present.
    pub fn push_member(&mut self, team_id: &str, person_id: &str) -> Result<()> {
        let idx = self
            .index_of(team_id)
            .ok_or_else(|| RosterError::TeamNotFound(team_id.to_string()))?;
        let team = &mut self.items[idx];
        if !team.members.iter().any(|member| member == person_id) {
            team.members.push(person_id.to_string());
        }
        Ok(())
    }

    /// Reset every team's membership to empty.
    pub fn clear_all_members(&mut self) {
        for team in &mut self.items {
            team.members.clear();
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub fn snapshot(&self) -> Value {
        serde_json::to_value(&self.items).unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_follow_palette_order() {
        let mut repo = TeamRepository::default();
        let ids: Vec<String> = (0..3).map(|_| repo.add(None, None)).collect();
        let colors: Vec<&str> = ids
            .iter()
            .filter_map(|id| repo.get(id).map(|t| t.color.as_str()))
            .collect();
        assert_eq!(colors, &TEAM_COLORS[..3]);
    }

    #[test]
    fn exhausted_palette_yields_empty_color() {
        let mut repo = TeamRepository::default();
        for _ in 0..TEAM_COLORS.len() {
            repo.add(None, None);
        }
        let overflow = repo.add(None, None);
        assert_eq!(repo.get(&overflow).map(|t| t.color.as_str()), Some(""));
    }

    #[test]
    fn conflicting_color_is_rejected_but_name_applies() {
        let mut repo = TeamRepository::default();
        let _first = repo.add(Some("A"), Some("#111111"));
        let second = repo.add(Some("B"), Some("#222222"));

        repo.update(
            &second,
            TeamPatch {
                name: Some("Renamed".to_string()),
                color: Some("#111111".to_string()),
                ..Default::default()
            },
        );
        let team = repo.get(&second).unwrap();
        assert_eq!(team.name, "Renamed");
        assert_eq!(team.color, "#222222");
    }

    #[test]
    fn clearing_a_color_is_always_allowed() {
        let mut repo = TeamRepository::default();
        let id = repo.add(Some("A"), Some("#111111"));
        repo.update(
            &id,
            TeamPatch {
                color: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(repo.get(&id).map(|t| t.color.as_str()), Some(""));
    }

    #[test]
    fn keeping_your_own_color_is_not_a_conflict() {
        let mut repo = TeamRepository::default();
        let id = repo.add(Some("A"), Some("#111111"));
        repo.update(
            &id,
            TeamPatch {
                color: Some("#111111".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(repo.get(&id).map(|t| t.color.as_str()), Some("#111111"));
    }

    #[test]
    fn move_between_teams_is_idempotent_on_destination() {
        let mut repo = TeamRepository::default();
        let a = repo.add(Some("A"), None);
        let b = repo.add(Some("B"), None);
        repo.push_member(&a, "p1").unwrap();

        repo.move_member_between_teams("p1", &a, &b).unwrap();
        repo.move_member_between_teams("p1", &a, &b).unwrap();

        assert_eq!(repo.get(&b).unwrap().members, vec!["p1".to_string()]);
        assert!(repo.get(&a).unwrap().members.is_empty());
    }

    #[test]
    fn move_with_unknown_team_fails() {
        let mut repo = TeamRepository::default();
        let a = repo.add(Some("A"), None);
        let err = repo
            .move_member_between_teams("p1", &a, "missing")
            .unwrap_err();
        assert!(matches!(err, RosterError::TeamNotFound(id) if id == "missing"));
    }

    #[test]
    fn move_within_the_same_team_is_a_no_op() {
        let mut repo = TeamRepository::default();
        let a = repo.add(Some("A"), None);
        repo.push_member(&a, "p1").unwrap();
        repo.move_member_between_teams("p1", &a, &a).unwrap();
        assert_eq!(repo.get(&a).unwrap().members, vec!["p1".to_string()]);
    }
}
