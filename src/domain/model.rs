use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::colors::TEAM_COLORS;
use crate::utils::id::new_id;

/// A roster member. `power` is a positive workload weight used only by the
/// assignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub power: u32,
}

/// A named team holding an ordered list of person ids. `color` may be empty
/// (unstyled); non-empty colors are unique across teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub color: String,
    pub members: Vec<String>,
}

/// One step of an assignment queue: place `person` into `team_id`. Ephemeral
/// output of the assignment engine, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub person: Person,
    pub team_id: String,
}

/// Floor/clamp a caller-supplied power to the valid range (minimum 1).
pub fn clamp_power(raw: i64) -> u32 {
    raw.clamp(1, i64::from(u32::MAX)) as u32
}

impl Person {
    /// Decode a stored record, defaulting every field independently: missing
    /// ids are regenerated, missing names become empty, invalid powers
    /// become 1. The stored shape is never trusted.
    pub fn from_value(value: &Value) -> Person {
        let id = match value.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => new_id(),
        };
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let power = value
            .get("power")
            .and_then(Value::as_f64)
            .map(|p| clamp_power(p.floor() as i64))
            .unwrap_or(1);
        Person { id, name, power }
    }
}

impl Team {
    /// Decode a stored record at position `idx`. A null/missing color gets
    /// the round-robin palette color for that position while an explicit
    /// empty color is preserved; non-array member lists collapse to empty.
    pub fn from_value(value: &Value, idx: usize) -> Team {
        let id = match value.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => new_id(),
        };
        let name = match value.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Team #{}", idx + 1),
        };
        let color = match value.get("color") {
            None | Some(Value::Null) => TEAM_COLORS[idx % TEAM_COLORS.len()].to_string(),
            Some(Value::String(color)) => color.clone(),
            Some(other) => other.to_string(),
        };
        let members = match value.get("members") {
            Some(Value::Array(items)) => items.iter().map(member_id).collect(),
            _ => Vec::new(),
        };
        Team {
            id,
            name,
            color,
            members,
        }
    }
}

fn member_id(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_defaults_missing_fields() {
        let person = Person::from_value(&json!({}));
        assert!(!person.id.is_empty());
        assert_eq!(person.name, "");
        assert_eq!(person.power, 1);
    }

    #[test]
    fn person_power_is_floored_and_clamped() {
        assert_eq!(Person::from_value(&json!({"power": 3.9})).power, 3);
        assert_eq!(Person::from_value(&json!({"power": -2})).power, 1);
        assert_eq!(Person::from_value(&json!({"power": "nope"})).power, 1);
    }

    #[test]
    fn team_null_members_collapse_to_empty() {
        let team = Team::from_value(&json!({"name": "Legacy", "members": null}), 0);
        assert!(team.members.is_empty());
    }

    #[test]
    fn team_missing_color_defaults_by_position() {
        let team = Team::from_value(&json!({"name": "T"}), 7);
        assert_eq!(team.color, TEAM_COLORS[7 % TEAM_COLORS.len()]);
    }

    #[test]
    fn team_explicit_empty_color_is_preserved() {
        let team = Team::from_value(&json!({"name": "T", "color": ""}), 0);
        assert_eq!(team.color, "");
    }

    #[test]
    fn team_member_entries_are_coerced_to_strings() {
        let team = Team::from_value(&json!({"members": ["a", 7]}), 0);
        assert_eq!(team.members, vec!["a".to_string(), "7".to_string()]);
    }
}
