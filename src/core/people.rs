use serde_json::Value;
use tracing::debug;

use crate::domain::model::{clamp_power, Person};
use crate::utils::id::new_id;

/// Owns the people collection. Cross-entity cleanup (cascading membership
/// removal) is wired through the roster context, which calls into the team
/// repository before delegating here.
#[derive(Debug, Default)]
pub struct PersonRepository {
    items: Vec<Person>,
}

impl PersonRepository {
    /// Build from stored records, normalizing each one field-by-field.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            items: values.iter().map(Person::from_value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.items
    }

    /// Add a person and return the new id. An empty or omitted name gets the
    /// positional default `Person #<count + 1>`; the numbering is recomputed
    /// from the current length, so defaults can repeat after removals. Power
    /// defaults to 1 and is floored/clamped to a minimum of 1.
    pub fn add(&mut self, name: Option<&str>, power: Option<i64>) -> String {
        let trimmed = name.unwrap_or("").trim();
        let name = if trimmed.is_empty() {
            format!("Person #{}", self.items.len() + 1)
        } else {
            trimmed.to_string()
        };
        let person = Person {
            id: new_id(),
            name,
            power: power.map(clamp_power).unwrap_or(1),
        };
        debug!(id = %person.id, name = %person.name, power = person.power, "person added");
        let id = person.id.clone();
        self.items.push(person);
        id
    }

    /// Replace a person's name unconditionally, and power only when supplied
    /// (same clamp rule). Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, name: &str, power: Option<i64>) {
        if let Some(person) = self.items.iter_mut().find(|p| p.id == id) {
            person.name = name.trim().to_string();
            if let Some(power) = power {
                person.power = clamp_power(power);
            }
        }
    }

    /// Delete a person record. Idempotent. Cascading team cleanup must have
    /// happened already.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    pub fn snapshot(&self) -> Value {
        serde_json::to_value(&self.items).unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}
