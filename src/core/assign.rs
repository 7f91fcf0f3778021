use rand::Rng;
use std::collections::HashSet;

use crate::domain::model::{Assignment, Person, Team};
use crate::utils::error::{Result, RosterError};

/// Build an assignment queue with a greedy power-balancing strategy:
/// - sort people by descending power (stable, so equal powers keep their
///   original relative order)
/// - hand each person to the team with the lowest running total
/// - break ties uniformly at random to avoid biasing the first team
///
/// Pure over its inputs; applying the queue (clearing memberships and moving
/// people step by step) is the caller's responsibility. Runs in O(P * T).
pub fn make_assignment_queue<R: Rng + ?Sized>(
    people: &[Person],
    teams: &[Team],
    rng: &mut R,
) -> Result<Vec<Assignment>> {
    if teams.is_empty() {
        return Err(RosterError::NoTeams);
    }
    let mut totals: Vec<(&str, u64)> = Vec::with_capacity(teams.len());
    let mut seen = HashSet::new();
    for team in teams {
        if team.id.is_empty() {
            return Err(RosterError::BlankTeamId);
        }
        if !seen.insert(team.id.as_str()) {
            return Err(RosterError::DuplicateTeamId(team.id.clone()));
        }
        totals.push((team.id.as_str(), 0));
    }

    let mut by_power: Vec<&Person> = people.iter().collect();
    by_power.sort_by(|a, b| b.power.cmp(&a.power));

    let mut queue = Vec::with_capacity(by_power.len());
    for person in by_power {
        let min_total = totals.iter().map(|(_, total)| *total).min().unwrap_or(0);
        let candidates: Vec<usize> = totals
            .iter()
            .enumerate()
            .filter(|(_, (_, total))| *total == min_total)
            .map(|(idx, _)| idx)
            .collect();
        let pick = candidates[rng.gen_range(0..candidates.len())];
        queue.push(Assignment {
            person: person.clone(),
            team_id: totals[pick].0.to_string(),
        });
        totals[pick].1 += u64::from(person.power);
    }

    Ok(queue)
}
