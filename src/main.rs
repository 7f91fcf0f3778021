use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use team_roster::config::{CliConfig, Command};
use team_roster::utils::logger;
use team_roster::{make_assignment_queue, JsonFileStore, Roster, StateStore, TeamPatch};

fn main() {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    let store = JsonFileStore::new(config.data_dir.clone());
    let mut roster = Roster::load(store);

    if let Err(e) = run(&mut roster, config.command) {
        tracing::error!("command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run<S: StateStore>(roster: &mut Roster<S>, command: Command) -> team_roster::Result<()> {
    match command {
        Command::AddPerson { name, power } => {
            let id = roster.add_person(name.as_deref(), power);
            println!("✅ Added person {}", id);
        }
        Command::UpdatePerson { id, name, power } => {
            roster.update_person(&id, &name, power);
            println!("✅ Updated person {}", id);
        }
        Command::RemovePerson { id } => {
            roster.remove_person(&id);
            println!("✅ Removed person {}", id);
        }
        Command::AddTeam { name, color } => {
            let id = roster.add_team(name.as_deref(), color.as_deref());
            println!("✅ Added team {}", id);
        }
        Command::UpdateTeam { id, name, color } => {
            roster.update_team(
                &id,
                TeamPatch {
                    name,
                    color,
                    members: None,
                },
            );
            println!("✅ Updated team {}", id);
        }
        Command::RemoveTeam { id } => {
            roster.remove_team(&id);
            println!("✅ Removed team {}", id);
        }
        Command::Move {
            person_id,
            from_team_id,
            to_team_id,
        } => {
            roster.move_member(&person_id, &from_team_id, &to_team_id)?;
            println!("✅ Moved {} to {}", person_id, to_team_id);
        }
        Command::Balance { seed, apply } => {
            let mut rng: StdRng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let queue =
                make_assignment_queue(roster.people.as_slice(), roster.teams.as_slice(), &mut rng)?;
            for step in &queue {
                let team_name = roster
                    .teams
                    .get(&step.team_id)
                    .map(|t| t.name.as_str())
                    .unwrap_or(step.team_id.as_str());
                println!(
                    "{} (power {}) -> {}",
                    step.person.name, step.person.power, team_name
                );
            }
            if apply {
                roster.apply_assignments(&queue)?;
                println!("✅ Applied {} assignments", queue.len());
            }
        }
        Command::List => {
            println!("People ({}):", roster.people.len());
            for person in roster.people.iter() {
                println!("  {}  {} (power {})", person.id, person.name, person.power);
            }
            println!("Teams ({}):", roster.teams.len());
            for team in roster.teams.iter() {
                let color = if team.color.is_empty() {
                    "no color"
                } else {
                    team.color.as_str()
                };
                println!(
                    "  {}  {} [{}] members: {}",
                    team.id,
                    team.name,
                    color,
                    team.members.join(", ")
                );
            }
        }
    }
    Ok(())
}
