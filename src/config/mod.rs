use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "team-roster")]
#[command(about = "Maintain a people roster and balance teams by workload")]
pub struct CliConfig {
    /// Directory holding the persisted roster state
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a person to the roster
    AddPerson {
        /// Display name; defaults to "Person #<n>"
        #[arg(long)]
        name: Option<String>,
        /// Workload weight, minimum 1
        #[arg(long)]
        power: Option<i64>,
    },
    /// Update a person's name and, optionally, power
    UpdatePerson {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        power: Option<i64>,
    },
    /// Remove a person; their team memberships are cleaned up first
    RemovePerson { id: String },
    /// Add a team
    AddTeam {
        /// Display name; defaults to "Team #<n>"
        #[arg(long)]
        name: Option<String>,
        /// Explicit color; defaults to the next free palette color
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a team's name and/or color
    UpdateTeam {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a team
    RemoveTeam { id: String },
    /// Move a person from one team to another
    Move {
        person_id: String,
        from_team_id: String,
        to_team_id: String,
    },
    /// Compute a balanced assignment queue
    Balance {
        /// Seed for reproducible tie-breaking
        #[arg(long)]
        seed: Option<u64>,
        /// Clear all memberships and apply the queue
        #[arg(long)]
        apply: bool,
    },
    /// Print the current roster
    List,
}
