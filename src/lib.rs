pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonFileStore, MemoryStore};
pub use core::assign::make_assignment_queue;
pub use core::roster::Roster;
pub use core::teams::TeamPatch;
pub use domain::model::{Assignment, Person, Team};
pub use domain::ports::StateStore;
pub use utils::error::{Result, RosterError};
