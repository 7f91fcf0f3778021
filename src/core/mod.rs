pub mod assign;
pub mod membership;
pub mod people;
pub mod roster;
pub mod teams;
