pub mod colors;
pub mod error;
pub mod id;
pub mod logger;
