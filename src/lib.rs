pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::{ConsoleReader, ScriptedReader};
pub use core::session::{IntakeSession, SessionReport};
pub use domain::{Clock, FixedClock, Individual, InputReader, Person, Student, SystemClock};
pub use utils::error::{IntakeError, Result};
