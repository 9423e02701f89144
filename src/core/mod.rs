pub mod session;

pub use crate::domain::model::{Individual, Person};
pub use crate::domain::ports::{Clock, InputReader};
pub use crate::utils::error::Result;
pub use session::{IntakeSession, SessionReport};
