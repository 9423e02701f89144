pub mod dates;
pub mod error;
pub mod logger;
pub mod validation;
