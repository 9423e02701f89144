// Domain layer: individuals, their validation rules and the ports they read through.

pub mod model;
pub mod ports;
pub mod student;

pub use model::{Individual, Person};
pub use ports::{Clock, FixedClock, InputReader, SharedClock, SystemClock};
pub use student::Student;
