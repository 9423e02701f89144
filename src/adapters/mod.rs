// Adapters layer: concrete InputReader implementations.

pub mod console;
pub mod scripted;

pub use console::ConsoleReader;
pub use scripted::ScriptedReader;
