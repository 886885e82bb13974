// Adapters layer: concrete output sinks (terminal, in-memory).

pub mod console;
pub mod recording;

pub use console::{ConsoleSink, SharedInput};
pub use recording::RecordingSink;
