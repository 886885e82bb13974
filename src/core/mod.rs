pub mod facade;
pub mod factory_method;
pub mod shell;
pub mod singleton;

pub use crate::domain::model::{Demo, ProductKind, SinkEvent};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
