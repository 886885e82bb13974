use crate::domain::model::SinkEvent;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink that keeps every interaction in order, for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn events_guard(&self) -> MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events_guard().clone()
    }

    /// Shown messages only, in order.
    pub fn messages(&self) -> Vec<String> {
        self.events_guard()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Message(message) => Some(message.clone()),
                SinkEvent::WaitForInput => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events_guard().clear();
    }
}

impl OutputSink for RecordingSink {
    fn show(&self, message: &str) -> Result<()> {
        self.events_guard()
            .push(SinkEvent::Message(message.to_string()));
        Ok(())
    }

    fn wait_for_input(&self) -> Result<()> {
        self.events_guard().push(SinkEvent::WaitForInput);
        Ok(())
    }
}
