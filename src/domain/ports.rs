use crate::utils::error::Result;
use std::io::BufRead;
use std::sync::Arc;

/// Where demonstrations send their user-visible output.
///
/// Stands in for message boxes and console writes so every pattern can be
/// driven headless in tests.
pub trait OutputSink: Send + Sync {
    /// Shows one message. Modal sinks block until it is acknowledged.
    fn show(&self, message: &str) -> Result<()>;

    /// Blocks until the user provides input.
    fn wait_for_input(&self) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &S {
    fn show(&self, message: &str) -> Result<()> {
        (**self).show(message)
    }

    fn wait_for_input(&self) -> Result<()> {
        (**self).wait_for_input()
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Arc<S> {
    fn show(&self, message: &str) -> Result<()> {
        (**self).show(message)
    }

    fn wait_for_input(&self) -> Result<()> {
        (**self).wait_for_input()
    }
}

/// Line-based user input for the interactive shell.
pub trait LineSource {
    /// Appends the next line, newline included, to `line`. Returns 0 at end of input.
    fn next_line(&mut self, line: &mut String) -> std::io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self, line: &mut String) -> std::io::Result<usize> {
        self.read_line(line)
    }
}
