//! Facade: `Computer` hides three subsystems behind `start_computer`.

use crate::domain::ports::OutputSink;
use crate::utils::error::Result;

#[derive(Debug, Default)]
struct Cpu;

impl Cpu {
    fn freeze<S: OutputSink>(&self, sink: &S) -> Result<()> {
        sink.show("CPU freeze")
    }

    fn jump<S: OutputSink>(&self, sink: &S) -> Result<()> {
        sink.show("CPU jump")
    }

    fn execute<S: OutputSink>(&self, sink: &S) -> Result<()> {
        sink.show("CPU execute")
    }
}

#[derive(Debug, Default)]
struct Memory;

impl Memory {
    fn load<S: OutputSink>(&self, sink: &S, data: &str) -> Result<()> {
        sink.show(&format!("Memory loaded {}", data))
    }
}

#[derive(Debug, Default)]
struct HardDrive;

impl HardDrive {
    fn read(&self) -> String {
        "HardDrive read".to_string()
    }
}

/// Boot sequence over CPU, memory and disk stubs.
#[derive(Debug)]
pub struct Computer<S: OutputSink> {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
    sink: S,
}

impl<S: OutputSink> Computer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
            sink,
        }
    }

    /// Runs freeze, load(read), jump and execute, always in that order.
    pub fn start_computer(&self) -> Result<()> {
        tracing::debug!("Starting computer");
        self.cpu.freeze(&self.sink)?;
        self.memory.load(&self.sink, &self.hard_drive.read())?;
        self.cpu.jump(&self.sink)?;
        self.cpu.execute(&self.sink)?;
        tracing::debug!("Computer started");
        Ok(())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingSink;
    use crate::utils::error::PatternError;

    #[test]
    fn test_start_sequence_order() {
        let computer = Computer::new(RecordingSink::new());
        computer.start_computer().unwrap();

        assert_eq!(
            computer.into_sink().messages(),
            vec![
                "CPU freeze",
                "Memory loaded HardDrive read",
                "CPU jump",
                "CPU execute",
            ]
        );
    }

    #[test]
    fn test_restarting_repeats_the_sequence() {
        let sink = RecordingSink::new();
        let computer = Computer::new(&sink);
        computer.start_computer().unwrap();
        computer.start_computer().unwrap();

        let messages = sink.messages();
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[..4], messages[4..]);
    }

    struct FailingSink {
        fail_on: &'static str,
        seen: std::sync::Mutex<Vec<String>>,
    }

    impl OutputSink for FailingSink {
        fn show(&self, message: &str) -> Result<()> {
            if message == self.fail_on {
                return Err(PatternError::from(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "display closed",
                )));
            }
            self.seen.lock().unwrap().push(message.to_string());
            Ok(())
        }

        fn wait_for_input(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_stops_the_sequence() {
        let computer = Computer::new(FailingSink {
            fail_on: "CPU jump",
            seen: std::sync::Mutex::new(Vec::new()),
        });

        assert!(computer.start_computer().is_err());
        let sink = computer.into_sink();
        assert_eq!(
            *sink.seen.lock().unwrap(),
            vec!["CPU freeze", "Memory loaded HardDrive read"]
        );
    }
}
