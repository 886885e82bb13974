use crate::core::facade::Computer;
use crate::core::factory_method::{CreatorKind, FactoryMethodDemo};
use crate::core::singleton::SingletonDemo;
use crate::domain::model::Demo;
use crate::domain::ports::{LineSource, OutputSink};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub creators: Vec<CreatorKind>,
    pub pause: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            creators: vec![CreatorKind::A, CreatorKind::B],
            pause: true,
        }
    }
}

/// Entry point that turns button clicks into demonstrations.
pub struct Shell<S: OutputSink> {
    sink: S,
    settings: ShellSettings,
}

impl<S: OutputSink> Shell<S> {
    pub fn new(sink: S, settings: ShellSettings) -> Self {
        Self { sink, settings }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handles one button click.
    pub fn click(&self, demo: Demo) -> Result<()> {
        let span = tracing::info_span!("click", demo = %demo);
        let _enter = span.enter();
        tracing::info!("Running demo");

        match demo {
            Demo::Facade => {
                // A fresh computer per click, like the original button handler.
                let computer = Computer::new(&self.sink);
                computer.start_computer()?;
            }
            Demo::FactoryMethod => {
                let lines = FactoryMethodDemo::from_kinds(&self.settings.creators)
                    .with_pause(self.settings.pause)
                    .run(&self.sink)?;
                tracing::debug!(products = lines.len(), "Factory method demo finished");
            }
            Demo::Singleton => {
                let report = SingletonDemo.run(&self.sink)?;
                if !report.all_same() {
                    tracing::warn!(?report, "Singleton returned different instances");
                }
            }
        }

        tracing::info!("Demo finished");
        Ok(())
    }

    /// Clicks every demo in order, stopping at the first failure.
    pub fn run_all(&self, demos: &[Demo]) -> Result<()> {
        for demo in demos {
            self.click(*demo)?;
        }
        Ok(())
    }

    /// Reads one command per line until `quit` or end of input.
    ///
    /// Any `BufRead` or a sink's shared input works as the reader. Returns how many demos were run.
    pub fn run_interactive<R: LineSource, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<usize> {
        write_menu(&mut writer)?;
        let mut clicks = 0;

        loop {
            write!(writer, "> ")?;
            writer.flush()?;

            let mut line = String::new();
            if reader.next_line(&mut line)? == 0 {
                writeln!(writer)?;
                break;
            }

            let command = line.trim();
            match command {
                "" => continue,
                "quit" | "exit" => break,
                "help" => write_menu(&mut writer)?,
                _ => match command.parse::<Demo>() {
                    Ok(demo) => {
                        self.click(demo)?;
                        clicks += 1;
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Unknown shell command");
                        writeln!(writer, "Unknown command `{}`. Type `help` for the list.", command)?;
                    }
                },
            }
        }

        tracing::info!(clicks, "Shell closed");
        Ok(clicks)
    }
}

fn write_menu<W: Write>(writer: &mut W) -> Result<()> {
    let buttons: Vec<&str> = Demo::ALL.iter().map(|demo| demo.as_str()).collect();
    writeln!(writer, "Buttons: {}", buttons.join(", "))?;
    writeln!(writer, "Commands: help, quit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingSink;
    use crate::domain::model::SinkEvent;
    use crate::utils::error::PatternError;
    use std::io::Cursor;

    fn shell() -> Shell<RecordingSink> {
        Shell::new(RecordingSink::new(), ShellSettings::default())
    }

    #[test]
    fn test_facade_click_boots_computer() {
        let shell = shell();
        shell.click(Demo::Facade).unwrap();

        assert_eq!(
            shell.sink().messages(),
            vec![
                "CPU freeze",
                "Memory loaded HardDrive read",
                "CPU jump",
                "CPU execute",
            ]
        );
    }

    #[test]
    fn test_factory_click_uses_configured_creators() {
        let shell = Shell::new(
            RecordingSink::new(),
            ShellSettings {
                creators: vec![CreatorKind::B],
                pause: false,
            },
        );
        shell.click(Demo::FactoryMethod).unwrap();

        assert_eq!(
            shell.sink().events(),
            vec![SinkEvent::Message("Created ConcreteProductB".to_string())]
        );
    }

    #[test]
    fn test_interactive_session() {
        let shell = shell();
        let input = Cursor::new(b"facade\nbogus\n\nhelp\nquit\nsingleton\n".to_vec());
        let mut output = Vec::new();

        let clicks = shell.run_interactive(input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(clicks, 1);
        assert!(output.contains("Unknown command `bogus`"));
        assert_eq!(output.matches("Buttons: facade, factory-method, singleton").count(), 2);
        assert_eq!(shell.sink().messages().len(), 4);
    }

    #[test]
    fn test_interactive_session_rejects_invalid_utf8() {
        let shell = shell();
        let result = shell.run_interactive(Cursor::new(vec![b'f', 0xff, b'\n']), Vec::new());

        assert!(matches!(
            result,
            Err(PatternError::IoError(ref e)) if e.kind() == std::io::ErrorKind::InvalidData
        ));
        assert!(shell.sink().messages().is_empty());
    }

    #[test]
    fn test_interactive_session_ends_at_eof() {
        let shell = shell();
        let clicks = shell
            .run_interactive(Cursor::new(b"factory-method".to_vec()), Vec::new())
            .unwrap();

        assert_eq!(clicks, 1);
        assert_eq!(
            shell.sink().messages(),
            vec!["Created ConcreteProductA", "Created ConcreteProductB"]
        );
    }
}
