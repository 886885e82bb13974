use crate::domain::ports::{LineSource, OutputSink};
use crate::utils::error::Result;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const ACKNOWLEDGE_PROMPT: &str = "[press Enter to acknowledge]";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";

/// Handle on a sink's reader, so the interactive shell reads commands from
/// the same buffer that modal acknowledgements consume.
#[derive(Debug)]
pub struct SharedInput<R> {
    reader: Arc<Mutex<R>>,
}

impl<R> Clone for SharedInput<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R: BufRead> LineSource for SharedInput<R> {
    fn next_line(&mut self, line: &mut String) -> std::io::Result<usize> {
        self.reader
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(line)
    }
}

/// Line-oriented sink over any buffered reader and writer.
///
/// In modal mode every message blocks until a line is read, which is the
/// terminal equivalent of a message box. End of input counts as an
/// acknowledgement so piped runs never hang. Input that is not valid UTF-8
/// is an error.
#[derive(Debug)]
pub struct ConsoleSink<R, W> {
    input: SharedInput<R>,
    writer: Mutex<W>,
    modal: bool,
}

impl ConsoleSink<BufReader<Stdin>, Stdout> {
    pub fn stdio(modal: bool) -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout(), modal)
    }
}

impl<R, W> ConsoleSink<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W, modal: bool) -> Self {
        Self {
            input: SharedInput {
                reader: Arc::new(Mutex::new(reader)),
            },
            writer: Mutex::new(writer),
            modal,
        }
    }

    /// Reader handle for anything else that takes input from this terminal.
    pub fn input(&self) -> SharedInput<R> {
        self.input.clone()
    }

    /// Returns the writer, plus the reader unless an `input()` handle is still alive.
    pub fn into_inner(self) -> (Option<R>, W) {
        let reader = Arc::try_unwrap(self.input.reader)
            .ok()
            .map(|reader| reader.into_inner().unwrap_or_else(PoisonError::into_inner));
        (
            reader,
            self.writer.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn writer(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn prompt_and_read(&self, prompt: &str) -> Result<()> {
        {
            let mut writer = self.writer();
            writeln!(writer, "{}", prompt)?;
            writer.flush()?;
        }

        let mut line = String::new();
        if self.input().next_line(&mut line)? == 0 {
            tracing::debug!("Input closed, treating as acknowledged");
        }
        Ok(())
    }
}

impl<R, W> OutputSink for ConsoleSink<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn show(&self, message: &str) -> Result<()> {
        {
            let mut writer = self.writer();
            writeln!(writer, "{}", message)?;
            writer.flush()?;
        }
        if self.modal {
            self.prompt_and_read(ACKNOWLEDGE_PROMPT)?;
        }
        Ok(())
    }

    fn wait_for_input(&self) -> Result<()> {
        self.prompt_and_read(CONTINUE_PROMPT)
    }
}
