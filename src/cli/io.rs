//! Line-oriented console used by every menu and prompt.

use std::{
    fmt,
    io::{self, BufRead, Cursor, Write},
};

use crate::cli::output::{format_message, MessageKind};
use crate::errors::MenuError;

enum Sink {
    Stdout(io::Stdout),
    Buffer(Vec<u8>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(stdout) => stdout.write(buf),
            Sink::Buffer(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(stdout) => stdout.flush(),
            Sink::Buffer(_) => Ok(()),
        }
    }
}

/// Blocking reader/writer pair. Interactive sessions use stdin/stdout; tests
/// feed a script and inspect the captured transcript.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Sink,
}

impl Console {
    pub fn stdio() -> Self {
        Self {
            input: Box::new(io::BufReader::new(io::stdin())),
            output: Sink::Stdout(io::stdout()),
        }
    }

    pub fn scripted(script: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Box::new(Cursor::new(script.into())),
            output: Sink::Buffer(Vec::new()),
        }
    }

    /// Everything written so far by a scripted console. Always empty for stdio.
    pub fn transcript(&self) -> String {
        match &self.output {
            Sink::Buffer(buffer) => String::from_utf8_lossy(buffer).into_owned(),
            Sink::Stdout(_) => String::new(),
        }
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    fn message(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        match format_message(kind, message) {
            Some(text) if kind == MessageKind::Section => {
                self.println(format!("\n{text}"))
            }
            Some(text) => self.println(text),
            None => Ok(()),
        }
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Section, title)
    }

    /// Reads one line with surrounding whitespace trimmed. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected, so the line still reaches
    /// the validator.
    pub fn read_line(&mut self) -> Result<String, MenuError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Prompts until `validator` accepts the (trimmed) input, printing each
    /// rejection before asking again.
    pub fn user_input<F>(&mut self, prompt: &str, mut validator: F) -> Result<String, MenuError>
    where
        F: FnMut(&str) -> Result<(), MenuError>,
    {
        loop {
            if !prompt.is_empty() {
                self.message(MessageKind::Prompt, prompt)?;
            }
            let input = self.read_line()?;
            match validator(&input) {
                Ok(()) => return Ok(input),
                Err(err) => self.error(err)?,
            }
        }
    }

    /// Collects successive valid inputs until `sentinel` is entered. The
    /// sentinel itself is never validated nor returned.
    pub fn user_input_loop<F>(
        &mut self,
        prompt: &str,
        sentinel: &str,
        mut validator: F,
    ) -> Result<Vec<String>, MenuError>
    where
        F: FnMut(&str) -> Result<(), MenuError>,
    {
        let mut inputs = Vec::new();
        loop {
            let input = self.user_input(prompt, |input| {
                if input == sentinel {
                    Ok(())
                } else {
                    validator(input)
                }
            })?;
            if input == sentinel {
                return Ok(inputs);
            }
            inputs.push(input);
        }
    }

    /// Asks a yes/no question until one of `y`, `yes`, `n`, `no` is entered.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, MenuError> {
        let answer = self.user_input(prompt, |input| match input.to_ascii_lowercase().as_str() {
            "y" | "yes" | "n" | "no" => Ok(()),
            _ => Err(MenuError::Validation("please answer `y` or `n`".into())),
        })?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}
