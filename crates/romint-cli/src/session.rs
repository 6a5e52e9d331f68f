//! Interactive conversion session
//!
//! Reads lines from any `BufRead` and writes prompts and results to any
//! `Write`, so the whole dialogue can be driven from tests. Conversion errors
//! are reported and the user is prompted again; only `exit` (confirmed) or
//! end of input ends the session.

use romint_formatter::format_str;
use romint_parser::parse;
use romint_symbols::RomanError;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    RomanToInteger,
    IntegerToRoman,
}

impl Mode {
    /// Mode selected by the menu answer `1` or `2`
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::RomanToInteger),
            "2" => Some(Self::IntegerToRoman),
            _ => None,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::RomanToInteger => Self::IntegerToRoman,
            Self::IntegerToRoman => Self::RomanToInteger,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RomanToInteger => "Roman -> Integer",
            Self::IntegerToRoman => "Integer -> Roman",
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Self::RomanToInteger => "Enter a Roman numeral: ",
            Self::IntegerToRoman => "Enter an integer (1-3999): ",
        }
    }

    /// Convert one line of user input in this direction
    ///
    /// # Errors
    ///
    /// Returns the `RomanError` raised by the parser or formatter
    pub fn convert(self, input: &str) -> Result<String, RomanError> {
        match self {
            Self::RomanToInteger => parse(input).map(|value| value.to_string()),
            Self::IntegerToRoman => format_str(input),
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the dialogue until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if reading input or writing output fails
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Roman <-> Integer Converter")?;
        writeln!(self.output, "Type 'exit' anytime.")?;

        if let Some(mut mode) = self.choose_mode()? {
            while let Some(line) = self.prompt(mode.prompt())? {
                if line.eq_ignore_ascii_case("exit") {
                    match self.confirm("Exit the program?")? {
                        Some(false) => {}
                        Some(true) | None => break,
                    }
                    let question = format!("Switch to {}?", mode.other().label());
                    match self.confirm(&question)? {
                        Some(true) => {
                            mode = mode.other();
                            debug!(?mode, "switched mode");
                        }
                        Some(false) => {}
                        None => break,
                    }
                    continue;
                }

                match mode.convert(&line) {
                    Ok(result) => writeln!(self.output, "Result: {result}")?,
                    Err(err) => {
                        warn!(input = %line, error = %err, "conversion failed");
                        writeln!(self.output, "Error: {err}")?;
                    }
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn choose_mode(&mut self) -> io::Result<Option<Mode>> {
        loop {
            let Some(choice) =
                self.prompt("Choose conversion (1 = Roman -> Integer, 2 = Integer -> Roman): ")?
            else {
                return Ok(None);
            };

            if choice.eq_ignore_ascii_case("exit") {
                match self.confirm("Do you really want to exit?")? {
                    Some(false) => continue,
                    Some(true) | None => return Ok(None),
                }
            }

            if let Some(mode) = Mode::from_choice(&choice) {
                debug!(?mode, "selected mode");
                return Ok(Some(mode));
            }
            writeln!(self.output, "Invalid mode. Please enter 1 or 2.")?;
        }
    }

    /// Ask a yes/no question until answered, `None` at end of input
    fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(&format!("{question} (y/n): "))? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD and are reported by the
    /// converter like any other invalid character.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
