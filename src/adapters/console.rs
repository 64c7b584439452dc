use crate::domain::ports::Console;
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

const DIVIDER: &str = "------------------------------------------------------------";

/// A [`Console`] over any reader/writer pair; `stdio()` for the terminal.
pub struct TerminalConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Prompt helpers shared by every console dialogue.
pub trait Prompt: Console {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.write_line(&format!("{}: ", question))?;
        self.read_line()?.ok_or(AppError::InputClosed)
    }

    fn divider(&mut self) -> Result<()> {
        self.write_line(DIVIDER)
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.divider()?;
        self.write_line(text)?;
        self.divider()
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.write_line(&format!("FEL: {}", text))
    }
}

impl<C: Console + ?Sized> Prompt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_question_and_reads_answer() {
        let mut console = TerminalConsole::new(Cursor::new("Ingvar Infå\r\n"), Vec::new());

        let answer = console.ask("Ange spelarens namn").unwrap();
        assert_eq!(answer, "Ingvar Infå");

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Ange spelarens namn: \n");
    }

    #[test]
    fn test_ask_after_end_of_input() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.ask("Fråga"), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_heading_and_error_format() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new());
        console.heading("Runda 1:").unwrap();
        console.error("Fel svar").unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1], "Runda 1:");
        assert_eq!(lines[3], "FEL: Fel svar");
    }
}
