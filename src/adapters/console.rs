use crate::domain::ports::InputReader;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Line-oriented reader over any buffered input and output pair.
pub struct ConsoleReader<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsoleReader<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InputReader for ConsoleReader<R, W> {
    /// Lines that are not valid UTF-8 are reported and asked for again.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }

            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line)),
                Err(e) => {
                    tracing::warn!("Re-prompting after undecodable input: {}", e);
                    self.show("Input is not valid UTF-8 text. Please try again.")?;
                }
            }
        }
    }

    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleReader<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut reader = console("Olena\r\nPetrenko\n");
        assert_eq!(reader.read_line("a: ").unwrap().as_deref(), Some("Olena"));
        assert_eq!(reader.read_line("b: ").unwrap().as_deref(), Some("Petrenko"));
        assert_eq!(reader.read_line("c: ").unwrap(), None);
        let output = String::from_utf8(reader.into_output()).unwrap();
        assert!(output.starts_with("a: b: c: "));
    }

    #[test]
    fn test_read_integer_reprompts_with_diagnostic() {
        let mut reader = console("twenty\n\n 2021 \n");
        assert_eq!(reader.read_integer("Year: ").unwrap(), 2021);
        let output = String::from_utf8(reader.into_output()).unwrap();
        assert_eq!(output.matches("Year: ").count(), 3);
        assert!(output.contains("'twenty' is not a valid whole number. Please try again."));
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        let mut input = vec![0xCE, 0xEB, 0xE5, 0xED, 0xE0, b'\n'];
        input.extend_from_slice(b"2021\n");
        let mut reader = ConsoleReader::new(Cursor::new(input), Vec::<u8>::new());

        assert_eq!(reader.read_integer("Year: ").unwrap(), 2021);
        let output = String::from_utf8(reader.into_output()).unwrap();
        assert_eq!(output.matches("Year: ").count(), 2);
        assert!(output.contains("Input is not valid UTF-8 text. Please try again."));
    }

    #[test]
    fn test_non_utf8_free_text_is_reprompted() {
        let mut input = vec![0xCF, 0xE5, 0xF2, 0xF0, b'\r', b'\n'];
        input.extend_from_slice("Петренко\r\n".as_bytes());
        let mut reader = ConsoleReader::new(Cursor::new(input), Vec::<u8>::new());
        assert_eq!(reader.read_string("Surname: ").unwrap(), "Петренко");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = console("x");
        assert_eq!(reader.read_letter("Letter: ").unwrap(), 'x');
    }
}
