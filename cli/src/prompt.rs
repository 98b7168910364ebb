//! Console prompts that block until a valid value is entered.
//!
//! Every field prompt prints its text, reads one line and hands it to
//! `crate::input`. A rejected line prints the reason and the same prompt
//! again. There is no retry limit and no default value. Bytes that are not
//! UTF-8 are replaced, never fatal. A closed input stream ends the wait
//! with `io::ErrorKind::UnexpectedEof`.

use std::io::{self, BufRead, Write};

use crate::input::{self, InputError};

const CHOICE_RETRY: &str = "Invalid option. Enter a number:";

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads menu selections until one is an integer. Range checking is
    /// left to the caller.
    pub fn choice(&mut self) -> io::Result<i64> {
        loop {
            let line = self.read_line()?;
            match input::parse_int(&line) {
                Ok(choice) => return Ok(choice),
                Err(_) => {
                    writeln!(self.output, "{CHOICE_RETRY}")?;
                    self.output.flush()?;
                }
            }
        }
    }

    pub fn integer(&mut self, prompt: &str) -> io::Result<i64> {
        self.ask(prompt, input::parse_int)
    }

    pub fn boolean(&mut self, prompt: &str) -> io::Result<bool> {
        self.ask(prompt, input::parse_bool)
    }

    pub fn title(&mut self, prompt: &str) -> io::Result<String> {
        self.ask(prompt, input::parse_title)
    }

    fn ask<T>(&mut self, prompt: &str, parse: fn(&str) -> Result<T, InputError>) -> io::Result<T> {
        loop {
            writeln!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed"));
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        raw_console(script.as_bytes())
    }

    fn raw_console(bytes: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(bytes.to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn integer_reprompts_once_per_invalid_line() {
        let mut c = console("abc\n\n4.2\n-9\n");
        assert_eq!(c.integer("User id:").unwrap(), -9);

        let out = printed(c);
        assert_eq!(out.matches("User id:").count(), 4);
        assert_eq!(out.matches("Enter a whole number.").count(), 3);
    }

    #[test]
    fn integer_accepts_zero_first_time() {
        let mut c = console("0\n");
        assert_eq!(c.integer("Id:").unwrap(), 0);
        assert_eq!(printed(c), "Id:\n");
    }

    #[test]
    fn boolean_rejects_numeric_and_yes() {
        let mut c = console("1\n0\nyes\nTrue\n");
        assert!(c.boolean("Done? (true/false):").unwrap());

        let out = printed(c);
        assert_eq!(out.matches("Done? (true/false):").count(), 4);
        assert_eq!(out.matches("Enter 'true' or 'false'.").count(), 3);
    }

    #[test]
    fn title_waits_for_non_empty_line() {
        let mut c = console("\n\nBuy milk\n");
        assert_eq!(c.title("Title:").unwrap(), "Buy milk");
        assert_eq!(printed(c).matches("Title:").count(), 3);
    }

    #[test]
    fn choice_prints_retry_message_without_prompt() {
        let mut c = console("x\ny\n3\n");
        assert_eq!(c.choice().unwrap(), 3);
        assert_eq!(printed(c), format!("{CHOICE_RETRY}\n{CHOICE_RETRY}\n"));
    }

    #[test]
    fn closed_input_is_unexpected_eof() {
        let mut c = console("nope\n");
        let err = c.integer("Id:").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn invalid_utf8_choice_is_retried() {
        let mut c = raw_console(b"\xff\n2\n");
        assert_eq!(c.choice().unwrap(), 2);
        assert_eq!(printed(c), format!("{CHOICE_RETRY}\n"));
    }

    #[test]
    fn invalid_utf8_title_is_kept_with_replacement() {
        let mut c = raw_console(b"caf\xe9\nBuy milk\n");
        assert_eq!(c.title("Title:").unwrap(), "caf\u{FFFD}");
        assert_eq!(c.title("Title:").unwrap(), "Buy milk");
    }

    #[test]
    fn invalid_utf8_boolean_is_reasked() {
        let mut c = raw_console(b"tr\xffue\nfalse\n");
        assert!(!c.boolean("Done?").unwrap());
        assert_eq!(printed(c).matches("Done?").count(), 2);
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let mut c = console("12");
        assert_eq!(c.integer("Id:").unwrap(), 12);
    }
}
