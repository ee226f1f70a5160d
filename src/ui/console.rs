//! Line-oriented terminal I/O
//!
//! Generic over the reader and writer so the whole game can be driven from
//! in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/response console over any line reader and writer
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print a label without a newline and read the reply
    ///
    /// Returns `None` once input is exhausted. The reply is trimmed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keep prompting until a non-empty reply or end of input
    pub fn prompt_non_empty(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                Some(reply) if reply.is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether a reply to a yes/no question means "yes"
///
/// The whole trimmed reply must be `y`, `yes`, `s` or `sim`, in any case.
pub fn is_affirmative(reply: &str) -> bool {
    const YES: [&str; 4] = ["y", "yes", "s", "sim"];
    let reply = reply.trim();
    YES.iter().any(|word| reply.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut c = console("  Brazil \nnext\n");
        assert_eq!(c.prompt("Name: ").unwrap().as_deref(), Some("Brazil"));
        assert_eq!(c.prompt("Again: ").unwrap().as_deref(), Some("next"));
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "Name: Again: ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut c = console("");
        assert_eq!(c.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("5");
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some("5"));
        assert_eq!(c.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_non_empty_skips_blank_lines() {
        let mut c = console("\n   \nRed\n");
        assert_eq!(c.prompt_non_empty("Color: ").unwrap().as_deref(), Some("Red"));
    }

    #[test]
    fn test_prompt_non_empty_eof() {
        let mut c = console("\n\n");
        assert_eq!(c.prompt_non_empty("Color: ").unwrap(), None);
    }

    #[test]
    fn test_say_appends_newline() {
        let mut c = console("");
        c.say("hello").unwrap();
        assert_eq!(c.output().as_slice(), b"hello\n");
    }

    #[test]
    fn test_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("s"));
        assert!(is_affirmative(" S "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("quit"));
        assert!(is_affirmative("SIM"));
    }

    #[test]
    fn test_affirmative_needs_whole_word() {
        assert!(!is_affirmative("stop"));
        assert!(!is_affirmative("sair"));
        assert!(!is_affirmative("yesterday"));
        assert!(!is_affirmative("no"));
    }
}
