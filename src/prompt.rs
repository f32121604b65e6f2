//! Interactive prompts
//!
//! Generic over reader and writer so the question flow can be driven from
//! tests as well as from the terminal.

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line
    ///
    /// End of input is an error rather than an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(answer.trim().to_string())
    }

    /// Ask a `[y/n]` question; only `y` / `yes` (any case) count as yes
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} [y/n]", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_and_echoes_question() {
        let mut p = prompter("  2203306141 \n");
        assert_eq!(p.ask("Enter project id to export:").unwrap(), "2203306141");
        assert_eq!(
            String::from_utf8(p.into_output()).unwrap(),
            "Enter project id to export: "
        );
    }

    #[test]
    fn confirm_accepts_y_and_yes() {
        let mut p = prompter("Y\nyes\nn\n\n");
        assert!(p.confirm("Search?").unwrap());
        assert!(p.confirm("Search?").unwrap());
        assert!(!p.confirm("Search?").unwrap());
        assert!(!p.confirm("Search?").unwrap());
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.ask("Enter project name:").is_err());
    }
}
