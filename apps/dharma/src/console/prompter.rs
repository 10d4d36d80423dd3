use crossterm::style::Stylize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::AppError;

/// Word that ends a list entry loop, compared case-insensitively.
const LIST_TERMINATOR: &str = "done";

/// Line-oriented question/answer loop over any async reader and writer.
///
/// Production wires it to stdin/stdout; tests use byte slices and `Vec<u8>`.
/// End of input is reported as `AppError::Interrupted`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes already-rendered text and flushes.
    pub async fn say(&mut self, text: &str) -> Result<(), AppError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Asks one question and returns the answer without its line ending.
    pub async fn ask(&mut self, question: &str) -> Result<String, AppError> {
        self.say(&format!("{} {} ", "?".green().bold(), question.bold()))
            .await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(AppError::Interrupted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Repeats `label` until an empty answer or `done`. Answers are trimmed.
    pub async fn ask_list(&mut self, label: &str) -> Result<Vec<String>, AppError> {
        let mut items = Vec::new();
        loop {
            let answer = self.ask(label).await?;
            let answer = answer.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case(LIST_TERMINATOR) {
                return Ok(items);
            }
            items.push(answer.to_string());
        }
    }

    /// Yes/no question. Only `y` or `yes` (any case) accept; the default is no.
    pub async fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        let answer = self.ask(&format!("{question} (y/N)")).await?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Gives the writer back, for inspecting test output.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &'static str) -> Prompter<&'static [u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_ask_strips_line_ending() {
        let mut p = prompter("Ada Lovelace\r\nnext\n");
        assert_eq!(p.ask("What's your name?").await.unwrap(), "Ada Lovelace");
        assert_eq!(p.ask("Again?").await.unwrap(), "next");
    }

    #[tokio::test]
    async fn test_ask_writes_question() {
        let mut p = prompter("x\n");
        p.ask("What's your name?").await.unwrap();
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert!(out.contains("What's your name?"));
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_accepted() {
        let mut p = prompter("final");
        assert_eq!(p.ask("Q").await.unwrap(), "final");
    }

    #[tokio::test]
    async fn test_end_of_input_is_interrupt() {
        let mut p = prompter("");
        let err = p.ask("Q").await.unwrap_err();
        assert!(err.is_interrupt());
    }

    #[tokio::test]
    async fn test_list_stops_on_done_any_case() {
        let mut p = prompter("Rust\n  Public speaking \nDONE\nignored\n");
        let items = p.ask_list("Skill:").await.unwrap();
        assert_eq!(items, vec!["Rust", "Public speaking"]);
        // The terminator consumed only its own line
        assert_eq!(p.ask("Q").await.unwrap(), "ignored");
    }

    #[tokio::test]
    async fn test_list_stops_on_empty_line() {
        let mut p = prompter("\nRust\n");
        assert!(p.ask_list("Skill:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_interrupted_by_end_of_input() {
        let mut p = prompter("Rust\n");
        assert!(p.ask_list("Skill:").await.unwrap_err().is_interrupt());
    }

    #[tokio::test]
    async fn test_confirm() {
        for (input, expected) in [
            ("y\n", true),
            ("YES\n", true),
            (" yes \n", true),
            ("n\n", false),
            ("\n", false),
            ("sure\n", false),
        ] {
            let mut p = prompter(input);
            assert_eq!(p.confirm("Save?").await.unwrap(), expected, "input {input:?}");
        }
    }
}
