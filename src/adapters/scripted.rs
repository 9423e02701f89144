use crate::domain::ports::InputReader;
use crate::utils::error::{IntakeError, Result};
use std::collections::VecDeque;
use std::path::Path;

/// Answers prompts from a prepared list and keeps a transcript of
/// everything asked and shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    echo: bool,
}

impl ScriptedReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            echo: false,
        }
    }

    /// One answer per line; a trailing newline does not add an empty answer.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            let path = path.as_ref().display();
            IntakeError::config(format!("cannot read answers file {}: {}", path, e))
        })?;
        Ok(Self::new(content.lines()))
    }

    /// Mirror prompts, answers and output to stdout as they happen.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.answers.pop_front();
        let entry = format!("{}{}", prompt, answer.as_deref().unwrap_or_default());
        if self.echo {
            println!("{}", entry);
        }
        self.transcript.push(entry);
        Ok(answer)
    }

    fn show(&mut self, text: &str) -> Result<()> {
        if self.echo {
            println!("{}", text);
        }
        self.transcript.push(text.to_string());
        Ok(())
    }
}
