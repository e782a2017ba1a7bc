//! Blocking user input as an injectable capability.
//!
//! Task drivers never read stdin directly; they ask an [`Interaction`].
//! [`TerminalPrompt`] uses inquire on a TTY and plain line reads otherwise,
//! [`ScriptedAnswers`] replays canned answers.

use inquire::{InquireError, Text};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("input cancelled")]
    Cancelled,
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("failed to read input: {0}")]
    Input(String),
}

pub trait Interaction {
    /// Shows `question` and blocks until one line of input is available.
    fn ask(&mut self, question: &str) -> Result<String, InteractionError>;
}

/// Returns `true` for `yes` or `y` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Interaction for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String, InteractionError> {
        if io::stdin().is_terminal() {
            return Text::new(question).prompt().map_err(|e| match e {
                InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                    InteractionError::Cancelled
                }
                other => InteractionError::Input(other.to_string()),
            });
        }

        eprint!("{question} ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| InteractionError::Input(e.to_string()))?;

        if read == 0 {
            return Err(InteractionError::EndOfInput);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Canned answers, consumed in order.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, oldest first.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Interaction for ScriptedAnswers {
    fn ask(&mut self, question: &str) -> Result<String, InteractionError> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or(InteractionError::EndOfInput)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        for answer in ["yes", "y", "YES", "Y", "Yes", "  y\n", "yEs"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["no", "n", "", "ye", "yes please", "sure", "1"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_scripted_answers_in_order() {
        let mut answers = ScriptedAnswers::new(["y", "no"]);
        assert_eq!(answers.ask("first?").unwrap(), "y");
        assert_eq!(answers.ask("second?").unwrap(), "no");
        assert!(matches!(
            answers.ask("third?"),
            Err(InteractionError::EndOfInput)
        ));
        assert_eq!(answers.asked(), ["first?", "second?", "third?"]);
    }
}
