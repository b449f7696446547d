//! Operator question/answer channel.

use std::io;

use dialoguer::Input;

use crate::error::PromptError;

/// Trait for asking the operator a question.
///
/// Answers are free-form; an empty answer is a meaningful default and is
/// returned as an empty string. Injected into the commit flow so tests can
/// script the answers.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask `question` and return the answer.
    fn ask(&self, question: &str) -> Result<String, PromptError>;

    /// Ask `question` with `initial` pre-filled for editing in place.
    fn edit(&self, question: &str, initial: &str) -> Result<String, PromptError>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_error)
    }

    fn edit(&self, question: &str, initial: &str) -> Result<String, PromptError> {
        Input::<String>::new()
            .with_prompt(question)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_error)
    }
}

/// End of input is reported as [`PromptError::Closed`].
fn map_dialoguer_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof => PromptError::Closed,
        other => PromptError::Interaction(other),
    }
}

/// What the operator chose for a generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageChoice {
    Accept,
    Retype,
    Edit,
}

impl MessageChoice {
    /// `n` retypes, `edit` edits in place, anything else (including an empty
    /// answer) accepts. Case-insensitive.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "n" => Self::Retype,
            "edit" => Self::Edit,
            _ => Self::Accept,
        }
    }
}

/// Only an explicit `n`/`N` declines; an empty answer pushes.
pub fn wants_push(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}
