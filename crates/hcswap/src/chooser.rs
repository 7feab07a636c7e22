//! Single-choice prompts
//!
//! Every decision in a session goes through [`Chooser::choose`]. A `None`
//! answer means the user backed out and is never an error.

use inquire::{InquireError, Select};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("PROMPT_FAILED: {0}")]
    Inquire(#[from] InquireError),

    #[error("PROMPT_FAILED: '{answer}' is not an option of '{label}'")]
    UnknownAnswer { label: String, answer: String },
}

pub trait Chooser {
    /// Presents `options` under `label` and returns the chosen one
    ///
    /// Returns `Ok(None)` on cancellation.
    fn choose(&mut self, label: &str, options: &[String]) -> Result<Option<String>, PromptError>;
}

/// Terminal prompts via `inquire`
#[derive(Debug, Default)]
pub struct InquireChooser;

impl Chooser for InquireChooser {
    fn choose(&mut self, label: &str, options: &[String]) -> Result<Option<String>, PromptError> {
        let selection = Select::new(label, options.to_vec())
            .with_help_message("Use ↑/↓ to navigate, Enter to select, Esc to quit")
            .prompt();

        match selection {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// A prompt as it was presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub options: Vec<String>,
}

/// Answers prompts from a fixed script and records what was asked
///
/// Once the script runs out every prompt is answered with a cancellation.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: VecDeque<String>,
    prompts: Vec<Prompt>,
}

impl ScriptedChooser {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, label: &str, options: &[String]) -> Result<Option<String>, PromptError> {
        self.prompts.push(Prompt {
            label: label.to_string(),
            options: options.to_vec(),
        });

        let Some(answer) = self.answers.pop_front() else {
            return Ok(None);
        };

        if options.contains(&answer) {
            Ok(Some(answer))
        } else {
            Err(PromptError::UnknownAnswer {
                label: label.to_string(),
                answer,
            })
        }
    }
}
