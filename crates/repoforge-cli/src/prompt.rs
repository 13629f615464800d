//! Prompter implementations for the core's confirmation port.
//!
//! The scaffold flow asks exactly one question (whether to create a
//! missing model). `--yes` and `--no-interaction` replace the interactive
//! prompt with a fixed answer so the tool works in scripts and CI.

use repoforge_core::{
    application::{ApplicationError, ports::Prompter},
    error::RepoforgeResult,
};

/// Interactive confirmation on the controlling terminal.
pub struct InteractivePrompter;

impl Prompter for InteractivePrompter {
    #[cfg(feature = "interactive")]
    fn confirm(&self, question: &str) -> RepoforgeResult<bool> {
        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| {
                ApplicationError::Prompt {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// Minimal stdin fallback when built without the `interactive` feature.
    #[cfg(not(feature = "interactive"))]
    fn confirm(&self, question: &str) -> RepoforgeResult<bool> {
        use std::io::Write as _;

        let map_err = |e: std::io::Error| ApplicationError::Prompt {
            reason: e.to_string(),
        };

        print!("{question} [y/N] ");
        std::io::stdout().flush().map_err(map_err)?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).map_err(map_err)?;

        let input = input.trim().to_ascii_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

/// A prompter that always gives the same answer (`--yes` / `--no-interaction`).
pub struct FixedAnswerPrompter {
    answer: bool,
}

impl FixedAnswerPrompter {
    pub fn accept() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl Prompter for FixedAnswerPrompter {
    fn confirm(&self, _question: &str) -> RepoforgeResult<bool> {
        Ok(self.answer)
    }
}
