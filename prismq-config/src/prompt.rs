//! Interactive prompting for missing required settings.
//!
//! Prompting is modeled as a capability: the resolver asks a [`Prompter`]
//! for a value and falls back to the built-in default when the prompter
//! declines. The production implementation only answers when standard
//! input is attached to a terminal, so resolution never hangs in scripts
//! or CI.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

/// Capability to ask the user for a setting value.
pub trait Prompter {
    /// Ask for a value, suggesting `default`.
    ///
    /// Returns `None` when prompting is unavailable (no terminal, answers
    /// exhausted); the caller then uses the default.
    fn ask(&self, description: &str, default: &str) -> Option<String>;
}

/// Prompter that reads answers from standard input.
///
/// Declines (returns `None`) when stdin is not a terminal. An empty answer
/// accepts the suggested default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    /// Creates a stdin-backed prompter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn ask(&self, description: &str, default: &str) -> Option<String> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }

        eprint!("{description} [{default}]: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            return None;
        }

        let answer = line.trim();
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer.to_string())
        }
    }
}

/// Prompter that never answers.
///
/// Used for non-interactive resolution; every missing setting falls back
/// to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask(&self, _description: &str, _default: &str) -> Option<String> {
        None
    }
}

/// Prompter with a canned queue of answers, for tests.
///
/// Answers are handed out in order; once exhausted it declines like
/// [`NoPrompt`]. Every question asked is recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will answer with `answers`, in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Descriptions of the questions asked so far.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, description: &str, _default: &str) -> Option<String> {
        self.asked.borrow_mut().push(description.to_string());
        self.answers.borrow_mut().pop_front()
    }
}
