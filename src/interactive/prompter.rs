//! The prompting seam between interactive flows and the terminal.

use crate::error::{NetopsError, Result};
use std::io::{BufRead, Write};

/// Collects answers for an interactive flow.
///
/// The standard implementation reads the terminal; tests use a scripted
/// implementation. Flows only ever talk to this trait.
pub trait Prompter {
    /// Ask for free text. Returns the trimmed answer (possibly empty).
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask the user to pick one of `options`. An empty answer picks
    /// `default`.
    fn select(&mut self, prompt: &str, options: &[String], default: &str) -> Result<String>;

    /// Ask a yes/no question. An empty answer picks `default`.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompter over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdPrompter;

impl StdPrompter {
    /// Create a terminal-backed prompter.
    pub fn new() -> Self {
        Self
    }

    fn read_answer(&self) -> Result<String> {
        std::io::stdout()
            .flush()
            .map_err(|e| NetopsError::UserError(format!("failed to flush stdout: {}", e)))?;

        let mut answer = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| NetopsError::UserError(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Err(NetopsError::UserError("input stream closed".to_string()));
        }
        Ok(answer.trim().to_string())
    }
}

impl Prompter for StdPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        self.read_answer()
    }

    fn select(&mut self, prompt: &str, options: &[String], default: &str) -> Result<String> {
        println!("{}:", prompt);
        for (i, option) in options.iter().enumerate() {
            let marker = if option == default { " (default)" } else { "" };
            println!("  {}. {}{}", i + 1, option, marker);
        }

        loop {
            print!("Select [1-{}]: ", options.len());
            let answer = self.read_answer()?;

            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if let Ok(index) = answer.parse::<usize>()
                && (1..=options.len()).contains(&index)
            {
                return Ok(options[index - 1].clone());
            }
            if let Some(option) = options.iter().find(|option| *option == &answer) {
                return Ok(option.clone());
            }
            println!(
                "Please enter a number between 1 and {}, or an option name.",
                options.len()
            );
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{} {}: ", prompt, hint);
        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Scripted prompter for tests: pops pre-canned answers in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn pop(&mut self, prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| NetopsError::UserError(format!("no scripted answer for '{}'", prompt)))
    }

    /// True when every scripted answer was consumed.
    pub fn exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(self.pop(prompt)?.trim().to_string())
    }

    fn select(&mut self, prompt: &str, options: &[String], default: &str) -> Result<String> {
        let answer = self.pop(prompt)?;
        if answer.is_empty() {
            return Ok(default.to_string());
        }
        options
            .iter()
            .find(|option| **option == answer)
            .cloned()
            .ok_or_else(|| {
                NetopsError::UserError(format!(
                    "scripted answer '{}' is not an option for '{}'",
                    answer, prompt
                ))
            })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = self.pop(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}
