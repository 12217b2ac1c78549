//! Seams between the navigator and the terminal

/// A single-choice question handed to a [`ChoiceRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub hint: Option<String>,
    pub labels: Vec<String>,
    /// Cursor position when the prompt opens
    pub initial: usize,
}

/// Outcome of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Selected(usize),
    /// The user backed out (Esc, `q`)
    Cancelled,
    /// The user asked to quit (Ctrl+C)
    Interrupted,
}

/// Asks the user to pick one of the labeled choices
///
/// Only one prompt is ever outstanding.
pub trait ChoiceRenderer {
    fn ask(&mut self, prompt: &Prompt) -> anyhow::Result<Answer>;
}

/// Display surface the navigator draws page chrome on
pub trait Screen {
    /// Start a fresh view
    fn clear(&mut self);

    /// Render the trail of page names leading to the current screen
    fn breadcrumbs(&mut self, trail: &[String]);

    /// Render an error banner above the prompt
    fn error(&mut self, message: &str);
}
