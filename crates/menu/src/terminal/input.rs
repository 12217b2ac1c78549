//! Input handling on top of dialoguer

use super::theme::DefaultTheme;
use crate::renderer::{Answer, ChoiceRenderer, Prompt};
use colored::*;
use dialoguer::{Input, Select};
use std::io;

/// [`ChoiceRenderer`] drawing an arrow-key select list
///
/// Esc and `q` cancel the prompt; Ctrl+C is reported as an interrupt.
#[derive(Default)]
pub struct DialoguerRenderer {
    theme: DefaultTheme,
}

impl DialoguerRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChoiceRenderer for DialoguerRenderer {
    fn ask(&mut self, prompt: &Prompt) -> anyhow::Result<Answer> {
        if let Some(hint) = &prompt.hint {
            println!("{}", hint.dimmed());
            println!();
        }

        let selection = Select::with_theme(self.theme.dialoguer_theme())
            .with_prompt(&prompt.message)
            .items(&prompt.labels)
            .default(prompt.initial)
            .interact_opt();

        match selection {
            Ok(Some(index)) => Ok(Answer::Selected(index)),
            Ok(None) => Ok(Answer::Cancelled),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                Ok(Answer::Interrupted)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Wait for Enter before continuing
pub fn press_enter_to(action: &str) -> anyhow::Result<()> {
    let theme = DefaultTheme::default();
    Input::<String>::with_theme(theme.dialoguer_theme())
        .with_prompt(format!("Press Enter to {action}"))
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
