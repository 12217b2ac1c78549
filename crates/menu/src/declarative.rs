//! Declarative page definitions loaded from configuration files

use crate::error::{NavError, Result};
use crate::page::{Action, Choice, Page, Params};
use crate::terminal::press_enter_to;
use serde::{Deserialize, Serialize};

/// A page described in data rather than code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Lines printed above the prompt
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,

    /// No choices makes this an informational page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceSpec>,
}

/// One entry of a [`PageSpec`]
///
/// Exactly one of `page`, `inline` or `noop` must be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceSpec {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Only valid together with `page`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<Box<PageSpec>>,

    #[serde(default)]
    pub noop: bool,
}

impl PageSpec {
    /// Build the page, validating every choice
    pub fn to_page(&self) -> Result<Page> {
        let mut page = Page {
            title: self.title.clone(),
            message: self.message.clone(),
            hint: self.hint.clone(),
            ..Page::default()
        };

        if !self.text.is_empty() {
            let lines = self.text.clone();
            // without choices nothing would hold the text on screen
            let pause = self.choices.is_empty();
            page = page.with_hook(move |_, _, _| {
                for line in &lines {
                    println!("{line}");
                }
                println!();
                if pause {
                    press_enter_to("go back")?;
                }
                Ok(())
            });
        }

        if !self.choices.is_empty() {
            let choices = self
                .choices
                .iter()
                .map(ChoiceSpec::to_choice)
                .collect::<Result<Vec<_>>>()?;
            page = page.with_choices(choices);
        }

        Ok(page)
    }
}

impl ChoiceSpec {
    pub fn to_choice(&self) -> Result<Choice> {
        let targets = [self.page.is_some(), self.inline.is_some(), self.noop]
            .into_iter()
            .filter(|set| *set)
            .count();
        if targets != 1 {
            return Err(NavError::configuration(format!(
                "choice \"{}\" must have exactly one of page, inline or noop (found {targets})",
                self.label
            )));
        }

        if self.params.is_some() && self.page.is_none() {
            return Err(NavError::configuration(format!(
                "choice \"{}\" has params but no target page",
                self.label
            )));
        }

        let action = match (&self.page, &self.inline) {
            (Some(page), _) => match &self.params {
                Some(params) => Action::page_with_params(page.clone(), params.clone()),
                None => Action::page(page.clone()),
            },
            (None, Some(inline)) => Action::inline(inline.to_page()?),
            (None, None) => Action::Noop,
        };

        Ok(Choice::new(self.label.clone(), action))
    }
}
