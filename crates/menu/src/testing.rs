//! Test doubles for the renderer and screen seams

use crate::renderer::{Answer, ChoiceRenderer, Prompt, Screen};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct Script {
    answers: VecDeque<Answer>,
    prompts: Vec<Prompt>,
}

/// Replays canned answers and records every prompt it was asked
///
/// Once the script runs dry every prompt is cancelled, which walks the
/// navigator back until it exits.
#[derive(Clone, Default)]
pub struct ScriptedRenderer {
    script: Rc<RefCell<Script>>,
}

impl ScriptedRenderer {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        let script = Script {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        };
        Self {
            script: Rc::new(RefCell::new(script)),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.script.borrow().prompts.clone()
    }
}

impl ChoiceRenderer for ScriptedRenderer {
    fn ask(&mut self, prompt: &Prompt) -> anyhow::Result<Answer> {
        let mut script = self.script.borrow_mut();
        script.prompts.push(prompt.clone());
        Ok(script.answers.pop_front().unwrap_or(Answer::Cancelled))
    }
}

/// Something drawn on a [`RecordingScreen`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Clear,
    Breadcrumbs(Vec<String>),
    Error(String),
}

#[derive(Clone, Default)]
pub struct RecordingScreen {
    events: Rc<RefCell<Vec<ScreenEvent>>>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ScreenEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) {
        self.events.borrow_mut().push(ScreenEvent::Clear);
    }

    fn breadcrumbs(&mut self, trail: &[String]) {
        self.events
            .borrow_mut()
            .push(ScreenEvent::Breadcrumbs(trail.to_vec()));
    }

    fn error(&mut self, message: &str) {
        self.events
            .borrow_mut()
            .push(ScreenEvent::Error(message.to_string()));
    }
}

pub fn select(index: usize) -> Answer {
    Answer::Selected(index)
}
