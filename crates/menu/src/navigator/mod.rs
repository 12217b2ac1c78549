//! Page navigation engine
//!
//! The navigator resolves a page id into choices, runs the page's pre-render
//! hook, asks the [`ChoiceRenderer`] for an answer and turns that answer into
//! the next transition:
//!
//! - forward navigation pushes a history item,
//! - cancellation pops one,
//! - no-op and callback choices redraw the page at the same depth.
//!
//! Failures while opening a target page never escape: the page the user was
//! looking at is redrawn with an error banner instead.
//!
//! The main flow is a loop over `Step` values. A pre-render hook may call
//! back into [`Navigator::navigate_to`] or [`Navigator::navigate_back`]; while
//! a hook runs those calls only record the requested step, and the render
//! hands it to the loop once the hook returns instead of prompting. Hooks
//! that redirect therefore never nest loops on the call stack.

use crate::error::{NavError, Result};
use crate::history::{History, HistoryItem};
use crate::page::{Action, Choice, Page, Params, State};
use crate::registry::PageRegistry;
use crate::renderer::{Answer, ChoiceRenderer, Prompt, Screen};
use std::rc::Rc;
use tracing::{debug, info, warn};


/// Prompt message used when a page sets neither a message nor a title
pub const DEFAULT_MESSAGE: &str = "Choose an option";

/// How a navigation affects the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryUpdate {
    /// Record a new visit
    #[default]
    Push,
    /// Remember `index` as the cursor of the current screen, then record a new visit
    PushFrom(usize),
    /// Redraw in place
    Skip,
}

impl HistoryUpdate {
    fn pushes(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// Options for [`Navigator::navigate_to`]
#[derive(Debug, Clone, Default)]
pub struct NavigateOptions {
    pub history: HistoryUpdate,
    pub params: Params,
    pub state: State,
    /// Initial cursor position of the prompt
    pub selected: Option<usize>,
    /// Banner shown above the prompt
    pub error: Option<String>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, history: HistoryUpdate) -> Self {
        self.history = history;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// Lifecycle of the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    /// A prompt is outstanding
    Rendering,
    Exited,
}

/// A page looked up and with its choices evaluated, ready to render
#[derive(Debug, Clone)]
pub struct Resolved {
    pub page_id: String,
    pub page: Rc<Page>,
    /// `None` for informational pages
    pub choices: Option<Vec<Choice>>,
}

/// One unit of work for the drive loop
enum Step {
    /// Redraw a page, going back one level if it can no longer be resolved
    Visit {
        page_id: String,
        options: NavigateOptions,
    },
    Render {
        resolved: Resolved,
        options: NavigateOptions,
    },
    Back {
        error: Option<String>,
    },
}

impl Step {
    /// Attach `banner` unless the step already carries one
    fn with_banner(mut self, banner: Option<String>) -> Self {
        let slot = match &mut self {
            Step::Visit { options, .. } | Step::Render { options, .. } => &mut options.error,
            Step::Back { error } => error,
        };
        if slot.is_none() {
            *slot = banner;
        }
        self
    }
}

/// Synthetic registry id of an inline page
///
/// The same menu slot always maps to the same id, so re-selecting it simply
/// overwrites the earlier registration.
pub fn inline_page_id(parent: &str, index: usize) -> String {
    format!("{parent}/{index}")
}

/// Stack-based menu navigator
pub struct Navigator {
    registry: PageRegistry,
    history: History,
    initial_page: Option<String>,
    default_message: String,
    default_hint: Option<String>,
    renderer: Box<dyn ChoiceRenderer>,
    screen: Box<dyn Screen>,
    state: NavState,
    in_hook: bool,
    // navigation requested by the running hook
    pending: Option<Step>,
}

impl Navigator {
    pub fn new(renderer: impl ChoiceRenderer + 'static, screen: impl Screen + 'static) -> Self {
        Self {
            registry: PageRegistry::new(),
            history: History::new(),
            initial_page: None,
            default_message: DEFAULT_MESSAGE.to_string(),
            default_hint: None,
            renderer: Box::new(renderer),
            screen: Box::new(screen),
            state: NavState::Idle,
            in_hook: false,
            pending: None,
        }
    }

    pub fn with_initial_page(mut self, page_id: impl Into<String>) -> Self {
        self.initial_page = Some(page_id.into());
        self
    }

    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    pub fn with_default_hint(mut self, hint: impl Into<String>) -> Self {
        self.default_hint = Some(hint.into());
        self
    }

    /// Register a page, replacing any page with the same id
    pub fn register(&mut self, page_id: impl Into<String>, page: impl Into<Rc<Page>>) {
        self.registry.register(page_id, page);
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_exited(&self) -> bool {
        self.state == NavState::Exited
    }

    /// Id of the page on top of the history stack
    pub fn current_page(&self) -> Option<&str> {
        self.history.top().map(|item| item.page_id.as_str())
    }

    /// Request termination; any navigation in progress stops before prompting
    pub fn exit(&mut self) {
        if !self.is_exited() {
            info!(depth = self.history.len(), "exit requested");
            self.state = NavState::Exited;
        }
    }

    /// Show the initial page
    ///
    /// Fails with [`NavError::Configuration`] when no initial page is set, and
    /// with the resolution error when the initial page cannot be opened.
    pub fn init(&mut self) -> Result<()> {
        let Some(initial) = self.initial_page.clone() else {
            return Err(NavError::configuration("no initial page configured"));
        };
        info!(page = %initial, "starting navigation");
        self.navigate_to(&initial, NavigateOptions::default())
    }

    /// Run until the history is exhausted or an exit is requested
    ///
    /// Informational pages leave the navigator idle; they are dismissed here
    /// by going back one level.
    pub fn run(&mut self) -> Result<()> {
        self.init()?;
        while !self.is_exited() {
            debug!(page = ?self.current_page(), "dismissing informational page");
            self.navigate_back(None)?;
        }
        Ok(())
    }

    /// Resolve a page and its current choices without touching any state
    pub fn attempt(&self, page_id: &str) -> Result<Resolved> {
        let page = self
            .registry
            .get(page_id)
            .ok_or_else(|| NavError::page_not_found(page_id))?;
        let choices = PageRegistry::resolve_actions(page_id, &page)?;

        Ok(Resolved {
            page_id: page_id.to_string(),
            page,
            choices,
        })
    }

    /// Open `page_id` and keep navigating until the session settles
    ///
    /// Resolution failures of `page_id` itself are returned to the caller.
    /// Called from a pre-render hook, the page opens once the hook returns.
    pub fn navigate_to(&mut self, page_id: &str, options: NavigateOptions) -> Result<()> {
        let resolved = self.attempt(page_id)?;
        self.schedule(Step::Render { resolved, options })
    }

    /// Leave the current page, redrawing the previous one
    ///
    /// Does nothing once the navigator has exited. Popping the last page
    /// exits. Called from a pre-render hook, the page is left once the hook
    /// returns.
    pub fn navigate_back(&mut self, error: Option<String>) -> Result<()> {
        self.schedule(Step::Back { error })
    }

    fn schedule(&mut self, step: Step) -> Result<()> {
        if self.in_hook {
            if self.pending.replace(step).is_some() {
                debug!("hook requested another navigation, keeping the latest");
            }
            return Ok(());
        }
        self.drive(step)
    }

    fn drive(&mut self, first: Step) -> Result<()> {
        let mut next = Some(first);

        while let Some(step) = next.take() {
            if self.is_exited() {
                break;
            }

            next = match step {
                Step::Visit { page_id, options } => Some(self.visit(page_id, options)),
                Step::Render { resolved, options } => self.render(resolved, options)?,
                Step::Back { error } => self.back(error),
            };
        }

        Ok(())
    }

    fn visit(&self, page_id: String, options: NavigateOptions) -> Step {
        match self.attempt(&page_id) {
            Ok(resolved) => Step::Render { resolved, options },
            Err(err) => {
                warn!(page = %page_id, error = %err, "failed to redraw page");
                Step::Back {
                    error: Some(err.to_string()),
                }
            }
        }
    }

    fn back(&mut self, error: Option<String>) -> Option<Step> {
        if self.is_exited() {
            return None;
        }

        self.history.pop();

        let Some(top) = self.history.top() else {
            info!("history exhausted");
            self.state = NavState::Exited;
            return None;
        };

        debug!(page = %top.page_id, depth = self.history.len(), "navigating back");
        let options = NavigateOptions {
            history: HistoryUpdate::Skip,
            params: top.params.clone(),
            state: top.state.clone(),
            selected: top.selected_index,
            error,
        };

        Some(Step::Visit {
            page_id: top.page_id.clone(),
            options,
        })
    }

    fn render(&mut self, resolved: Resolved, mut options: NavigateOptions) -> Result<Option<Step>> {
        let Resolved {
            page_id,
            page,
            choices,
        } = resolved;

        debug!(
            page = %page_id,
            history = ?options.history,
            depth = self.history.len(),
            "rendering page"
        );

        // the cursor of the screen being left is saved before anything is drawn
        if let HistoryUpdate::PushFrom(index) = options.history {
            self.history.set_selected_index(index);
        }

        self.screen.clear();

        // item and breadcrumb go in before the hook runs, so a hook that
        // navigates back leaves this very page
        if options.history.pushes() {
            let item = HistoryItem::new(page_id.as_str())
                .with_display_name(page.display_name(&page_id))
                .with_params(options.params.clone())
                .with_state(options.state.clone())
                .with_selected_index(options.selected);
            self.history.push(item);
        }

        if self.history.breadcrumbs().len() > 1 {
            self.screen.breadcrumbs(self.history.breadcrumbs());
        }

        if let Some(message) = &options.error {
            self.screen.error(message);
        }

        let mut hook_error = None;
        if let Some(hook) = page.pre_render.clone() {
            let mut state = std::mem::take(&mut options.state);

            self.in_hook = true;
            let outcome = hook(&options.params, &mut state, self);
            self.in_hook = false;

            if let Err(cause) = outcome {
                let err = NavError::PreRender {
                    page_id: page_id.clone(),
                    cause,
                };
                warn!(error = %err, "pre-render hook failed");
                hook_error = Some(err.to_string());
            }

            if self.is_exited() {
                self.pending = None;
                debug!(page = %page_id, "exit requested by hook");
                return Ok(None);
            }

            if let Some(step) = self.pending.take() {
                debug!(page = %page_id, "render superseded by hook");
                return Ok(Some(step.with_banner(hook_error)));
            }

            self.history.update_top_state(&page_id, state.clone());
            options.state = state;
        }

        let choices = match choices {
            Some(choices) if !choices.is_empty() => choices,
            _ => {
                if let Some(message) = hook_error {
                    // nothing stays on screen here, so the page below shows it
                    return Ok(Some(Step::Back {
                        error: Some(message),
                    }));
                }
                debug!(page = %page_id, "informational page, waiting for re-entry");
                return Ok(None);
            }
        };

        if let Some(message) = &hook_error {
            self.screen.error(message);
        }

        let prompt = Prompt {
            message: page
                .message
                .clone()
                .or_else(|| page.title.clone())
                .unwrap_or_else(|| self.default_message.clone()),
            hint: page.hint.clone().or_else(|| self.default_hint.clone()),
            labels: choices.iter().map(|choice| choice.label.clone()).collect(),
            initial: options
                .selected
                .filter(|index| *index < choices.len())
                .unwrap_or(0),
        };

        self.state = NavState::Rendering;
        let answer = self.renderer.ask(&prompt);
        self.state = NavState::Idle;

        let answer = answer.unwrap_or_else(|err| {
            warn!(page = %page_id, error = %err, "prompt failed, treating as cancel");
            Answer::Cancelled
        });

        if answer == Answer::Interrupted {
            self.exit();
            return Ok(None);
        }

        Ok(Some(self.dispatch(&page_id, &choices, answer, options)))
    }

    fn dispatch(
        &mut self,
        page_id: &str,
        choices: &[Choice],
        answer: Answer,
        options: NavigateOptions,
    ) -> Step {
        let index = match answer {
            Answer::Selected(index) => index,
            Answer::Cancelled | Answer::Interrupted => {
                debug!(page = %page_id, "prompt cancelled");
                return Step::Back { error: None };
            }
        };

        let Some(choice) = choices.get(index) else {
            warn!(page = %page_id, index, "renderer returned an unknown choice");
            return self.refresh(page_id, options, None, Some(format!("Invalid selection: {index}")));
        };

        debug!(
            page = %page_id,
            index,
            label = %choice.label,
            kind = choice.action.kind(),
            "choice selected"
        );

        match &choice.action {
            Action::Noop => self.refresh(page_id, options, Some(index), None),
            Action::Callback(callback) => {
                let error = callback().err().map(|cause| {
                    let err = NavError::Action {
                        label: choice.label.clone(),
                        cause,
                    };
                    warn!(page = %page_id, error = %err, "callback failed");
                    err.to_string()
                });
                self.refresh(page_id, options, Some(index), error)
            }
            Action::Page(target) => {
                self.forward(page_id, options, index, &choice.label, target, Params::new())
            }
            Action::PageWithParams(target, params) => {
                self.forward(page_id, options, index, &choice.label, target, params.clone())
            }
            Action::Inline(inline) => {
                let target = inline_page_id(page_id, index);
                self.registry.register(target.clone(), inline.clone());
                self.forward(page_id, options, index, &choice.label, &target, Params::new())
            }
        }
    }

    /// Open `target` one level deeper, or redraw `origin` with a banner
    fn forward(
        &self,
        origin: &str,
        options: NavigateOptions,
        index: usize,
        label: &str,
        target: &str,
        params: Params,
    ) -> Step {
        match self.attempt(target) {
            Ok(resolved) => Step::Render {
                resolved,
                options: NavigateOptions::new()
                    .with_history(HistoryUpdate::PushFrom(index))
                    .with_params(params),
            },
            Err(err) => {
                warn!(from = %origin, to = %target, error = %err, "navigation failed");
                let banner = match &err {
                    NavError::PageNotFound { page_id } => {
                        format!("Page \"{page_id}\" does not exist")
                    }
                    other => format!("Could not open \"{label}\": {other}"),
                };
                self.refresh(origin, options, Some(index), Some(banner))
            }
        }
    }

    /// Redraw `page_id` at the current depth, keeping params and state
    fn refresh(
        &self,
        page_id: &str,
        options: NavigateOptions,
        selected: Option<usize>,
        error: Option<String>,
    ) -> Step {
        Step::Visit {
            page_id: page_id.to_string(),
            options: NavigateOptions {
                history: HistoryUpdate::Skip,
                selected: selected.or(options.selected),
                error,
                ..options
            },
        }
    }
}
