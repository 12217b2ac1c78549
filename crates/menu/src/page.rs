//! Page definitions and the action union

use crate::navigator::Navigator;
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;

/// Parameter bag handed to a page's pre-render hook
pub type Params = Map<String, Value>;

/// Opaque per-visit state owned by a page's pre-render hook
pub type State = Map<String, Value>;

/// Hook run before a page's prompt is shown
pub type PreRenderHook = Rc<dyn Fn(&Params, &mut State, &mut Navigator) -> anyhow::Result<()>>;

/// Lazily produces a page's choices on every visit
pub type ChoiceGenerator = Rc<dyn Fn() -> anyhow::Result<Vec<Choice>>>;

/// Side effect attached to a choice
pub type Callback = Rc<dyn Fn() -> anyhow::Result<()>>;

/// What happens when a choice is selected
#[derive(Clone)]
pub enum Action {
    /// Navigate to a registered page
    Page(String),
    /// Navigate to a registered page with parameters for its hook
    PageWithParams(String, Params),
    /// Run a side effect and stay on the current page
    Callback(Callback),
    /// Re-render the current page unchanged
    Noop,
    /// Navigate to an anonymous page registered on the fly
    Inline(Rc<Page>),
}

impl Action {
    pub fn page(id: impl Into<String>) -> Self {
        Self::Page(id.into())
    }

    pub fn page_with_params(id: impl Into<String>, params: Params) -> Self {
        Self::PageWithParams(id.into(), params)
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        Self::Callback(Rc::new(f))
    }

    pub fn inline(page: Page) -> Self {
        Self::Inline(Rc::new(page))
    }

    /// Short name of the variant, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Page(_) => "page",
            Self::PageWithParams(..) => "page-with-params",
            Self::Callback(_) => "callback",
            Self::Noop => "noop",
            Self::Inline(_) => "inline",
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(id) => f.debug_tuple("Page").field(id).finish(),
            Self::PageWithParams(id, params) => f
                .debug_tuple("PageWithParams")
                .field(id)
                .field(params)
                .finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Noop => f.write_str("Noop"),
            Self::Inline(page) => f.debug_tuple("Inline").field(page).finish(),
        }
    }
}

/// A labeled entry in a page's prompt
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub action: Action,
}

impl Choice {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    pub fn page(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(label, Action::page(id))
    }

    pub fn noop(label: impl Into<String>) -> Self {
        Self::new(label, Action::Noop)
    }
}

/// Source of a page's choices
#[derive(Clone, Default)]
pub enum Actions {
    /// Informational page: the hook output is all there is, no prompt
    #[default]
    None,
    Static(Vec<Choice>),
    Dynamic(ChoiceGenerator),
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Static(choices) => f.debug_tuple("Static").field(choices).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One addressable menu or information screen
///
/// The id a page is reachable under lives in the registry, not here.
#[derive(Clone, Default)]
pub struct Page {
    pub title: Option<String>,
    pub message: Option<String>,
    pub hint: Option<String>,
    pub pre_render: Option<PreRenderHook>,
    pub actions: Actions,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Params, &mut State, &mut Navigator) -> anyhow::Result<()> + 'static,
    {
        self.pre_render = Some(Rc::new(hook));
        self
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.actions = Actions::Static(choices);
        self
    }

    /// Choices are rebuilt by `generator` every time the page is shown
    pub fn with_choice_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> anyhow::Result<Vec<Choice>> + 'static,
    {
        self.actions = Actions::Dynamic(Rc::new(generator));
        self
    }

    /// Name shown in breadcrumbs, falling back to the registry id
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(id)
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("hint", &self.hint)
            .field("pre_render", &self.pre_render.as_ref().map(|_| ".."))
            .field("actions", &self.actions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_id() {
        let page = Page::new();
        assert_eq!(page.display_name("accounts"), "accounts");

        let page = page.with_title("Accounts");
        assert_eq!(page.display_name("accounts"), "Accounts");
    }

    #[test]
    fn test_action_kinds() {
        assert_eq!(Action::page("a").kind(), "page");
        assert_eq!(Action::page_with_params("a", Params::new()).kind(), "page-with-params");
        assert_eq!(Action::callback(|| Ok(())).kind(), "callback");
        assert_eq!(Action::Noop.kind(), "noop");
        assert_eq!(Action::inline(Page::new()).kind(), "inline");
    }

    #[test]
    fn test_builder_sets_static_choices() {
        let page = Page::new()
            .with_title("Main")
            .with_choices(vec![Choice::page("Accounts", "accounts"), Choice::noop("Stay")]);

        match &page.actions {
            Actions::Static(choices) => {
                assert_eq!(choices.len(), 2);
                assert_eq!(choices[0].label, "Accounts");
                assert!(matches!(choices[1].action, Action::Noop));
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }
}
