//! Page registry keyed by page id

use crate::error::{NavError, Result};
use crate::page::{Actions, Choice, Page};
use std::collections::HashMap;
use std::rc::Rc;

/// Maps page ids to page definitions
///
/// Registration is last-write-wins. Inline pages rely on this: re-selecting
/// the same inline choice re-registers the same synthetic id.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: HashMap<String, Rc<Page>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the page registered under `id`
    pub fn register(&mut self, id: impl Into<String>, page: impl Into<Rc<Page>>) {
        self.pages.insert(id.into(), page.into());
    }

    pub fn get(&self, id: &str) -> Option<Rc<Page>> {
        self.pages.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Current choices of `page`, or `None` for an informational page
    ///
    /// Generators run on every call so dynamic pages always reflect live data.
    pub fn resolve_actions(page_id: &str, page: &Page) -> Result<Option<Vec<Choice>>> {
        match &page.actions {
            Actions::None => Ok(None),
            Actions::Static(choices) => Ok(Some(choices.clone())),
            Actions::Dynamic(generator) => {
                generator()
                    .map(Some)
                    .map_err(|cause| NavError::ActionList {
                        page_id: page_id.to_string(),
                        cause,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_register_overwrites() {
        let mut registry = PageRegistry::new();
        registry.register("main", Page::new().with_title("First"));
        registry.register("main", Page::new().with_title("Second"));

        assert_eq!(registry.len(), 1);
        let page = registry.get("main").expect("page registered");
        assert_eq!(page.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_get_missing_page() {
        let registry = PageRegistry::new();
        assert!(registry.get("nope").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_generator_runs_on_every_resolve() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let page = Page::new().with_choice_generator(move || {
            counter.set(counter.get() + 1);
            Ok((0..counter.get()).map(|i| Choice::noop(format!("item {i}"))).collect())
        });

        let first = PageRegistry::resolve_actions("list", &page).unwrap().unwrap();
        let second = PageRegistry::resolve_actions("list", &page).unwrap().unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_informational_page_has_no_actions() {
        let page = Page::new().with_title("About");
        assert!(PageRegistry::resolve_actions("about", &page).unwrap().is_none());
    }

    #[test]
    fn test_generator_failure_is_action_list_error() {
        let page = Page::new().with_choice_generator(|| anyhow::bail!("store unavailable"));
        let err = PageRegistry::resolve_actions("list", &page).unwrap_err();
        assert!(matches!(err, NavError::ActionList { ref page_id, .. } if page_id == "list"));
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut registry = PageRegistry::new();
        registry.register("b", Page::new());
        registry.register("a", Page::new());
        assert_eq!(registry.ids(), vec!["a", "b"]);
    }
}
