//! Navigation history with a parallel breadcrumb trail

use crate::page::{Params, State};

/// One page visit, with enough state to redraw it exactly
#[derive(Debug, Clone)]
pub struct HistoryItem {
    pub page_id: String,
    /// Title captured at push time, the page may be replaced later
    pub display_name: Option<String>,
    pub params: Params,
    /// Choice index the cursor returns to when this page is redrawn
    pub selected_index: Option<usize>,
    pub state: State,
}

impl HistoryItem {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            display_name: None,
            params: Params::new(),
            selected_index: None,
            state: State::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
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

    pub fn with_selected_index(mut self, index: Option<usize>) -> Self {
        self.selected_index = index;
        self
    }

    /// Breadcrumb label for this visit
    pub fn crumb(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.page_id)
    }
}

/// Stack of visited pages; the last item is the current screen
///
/// Breadcrumbs live in their own vector but are only ever pushed and popped
/// together with history items, so both always have the same length.
#[derive(Debug, Default)]
pub struct History {
    items: Vec<HistoryItem>,
    breadcrumbs: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: HistoryItem) {
        self.breadcrumbs.push(item.crumb().to_string());
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<HistoryItem> {
        let item = self.items.pop()?;
        self.breadcrumbs.pop();
        Some(item)
    }

    pub fn top(&self) -> Option<&HistoryItem> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut HistoryItem> {
        self.items.last_mut()
    }

    /// Remember the cursor position of the current screen
    pub fn set_selected_index(&mut self, index: usize) {
        if let Some(item) = self.items.last_mut() {
            item.selected_index = Some(index);
        }
    }

    /// Persist hook-owned state into the current visit
    ///
    /// Ignored when the top of the stack belongs to another page.
    pub fn update_top_state(&mut self, page_id: &str, state: State) {
        if let Some(item) = self.items.last_mut()
            && item.page_id == page_id
        {
            item.state = state;
        }
    }

    pub fn breadcrumbs(&self) -> &[String] {
        &self.breadcrumbs
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.breadcrumbs.clear();
    }
}
