//! # menu
//!
//! Stack-based navigator for interactive terminal menus.
//!
//! Pages are registered under string ids in a [`PageRegistry`]. Each page has
//! an optional pre-render hook and a list of [`Choice`]s whose [`Action`]
//! decides what selecting them does. The [`Navigator`] keeps a [`History`] of
//! visited pages, so backing out of a page redraws the previous one exactly as
//! it was, cursor position included.
//!
//! ```no_run
//! use menu::{Choice, DialoguerRenderer, Navigator, Page, TerminalScreen};
//!
//! let mut nav = Navigator::new(DialoguerRenderer::new(), TerminalScreen::new())
//!     .with_initial_page("main");
//! nav.register(
//!     "main",
//!     Page::new()
//!         .with_title("Main")
//!         .with_choices(vec![Choice::page("Settings", "settings"), Choice::noop("Stay")]),
//! );
//! nav.run()?;
//! # Ok::<(), menu::NavError>(())
//! ```

pub mod declarative;
pub mod error;
pub mod history;
pub mod navigator;
pub mod page;
pub mod registry;
pub mod renderer;
pub mod terminal;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use declarative::{ChoiceSpec, PageSpec};
pub use error::{NavError, Result};
pub use history::{History, HistoryItem};
pub use navigator::{
    DEFAULT_MESSAGE, HistoryUpdate, NavState, NavigateOptions, Navigator, Resolved,
    inline_page_id,
};
pub use page::{Action, Actions, Choice, Page, Params, State};
pub use registry::PageRegistry;
pub use renderer::{Answer, ChoiceRenderer, Prompt, Screen};
pub use terminal::{DialoguerRenderer, TerminalScreen};
