//! Terminal implementations of the renderer and screen seams

pub mod components;
pub mod input;
pub mod screen;
pub mod theme;

pub use components::{Component, ContentArea, Header};
pub use input::{DialoguerRenderer, press_enter_to};
pub use screen::TerminalScreen;
pub use theme::DefaultTheme;
