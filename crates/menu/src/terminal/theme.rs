//! Prompt styling shared by every dialoguer widget

use console::{Style, style};
use dialoguer::theme::ColorfulTheme;

/// Cyan cursor on select lists, default look everywhere else
pub struct DefaultTheme {
    dialoguer: ColorfulTheme,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        let dialoguer = ColorfulTheme {
            active_item_prefix: style("›".to_string()).for_stderr().cyan(),
            active_item_style: Style::new().for_stderr().cyan().bold(),
            ..ColorfulTheme::default()
        };
        Self { dialoguer }
    }
}

impl DefaultTheme {
    pub fn dialoguer_theme(&self) -> &ColorfulTheme {
        &self.dialoguer
    }
}
