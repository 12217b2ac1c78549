//! Building blocks for page bodies printed by hooks

use colored::*;

/// Something that prints itself to stdout
pub trait Component {
    fn render(&self);
}

/// Title over a double rule, with an optional dimmed subtitle
pub struct Header {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    fn rule_width(&self) -> usize {
        let subtitle = self.subtitle.as_deref().map_or(0, |s| s.chars().count());
        self.title.chars().count().max(subtitle)
    }
}

impl Component for Header {
    fn render(&self) {
        println!("{}", self.title.bold().green());
        println!("{}", "═".repeat(self.rule_width()).green());
        if let Some(subtitle) = &self.subtitle {
            println!("{}", subtitle.dimmed());
        }
        println!();
    }
}

/// Lines of text, `key: value` fields and bulleted sections
#[derive(Debug, Clone)]
pub struct ContentArea {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for ContentArea {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 10,
        }
    }
}

impl ContentArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column keys of later fields are right-aligned to
    pub fn with_key_width(mut self, width: usize) -> Self {
        self.key_width = width;
        self
    }

    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn add_field(mut self, key: &str, value: impl AsRef<str>) -> Self {
        let key = format!("{key:>width$}", width = self.key_width);
        self.lines.push(format!("{}: {}", key.bold(), value.as_ref()));
        self
    }

    pub fn add_section(mut self, title: impl Into<String>, items: Vec<String>) -> Self {
        self.lines.push(format!("{}:", title.into()).bold().to_string());
        self.lines
            .extend(items.into_iter().map(|item| format!("  • {item}")));
        self.lines.push(String::new());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Component for ContentArea {
    fn render(&self) {
        for line in &self.lines {
            println!("{line}");
        }
        println!();
    }
}
