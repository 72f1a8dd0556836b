use crate::core::NavigationParameters;

/// Text panel that grows one line per update.
#[derive(Clone, Debug, Default)]
pub struct TextLog {
    text: String,
    update: String,
}

impl TextLog {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            update: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line appended by the next [`TextLog::append_update`].
    pub fn set_update(&mut self, update: impl Into<String>) {
        self.update = update.into();
    }

    pub fn append_update(&mut self) -> &str {
        self.text.push('\n');
        self.text.push_str(&self.update);
        &self.text
    }
}

/// One-line summary of the navigation state for a hint overlay.
pub fn hint_text(p: &NavigationParameters) -> String {
    format!(
        "Zoom: {:.4} • Iterations: {:.0} • Extent: {:.3} • Focus: ({:.4}, {:.4})",
        p.zoom, p.max_iterations, p.orthographic_extent, p.focus.x, p.focus.y
    )
}
