//! Item decorators. Each one owns exactly one wrapped item, forwards
//! `title`/`author` to it, and appends a single fixed line to its render
//! output. Decorators implement [`Item`] themselves, so they nest freely;
//! nested output accumulates innermost-first.

use crate::domain::ports::Item;

/// Marks an item as having a written summary attached.
pub struct SummaryDecorator {
    inner: Box<dyn Item>,
}

impl SummaryDecorator {
    pub fn new(inner: Box<dyn Item>) -> Self {
        Self { inner }
    }
}

impl Item for SummaryDecorator {
    fn title(&self) -> &str {
        self.inner.title()
    }

    fn author(&self) -> &str {
        self.inner.author()
    }

    fn render(&self) -> String {
        format!("{}\n[Summary available]", self.inner.render())
    }
}

/// Marks an item as having an audiobook edition.
pub struct AudioDecorator {
    inner: Box<dyn Item>,
}

impl AudioDecorator {
    pub fn new(inner: Box<dyn Item>) -> Self {
        Self { inner }
    }
}

impl Item for AudioDecorator {
    fn title(&self) -> &str {
        self.inner.title()
    }

    fn author(&self) -> &str {
        self.inner.author()
    }

    fn render(&self) -> String {
        format!("{}\n[Audiobook available]", self.inner.render())
    }
}

/// Marks an item as available in accessible formats.
pub struct AccessibilityDecorator {
    inner: Box<dyn Item>,
}

impl AccessibilityDecorator {
    pub fn new(inner: Box<dyn Item>) -> Self {
        Self { inner }
    }
}

impl Item for AccessibilityDecorator {
    fn title(&self) -> &str {
        self.inner.title()
    }

    fn author(&self) -> &str {
        self.inner.author()
    }

    fn render(&self) -> String {
        format!(
            "{}\n[Accessibility: high-contrast text and screen-reader support]",
            self.inner.render()
        )
    }
}
