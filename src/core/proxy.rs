use std::sync::OnceLock;

use crate::domain::model::DigitalItem;
use crate::domain::ports::Item;

/// Access gate for a digital item. The real [`DigitalItem`] is only built on
/// the first permitted render and cached for every call after that; a denied
/// proxy never builds one.
pub struct DigitalItemProxy {
    title: String,
    author: String,
    access_granted: bool,
    inner: OnceLock<DigitalItem>,
}

impl DigitalItemProxy {
    pub fn new(title: impl Into<String>, author: impl Into<String>, access_granted: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            access_granted,
            inner: OnceLock::new(),
        }
    }

    /// Whether the underlying item has been built yet.
    pub fn is_materialized(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl Item for DigitalItemProxy {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn render(&self) -> String {
        if !self.access_granted {
            return format!("Access denied to digital item: {}", self.title);
        }

        self.inner
            .get_or_init(|| {
                tracing::debug!("Materializing digital item: {}", self.title);
                DigitalItem::new(self.title.clone(), self.author.clone())
            })
            .render()
    }
}
