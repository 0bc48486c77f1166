use crate::domain::ports::{Item, Observer};

/// A digital edition. Rendered with the `[E-Book]` tag.
#[derive(Debug, Clone)]
pub struct DigitalItem {
    title: String,
    author: String,
}

impl DigitalItem {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Item for DigitalItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn render(&self) -> String {
        format!("[E-Book] {} - {}", self.title, self.author)
    }
}

/// A physical edition. Rendered with the `[Físico]` tag.
#[derive(Debug, Clone)]
pub struct PhysicalItem {
    title: String,
    author: String,
}

impl PhysicalItem {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Item for PhysicalItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn render(&self) -> String {
        format!("[Físico] {} - {}", self.title, self.author)
    }
}

/// A registered library user. Observes the notifier and prints a personalized
/// line for every broadcast it receives.
#[derive(Debug, Clone)]
pub struct Reader {
    name: String,
}

impl Reader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for Reader {
    fn receive(&self, message: &str) {
        println!("Notification for {}: {}", self.name, message);
    }
}
