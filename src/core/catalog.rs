use std::sync::{Arc, Mutex, OnceLock};

use crate::domain::model::Reader;
use crate::domain::ports::Item;

static INSTANCE: OnceLock<Mutex<Catalog>> = OnceLock::new();

/// Registry of every item and user known to the library. Items and users are
/// kept in registration order; duplicates are allowed and nothing is
/// validated.
///
/// The process-wide shared catalog lives behind [`Catalog::instance`];
/// `Catalog::new` builds an independent one for callers that prefer to inject
/// their own.
pub struct Catalog {
    items: Vec<Box<dyn Item>>,
    users: Vec<Arc<Reader>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            users: Vec::new(),
        }
    }

    /// The shared catalog, created on first access and alive for the rest of
    /// the process.
    pub fn instance() -> &'static Mutex<Catalog> {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Initializing shared catalog");
            Mutex::new(Catalog::new())
        })
    }

    pub fn add_item(&mut self, item: Box<dyn Item>) {
        tracing::debug!("Registering item: {}", item.title());
        self.items.push(item);
    }

    pub fn register_user(&mut self, user: Arc<Reader>) {
        tracing::debug!("Registering user: {}", user.name());
        self.users.push(user);
    }

    /// First item whose title matches case-insensitively, scanning in
    /// registration order. A miss is an ordinary `None`, not an error.
    pub fn find_by_title(&self, title: &str) -> Option<&dyn Item> {
        let wanted = title.to_lowercase();
        self.items
            .iter()
            .find(|item| item.title().to_lowercase() == wanted)
            .map(|item| item.as_ref())
    }

    pub fn items(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    pub fn users(&self) -> &[Arc<Reader>] {
        &self.users
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
