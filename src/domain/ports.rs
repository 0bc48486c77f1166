//! Capability traits for the library domain. Concrete types live in
//! [`crate::domain::model`]; wrappers that layer behavior on top of them
//! (decorators, the access proxy) live in `crate::core`.

/// A catalog item: a book in some edition (digital or physical), or any
/// wrapper that behaves like one.
///
/// `title`/`author` are fixed at construction. `render` produces the full,
/// possibly multi-line description; printing it is the caller's business.
pub trait Item: Send + Sync {
    fn title(&self) -> &str;

    fn author(&self) -> &str;

    fn render(&self) -> String;
}

/// Anything that can receive a broadcast message from a
/// [`crate::core::notifier::Notifier`]. Delivery is synchronous and carries
/// no return value.
pub trait Observer: Send + Sync {
    fn receive(&self, message: &str);
}
