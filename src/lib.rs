pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::catalog::Catalog;
pub use crate::core::decorator::{AccessibilityDecorator, AudioDecorator, SummaryDecorator};
pub use crate::core::factory::ItemFactory;
pub use crate::core::notifier::Notifier;
pub use crate::core::proxy::DigitalItemProxy;
pub use crate::domain::model::{DigitalItem, PhysicalItem, Reader};
pub use crate::domain::ports::{Item, Observer};
pub use crate::utils::error::{LibraryError, Result};
