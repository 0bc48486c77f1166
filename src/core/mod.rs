pub mod catalog;
pub mod decorator;
pub mod factory;
pub mod notifier;
pub mod proxy;

pub use crate::domain::model::{DigitalItem, PhysicalItem, Reader};
pub use crate::domain::ports::{Item, Observer};
pub use crate::utils::error::Result;
