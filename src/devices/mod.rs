//! Device-level building blocks shared by the entity platforms.

mod data;
mod entity;
mod product;
mod registrar;

pub use data::{ConfigEntry, IntegrationData, TuyaBleData};
pub use entity::{EntityCategory, EntityDescription, TuyaBleEntity};
pub use product::ProductInfo;
pub use registrar::EntityRegistrar;
