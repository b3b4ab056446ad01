//! Entity base shared by all Tuya BLE platforms.
//!
//! Holds the device, product and coordinator handles an entity belongs to
//! and derives the identity and generic availability every platform uses.

use super::ProductInfo;
use crate::coordinator::Coordinator;
use crate::tuya_ble::DeviceHandle;
use serde::Serialize;
use std::sync::Arc;
use strum::{Display, EnumString};

/// Classification of a non-primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// Changes the configuration of a device.
    Config,
    /// Exposes diagnostics of a device without allowing changes.
    Diagnostic,
}

/// Display metadata of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescription {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
}

impl EntityDescription {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            name: None,
            icon: None,
            entity_category: None,
        }
    }

    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn with_category(mut self, category: EntityCategory) -> Self {
        self.entity_category = Some(category);
        self
    }
}

/// Common state of an entity bound to one Tuya BLE device.
pub struct TuyaBleEntity {
    device: Arc<dyn DeviceHandle>,
    product: Arc<ProductInfo>,
    coordinator: Arc<dyn Coordinator>,
    description: EntityDescription,
}

impl TuyaBleEntity {
    pub fn new(
        device: Arc<dyn DeviceHandle>,
        product: Arc<ProductInfo>,
        coordinator: Arc<dyn Coordinator>,
        description: EntityDescription,
    ) -> Self {
        Self {
            device,
            product,
            coordinator,
            description,
        }
    }

    /// `<address>-<key>`, stable across restarts.
    pub fn unique_id(&self) -> String {
        format!("{}-{}", self.device.address(), self.description.key)
    }

    /// Description name, falling back to the key.
    pub fn name(&self) -> &'static str {
        self.description.name.unwrap_or(self.description.key)
    }

    /// Generic availability: the coordinator reports the device connected.
    pub fn available(&self) -> bool {
        self.coordinator.connected()
    }

    pub fn device(&self) -> &Arc<dyn DeviceHandle> {
        &self.device
    }

    pub fn product(&self) -> &Arc<ProductInfo> {
        &self.product
    }

    pub fn coordinator(&self) -> &Arc<dyn Coordinator> {
        &self.coordinator
    }

    pub fn description(&self) -> &EntityDescription {
        &self.description
    }
}
