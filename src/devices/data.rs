//! Per config-entry data for the Tuya BLE integration.
//!
//! The host keeps one [`TuyaBleData`] per configured device; platforms look it
//! up by entry id during setup.

use super::ProductInfo;
use crate::coordinator::Coordinator;
use crate::tuya_ble::DeviceHandle;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A configured integration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
}

impl ConfigEntry {
    pub fn new(entry_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            title: title.into(),
        }
    }
}

/// Handles platforms need for one configured device.
#[derive(Clone)]
pub struct TuyaBleData {
    pub device: Arc<dyn DeviceHandle>,
    pub product: Arc<ProductInfo>,
    pub coordinator: Arc<dyn Coordinator>,
}

impl TuyaBleData {
    pub fn new(
        device: Arc<dyn DeviceHandle>,
        product: Arc<ProductInfo>,
        coordinator: Arc<dyn Coordinator>,
    ) -> Self {
        Self {
            device,
            product,
            coordinator,
        }
    }
}

/// Integration-wide storage keyed by config entry id.
#[derive(Default)]
pub struct IntegrationData {
    entries: RwLock<HashMap<String, Arc<TuyaBleData>>>,
}

impl IntegrationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entry_id: impl Into<String>, data: TuyaBleData) {
        self.entries.write().insert(entry_id.into(), Arc::new(data));
    }

    pub fn get(&self, entry_id: &str) -> Option<Arc<TuyaBleData>> {
        self.entries.read().get(entry_id).cloned()
    }

    /// Drop the data of an unloaded entry.
    pub fn remove(&self, entry_id: &str) -> Option<Arc<TuyaBleData>> {
        self.entries.write().remove(entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
