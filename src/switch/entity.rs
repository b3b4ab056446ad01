//! Switch entity bound to one data point of a Tuya BLE device.

use super::mapping::SwitchMapping;
use crate::coordinator::Coordinator;
use crate::devices::{EntityCategory, EntityDescription, ProductInfo, TuyaBleEntity};
use crate::error::Result;
use crate::tuya_ble::{DataPointType, DeviceHandle};
use serde::Serialize;
use std::sync::Arc;

/// A Tuya BLE switch.
///
/// State reads, writes and the extra availability check are delegated to the
/// capabilities of the switch's [`SwitchMapping`]. Missing capabilities are
/// skipped: no getter reports off, no setter ignores commands.
pub struct TuyaBleSwitch {
    base: TuyaBleEntity,
    mapping: Arc<SwitchMapping>,
}

/// Point-in-time view of a switch, for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchSnapshot {
    pub unique_id: String,
    pub name: &'static str,
    pub dp_id: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp_type: Option<DataPointType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
    pub available: bool,
    pub is_on: bool,
}

impl TuyaBleSwitch {
    pub fn new(
        device: Arc<dyn DeviceHandle>,
        product: Arc<ProductInfo>,
        coordinator: Arc<dyn Coordinator>,
        mapping: Arc<SwitchMapping>,
    ) -> Self {
        let base = TuyaBleEntity::new(device, product, coordinator, mapping.description.clone());
        Self { base, mapping }
    }

    /// Return true if the switch is on.
    pub fn is_on(&self) -> bool {
        match &self.mapping.getter {
            Some(getter) => getter.is_on(self, self.base.product()).unwrap_or(false),
            None => false,
        }
    }

    /// Turn the switch on.
    pub fn turn_on(&self) -> Result<()> {
        self.set_state(true)
    }

    /// Turn the switch off.
    pub fn turn_off(&self) -> Result<()> {
        self.set_state(false)
    }

    fn set_state(&self, value: bool) -> Result<()> {
        let Some(setter) = &self.mapping.setter else {
            log::debug!(
                "[Switch] {} has no setter, ignoring turn {}",
                self.unique_id(),
                if value { "on" } else { "off" }
            );
            return Ok(());
        };
        log::info!(
            "[Switch] {} turn {}",
            self.unique_id(),
            if value { "on" } else { "off" }
        );
        setter.set(self, self.base.product(), value).inspect_err(|e| {
            log::warn!("[Switch] {} failed to set state: {}", self.unique_id(), e);
        })
    }

    /// Generic device availability, narrowed by the mapping's own check.
    pub fn available(&self) -> bool {
        if !self.base.available() {
            return false;
        }
        match &self.mapping.is_available {
            Some(is_available) => is_available.is_available(self, self.base.product()),
            None => true,
        }
    }

    pub fn unique_id(&self) -> String {
        self.base.unique_id()
    }

    pub fn name(&self) -> &'static str {
        self.base.name()
    }

    pub fn description(&self) -> &EntityDescription {
        self.base.description()
    }

    pub fn mapping(&self) -> &Arc<SwitchMapping> {
        &self.mapping
    }

    pub fn device(&self) -> &Arc<dyn DeviceHandle> {
        self.base.device()
    }

    pub fn product(&self) -> &Arc<ProductInfo> {
        self.base.product()
    }

    pub fn snapshot(&self) -> SwitchSnapshot {
        let description = self.description();
        SwitchSnapshot {
            unique_id: self.unique_id(),
            name: self.name(),
            dp_id: self.mapping.dp_id,
            dp_type: self.mapping.dp_type,
            icon: description.icon,
            entity_category: description.entity_category,
            available: self.available(),
            is_on: self.is_on(),
        }
    }
}
