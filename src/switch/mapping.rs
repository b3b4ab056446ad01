//! Switch mapping entries and the capabilities they delegate to.
//!
//! A [`SwitchMapping`] ties a Tuya data point to a switch entity. Reading,
//! writing and extra availability checks are device specific, so they are
//! injected per mapping as capability objects. Any plain function or closure
//! with the matching signature implements the capability traits.

use super::TuyaBleSwitch;
use crate::devices::{EntityDescription, ProductInfo};
use crate::error::Result;
use crate::tuya_ble::DataPointType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Reads the on/off state of a switch. `None` means unknown.
pub trait SwitchGetter: Send + Sync {
    fn is_on(&self, switch: &TuyaBleSwitch, product: &ProductInfo) -> Option<bool>;
}

/// Writes the desired on/off state to the device.
pub trait SwitchSetter: Send + Sync {
    fn set(&self, switch: &TuyaBleSwitch, product: &ProductInfo, value: bool) -> Result<()>;
}

/// Extra availability check on top of the generic device availability.
pub trait SwitchAvailability: Send + Sync {
    fn is_available(&self, switch: &TuyaBleSwitch, product: &ProductInfo) -> bool;
}

impl<F> SwitchGetter for F
where
    F: Fn(&TuyaBleSwitch, &ProductInfo) -> Option<bool> + Send + Sync,
{
    fn is_on(&self, switch: &TuyaBleSwitch, product: &ProductInfo) -> Option<bool> {
        self(switch, product)
    }
}

impl<F> SwitchSetter for F
where
    F: Fn(&TuyaBleSwitch, &ProductInfo, bool) -> Result<()> + Send + Sync,
{
    fn set(&self, switch: &TuyaBleSwitch, product: &ProductInfo, value: bool) -> Result<()> {
        self(switch, product, value)
    }
}

impl<F> SwitchAvailability for F
where
    F: Fn(&TuyaBleSwitch, &ProductInfo) -> bool + Send + Sync,
{
    fn is_available(&self, switch: &TuyaBleSwitch, product: &ProductInfo) -> bool {
        self(switch, product)
    }
}

/// One switch entity definition bound to a data point.
#[derive(Clone, Serialize)]
pub struct SwitchMapping {
    pub dp_id: u8,
    pub description: EntityDescription,
    /// Create the entity even if the device never reported the data point.
    pub force_add: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp_type: Option<DataPointType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitmap_mask: Option<&'static [u8]>,
    #[serde(skip)]
    pub is_available: Option<Arc<dyn SwitchAvailability>>,
    #[serde(skip)]
    pub getter: Option<Arc<dyn SwitchGetter>>,
    #[serde(skip)]
    pub setter: Option<Arc<dyn SwitchSetter>>,
}

impl SwitchMapping {
    /// Create a mapping with no capabilities. Entities are always added.
    pub fn new(dp_id: u8, description: EntityDescription) -> Self {
        Self {
            dp_id,
            description,
            force_add: true,
            dp_type: None,
            bitmap_mask: None,
            is_available: None,
            getter: None,
            setter: None,
        }
    }

    pub fn with_force_add(mut self, force_add: bool) -> Self {
        self.force_add = force_add;
        self
    }

    pub fn with_dp_type(mut self, dp_type: DataPointType) -> Self {
        self.dp_type = Some(dp_type);
        self
    }

    pub fn with_availability(mut self, is_available: impl SwitchAvailability + 'static) -> Self {
        self.is_available = Some(Arc::new(is_available));
        self
    }

    pub fn with_getter(mut self, getter: impl SwitchGetter + 'static) -> Self {
        self.getter = Some(Arc::new(getter));
        self
    }

    pub fn with_setter(mut self, setter: impl SwitchSetter + 'static) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }
}

impl fmt::Debug for SwitchMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchMapping")
            .field("dp_id", &self.dp_id)
            .field("description", &self.description)
            .field("force_add", &self.force_add)
            .field("dp_type", &self.dp_type)
            .field("bitmap_mask", &self.bitmap_mask)
            .field("is_available", &self.is_available.is_some())
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

/// Switch definitions of one Tuya category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorySwitchMapping {
    /// Per product id definitions.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub products: BTreeMap<&'static str, Vec<Arc<SwitchMapping>>>,
    /// Used for products of this category without their own definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Vec<Arc<SwitchMapping>>>,
}

impl CategorySwitchMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product_id: &'static str, mappings: Vec<SwitchMapping>) -> Self {
        self.products
            .insert(product_id, mappings.into_iter().map(Arc::new).collect());
        self
    }

    pub fn with_fallback(mut self, mappings: Vec<SwitchMapping>) -> Self {
        self.mapping = Some(mappings.into_iter().map(Arc::new).collect());
        self
    }
}

/// Category code to category definitions.
pub type MappingTable = BTreeMap<&'static str, CategorySwitchMapping>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_defaults() {
        let mapping = SwitchMapping::new(1, EntityDescription::new("switch"));
        assert!(mapping.force_add);
        assert!(mapping.dp_type.is_none());
        assert!(mapping.getter.is_none());
        assert!(mapping.setter.is_none());
        assert!(mapping.is_available.is_none());
    }

    #[test]
    fn test_mapping_serializes_without_capabilities() {
        let mapping = SwitchMapping::new(62, EntityDescription::new("remote_unlock"))
            .with_force_add(false)
            .with_dp_type(DataPointType::Bool)
            .with_setter(|_: &TuyaBleSwitch, _: &ProductInfo, _: bool| -> Result<()> { Ok(()) });
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dp_id": 62,
                "description": { "key": "remote_unlock" },
                "force_add": false,
                "dp_type": "bool"
            })
        );
    }

    #[test]
    fn test_debug_reports_capability_presence() {
        let mapping = SwitchMapping::new(62, EntityDescription::new("remote_unlock"))
            .with_availability(|_: &TuyaBleSwitch, _: &ProductInfo| true);
        let debug = format!("{:?}", mapping);
        assert!(debug.contains("is_available: true"));
        assert!(debug.contains("setter: false"));
    }
}
