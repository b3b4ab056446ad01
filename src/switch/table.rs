//! Built-in switch definitions and lookup by device.

use super::TuyaBleSwitch;
use super::mapping::{CategorySwitchMapping, MappingTable, SwitchMapping};
use crate::devices::{EntityDescription, ProductInfo};
use crate::error::Result;
use crate::tuya_ble::DeviceHandle;
use std::sync::{Arc, LazyLock};

/// Category code of smart locks.
pub const CATEGORY_SMART_LOCK: &str = "ms";

/// Remote unlock data point of smart locks.
pub const DP_REMOTE_UNLOCK: u8 = 62;

static MAPPING: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::from([(
        CATEGORY_SMART_LOCK,
        CategorySwitchMapping::new().with_product(
            "isljqiq1", // Smart Lock
            vec![
                SwitchMapping::new(
                    DP_REMOTE_UNLOCK,
                    EntityDescription::new("remote_unlock").with_icon("mdi:lock-open-outline"),
                )
                .with_availability(is_remote_unlock_available)
                .with_setter(remote_unlock_setter),
            ],
        ),
    )])
});

/// Remote unlock has no device-side precondition.
fn is_remote_unlock_available(_switch: &TuyaBleSwitch, _product: &ProductInfo) -> bool {
    true
}

/// The unlock command sequence for this lock is not known; no frame is sent.
fn remote_unlock_setter(switch: &TuyaBleSwitch, product: &ProductInfo, value: bool) -> Result<()> {
    log::debug!(
        "[Switch] {} remote unlock requested ({}) on {}, no command sent",
        switch.unique_id(),
        value,
        product.name
    );
    Ok(())
}

/// The built-in mapping table.
pub fn mapping_table() -> &'static MappingTable {
    &MAPPING
}

/// Switch definitions for `category`/`product_id` in `table`.
///
/// Product-specific definitions win; otherwise the category fallback is
/// used. Unknown categories yield an empty slice.
pub fn lookup_mappings<'a>(
    table: &'a MappingTable,
    category: &str,
    product_id: &str,
) -> &'a [Arc<SwitchMapping>] {
    let Some(category) = table.get(category) else {
        return &[];
    };
    if let Some(product_mapping) = category.products.get(product_id) {
        return product_mapping;
    }
    category.mapping.as_deref().unwrap_or(&[])
}

/// Switch definitions from the built-in table for `device`.
pub fn get_mapping_by_device(device: &dyn DeviceHandle) -> &'static [Arc<SwitchMapping>] {
    lookup_mappings(mapping_table(), device.category(), device.product_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuya_ble::TuyaBleDevice;

    fn test_table() -> MappingTable {
        MappingTable::from([
            (
                "kg",
                CategorySwitchMapping::new()
                    .with_product(
                        "prod1",
                        vec![
                            SwitchMapping::new(1, EntityDescription::new("relay")),
                            SwitchMapping::new(2, EntityDescription::new("child_lock")),
                        ],
                    )
                    .with_fallback(vec![SwitchMapping::new(
                        1,
                        EntityDescription::new("generic_relay"),
                    )]),
            ),
            (
                "dj",
                CategorySwitchMapping::new().with_product(
                    "bulb1",
                    vec![SwitchMapping::new(20, EntityDescription::new("power"))],
                ),
            ),
            (
                "cz",
                CategorySwitchMapping::new().with_fallback(vec![SwitchMapping::new(
                    1,
                    EntityDescription::new("socket"),
                )]),
            ),
        ])
    }

    fn keys(mappings: &[Arc<SwitchMapping>]) -> Vec<&'static str> {
        mappings.iter().map(|m| m.description.key).collect()
    }

    #[test]
    fn test_exact_product_match() {
        let table = test_table();
        assert_eq!(
            keys(lookup_mappings(&table, "kg", "prod1")),
            vec!["relay", "child_lock"]
        );
    }

    #[test]
    fn test_category_fallback() {
        let table = test_table();
        assert_eq!(
            keys(lookup_mappings(&table, "kg", "other")),
            vec!["generic_relay"]
        );
    }

    #[test]
    fn test_category_fallback_without_products() {
        let table = test_table();
        assert_eq!(keys(lookup_mappings(&table, "cz", "any")), vec!["socket"]);
    }

    #[test]
    fn test_category_without_fallback_is_empty() {
        let table = test_table();
        assert!(lookup_mappings(&table, "dj", "other").is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let table = test_table();
        assert!(lookup_mappings(&table, "xx", "prod1").is_empty());
    }

    #[test]
    fn test_builtin_smart_lock() {
        let device = TuyaBleDevice::new("DC:23:4D:11:22:33", "ms", "isljqiq1");
        let mappings = get_mapping_by_device(&device);
        assert_eq!(mappings.len(), 1);

        let remote_unlock = &mappings[0];
        assert_eq!(remote_unlock.dp_id, DP_REMOTE_UNLOCK);
        assert_eq!(remote_unlock.description.key, "remote_unlock");
        assert_eq!(
            remote_unlock.description.icon,
            Some("mdi:lock-open-outline")
        );
        assert!(remote_unlock.force_add);
        assert!(remote_unlock.setter.is_some());
        assert!(remote_unlock.is_available.is_some());
        assert!(remote_unlock.getter.is_none());
    }

    #[test]
    fn test_builtin_unknown_lock_model() {
        let device = TuyaBleDevice::new("DC:23:4D:11:22:33", "ms", "unknown");
        assert!(get_mapping_by_device(&device).is_empty());
    }
}
