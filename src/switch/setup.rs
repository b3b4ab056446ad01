//! Switch platform setup for one config entry.

use super::TuyaBleSwitch;
use super::mapping::{MappingTable, SwitchMapping};
use super::table::{lookup_mappings, mapping_table};
use crate::devices::{ConfigEntry, EntityRegistrar, IntegrationData, TuyaBleData};
use std::sync::Arc;

/// Set up the Tuya BLE switches of `entry` from the built-in table.
pub fn setup_entry(
    data: &IntegrationData,
    entry: &ConfigEntry,
    registrar: &dyn EntityRegistrar<TuyaBleSwitch>,
) {
    setup_entry_with_table(mapping_table(), data, entry, registrar);
}

/// Set up the Tuya BLE switches of `entry` from `table`.
pub fn setup_entry_with_table(
    table: &MappingTable,
    data: &IntegrationData,
    entry: &ConfigEntry,
    registrar: &dyn EntityRegistrar<TuyaBleSwitch>,
) {
    let Some(entry_data) = data.get(&entry.entry_id) else {
        log::error!(
            "[Switch] No integration data for entry {} ({}), skipping setup",
            entry.entry_id,
            entry.title
        );
        return;
    };

    let mappings = lookup_mappings(
        table,
        entry_data.device.category(),
        entry_data.device.product_id(),
    );
    let entities = build_switches(&entry_data, mappings);
    log::info!(
        "[Switch] Adding {} switch(es) for {} ({}/{})",
        entities.len(),
        entry.title,
        entry_data.device.category(),
        entry_data.device.product_id()
    );
    registrar.add_entities(entities);
}

/// Create a switch for every mapping the device should expose.
///
/// A mapping is kept if it is force-added or the device reported its data
/// point (with the expected type, when one is given).
pub fn build_switches(data: &TuyaBleData, mappings: &[Arc<SwitchMapping>]) -> Vec<TuyaBleSwitch> {
    mappings
        .iter()
        .filter(|mapping| {
            mapping.force_add
                || data
                    .device
                    .datapoints()
                    .has_id(mapping.dp_id, mapping.dp_type)
        })
        .map(|mapping| {
            TuyaBleSwitch::new(
                data.device.clone(),
                data.product.clone(),
                data.coordinator.clone(),
                mapping.clone(),
            )
        })
        .collect()
}
