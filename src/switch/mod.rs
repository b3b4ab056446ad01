//! Switch platform for Tuya BLE devices.
//!
//! Maps vendor data points to on/off switch entities:
//! - `mapping`: switch definitions and the capabilities they delegate to
//! - `table`: built-in category/product definitions and lookup
//! - `entity`: the switch entity
//! - `setup`: creates and registers switches for a config entry

mod entity;
mod mapping;
mod setup;
mod table;

pub use entity::{SwitchSnapshot, TuyaBleSwitch};
pub use mapping::{
    CategorySwitchMapping, MappingTable, SwitchAvailability, SwitchGetter, SwitchMapping,
    SwitchSetter,
};
pub use setup::{build_switches, setup_entry, setup_entry_with_table};
pub use table::{
    CATEGORY_SMART_LOCK, DP_REMOTE_UNLOCK, get_mapping_by_device, lookup_mappings, mapping_table,
};
