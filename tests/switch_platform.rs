//! End-to-end setup of the switch platform for a configured smart lock.

use parking_lot::Mutex;
use std::sync::Arc;
use tuya_ble_switch::config::Config;
use tuya_ble_switch::coordinator::UpdateCoordinator;
use tuya_ble_switch::devices::{ConfigEntry, IntegrationData, TuyaBleData};
use tuya_ble_switch::switch::{TuyaBleSwitch, setup_entry};

fn setup(config: &Config, coordinator: Arc<UpdateCoordinator>) -> Vec<TuyaBleSwitch> {
    let entry = ConfigEntry::new("lock-entry", "Front door");
    let data = IntegrationData::new();
    data.insert(
        "lock-entry",
        TuyaBleData::new(
            Arc::new(config.build_device()),
            Arc::new(config.product.clone()),
            coordinator,
        ),
    );

    let registered = Mutex::new(Vec::new());
    let registrar = |entities: Vec<TuyaBleSwitch>| registered.lock().extend(entities);
    setup_entry(&data, &entry, &registrar);
    registered.into_inner()
}

#[test]
fn test_smart_lock_gets_remote_unlock() {
    let coordinator = Arc::new(UpdateCoordinator::new("Front door"));
    let switches = setup(&Config::default(), coordinator.clone());

    assert_eq!(switches.len(), 1);
    let remote_unlock = &switches[0];
    assert_eq!(remote_unlock.unique_id(), "00:00:00:00:00:00-remote_unlock");
    assert_eq!(remote_unlock.mapping().dp_id, 62);

    // Device not connected yet
    assert!(!remote_unlock.available());

    coordinator.set_connected(true);
    assert!(remote_unlock.available());

    // Unlock command is accepted but state is not read back
    assert!(remote_unlock.turn_on().is_ok());
    assert!(remote_unlock.turn_off().is_ok());
    assert!(!remote_unlock.is_on());
}

#[test]
fn test_unmapped_device_gets_no_switches() {
    let mut config = Config::default();
    config.device.category = "kg".to_string();
    config.device.product_id = "unknown".to_string();

    let switches = setup(&config, Arc::new(UpdateCoordinator::new("Relay")));
    assert!(switches.is_empty());
}

#[test]
fn test_unload_drops_entry_data() {
    let data = IntegrationData::new();
    let config = Config::default();
    data.insert(
        "lock-entry",
        TuyaBleData::new(
            Arc::new(config.build_device()),
            Arc::new(config.product.clone()),
            Arc::new(UpdateCoordinator::new("Front door")),
        ),
    );
    assert_eq!(data.len(), 1);

    assert!(data.remove("lock-entry").is_some());
    assert!(data.is_empty());

    let registered = Mutex::new(0usize);
    let registrar = |_: Vec<TuyaBleSwitch>| *registered.lock() += 1;
    setup_entry(
        &data,
        &ConfigEntry::new("lock-entry", "Front door"),
        &registrar,
    );
    assert_eq!(registered.into_inner(), 0);
}
