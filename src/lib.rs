//! Tuya BLE switch platform.
//!
//! This library maps the data points of Tuya BLE devices to on/off switch
//! entities and registers them with the host for each configured device.

pub mod config;
pub mod coordinator;
pub mod devices;
pub mod error;
pub mod switch;
pub mod tuya_ble;
