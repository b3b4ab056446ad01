//! Device-side types for Tuya BLE devices.
//!
//! Only the parts platforms consume are modelled here: identifiers and the
//! data-point store. Frame encoding and the BLE connection are handled by the
//! transport.

mod datapoints;
mod device;

pub use datapoints::{DataPoint, DataPointType, DataPointValue, DataPoints};
pub use device::{DeviceHandle, TuyaBleDevice};
