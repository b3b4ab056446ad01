//! Tuya BLE device handle.
//!
//! The BLE transport lives outside this crate. Platforms only need the
//! identifiers Tuya assigns to a device and the data points it reported,
//! which is what [`DeviceHandle`] exposes.

use super::datapoints::DataPoints;

/// Device-side interface consumed by entity platforms.
pub trait DeviceHandle: Send + Sync + 'static {
    /// BLE address, used to build unique entity ids.
    fn address(&self) -> &str;

    /// Tuya category code (e.g. `"ms"` for smart locks).
    fn category(&self) -> &str;

    /// Tuya product id identifying the exact model.
    fn product_id(&self) -> &str;

    /// Data points reported by the device so far.
    fn datapoints(&self) -> &DataPoints;
}

/// A Tuya BLE device as known after pairing.
pub struct TuyaBleDevice {
    address: String,
    category: String,
    product_id: String,
    datapoints: DataPoints,
}

impl TuyaBleDevice {
    pub fn new(
        address: impl Into<String>,
        category: impl Into<String>,
        product_id: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            category: category.into(),
            product_id: product_id.into(),
            datapoints: DataPoints::new(),
        }
    }

    /// Replace the data-point store, e.g. with points restored from config.
    pub fn with_datapoints(mut self, datapoints: DataPoints) -> Self {
        self.datapoints = datapoints;
        self
    }
}

impl DeviceHandle for TuyaBleDevice {
    fn address(&self) -> &str {
        &self.address
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn product_id(&self) -> &str {
        &self.product_id
    }

    fn datapoints(&self) -> &DataPoints {
        &self.datapoints
    }
}
