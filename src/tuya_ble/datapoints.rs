//! Data points reported by a Tuya BLE device.
//!
//! A data point is a vendor-defined value addressed by a numeric id. The
//! transport layer decodes incoming frames into [`DataPoint`]s and stores
//! them in the device's [`DataPoints`] store; platforms only query it.

use crate::error::{Result, SwitchError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use strum::{Display, EnumString, FromRepr};

/// Encoding of a data point value, numbered as on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromRepr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DataPointType {
    Raw = 0,
    Bool = 1,
    Value = 2,
    String = 3,
    Enum = 4,
    Bitmap = 5,
}

impl TryFrom<u8> for DataPointType {
    type Error = SwitchError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_repr(value).ok_or(SwitchError::UnknownDataPointType(value))
    }
}

/// Decoded value of a data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DataPointValue {
    Raw(Vec<u8>),
    Bool(bool),
    Value(i32),
    String(String),
    Enum(u32),
    Bitmap(Vec<u8>),
}

impl DataPointValue {
    /// The wire encoding matching this value.
    pub fn dp_type(&self) -> DataPointType {
        match self {
            DataPointValue::Raw(_) => DataPointType::Raw,
            DataPointValue::Bool(_) => DataPointType::Bool,
            DataPointValue::Value(_) => DataPointType::Value,
            DataPointValue::String(_) => DataPointType::String,
            DataPointValue::Enum(_) => DataPointType::Enum,
            DataPointValue::Bitmap(_) => DataPointType::Bitmap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: u8,
    pub value: DataPointValue,
}

impl DataPoint {
    pub fn new(id: u8, value: DataPointValue) -> Self {
        Self { id, value }
    }

    pub fn dp_type(&self) -> DataPointType {
        self.value.dp_type()
    }
}

/// Thread-safe store of the data points a device has reported.
///
/// The version is incremented each time a stored value changes, so readers
/// can detect updates without comparing values.
pub struct DataPoints {
    points: RwLock<BTreeMap<u8, DataPoint>>,
    version: AtomicU32,
}

impl DataPoints {
    pub fn new() -> Self {
        Self {
            points: RwLock::new(BTreeMap::new()),
            version: AtomicU32::new(0),
        }
    }

    /// Check whether the device reported data point `id`.
    ///
    /// When `dp_type` is given, the stored point must also have that type.
    pub fn has_id(&self, id: u8, dp_type: Option<DataPointType>) -> bool {
        match self.points.read().get(&id) {
            Some(point) => dp_type.is_none_or(|t| point.dp_type() == t),
            None => false,
        }
    }

    pub fn get(&self, id: u8) -> Option<DataPoint> {
        self.points.read().get(&id).cloned()
    }

    /// Store a data point. Returns `true` and increments the version if the
    /// stored value changed.
    pub fn update(&self, point: DataPoint) -> bool {
        let mut points = self.points.write();
        if points.get(&point.id) == Some(&point) {
            return false;
        }
        log::debug!(
            "[TuyaBLE] Data point {} updated: {:?}",
            point.id,
            point.value
        );
        points.insert(point.id, point);
        self.version.fetch_add(1, Ordering::SeqCst);
        true
    }

    /// Ids of all stored data points, ascending.
    pub fn ids(&self) -> Vec<u8> {
        self.points.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.points.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.read().is_empty()
    }

    pub fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }
}

impl Default for DataPoints {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<DataPoint> for DataPoints {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        let store = Self::new();
        for point in iter {
            store.update(point);
        }
        store
    }
}
