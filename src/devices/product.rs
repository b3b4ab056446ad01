use serde::{Deserialize, Serialize};

/// Static information about a Tuya BLE product model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Product is a lock (exposes lock-specific controls).
    #[serde(default)]
    pub lock: bool,
}

impl ProductInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: None,
            lock: false,
        }
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }
}
