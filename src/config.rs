use crate::devices::ProductInfo;
use crate::error::{Result, SwitchError};
use crate::tuya_ble::{DataPoint, DataPointType, DataPointValue, DataPoints, TuyaBleDevice};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory for config data, relative to the home directory
const CONFIG_DIR: &str = ".config/tuya-ble-switch";
const CONFIG_FILE: &str = "config.json";

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

fn load_dotenv_from(env_path: &Path) {
    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (key, value) in parse_dotenv(&content) {
        // Env vars take precedence
        if std::env::var(key).is_err() {
            // SAFETY: called before any threads are spawned
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Parse `KEY=value` lines, skipping blanks and comments.
fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    let mut vars = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let mut value = value.trim();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            vars.push((key.trim(), value));
        }
    }
    vars
}

/// Default config file location (`~/.config/tuya-ble-switch/config.json`).
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub device: DeviceConfig,
    pub product: ProductInfo,
    /// Data points known to be reported by the device.
    #[serde(default)]
    pub datapoints: Vec<DataPointConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub address: String,
    pub category: String,
    pub product_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPointConfig {
    pub id: u8,
    #[serde(rename = "type")]
    pub dp_type: DataPointType,
}

impl DataPointConfig {
    /// Data point with a zero value of the configured type.
    fn to_datapoint(self) -> DataPoint {
        let value = match self.dp_type {
            DataPointType::Raw => DataPointValue::Raw(Vec::new()),
            DataPointType::Bool => DataPointValue::Bool(false),
            DataPointType::Value => DataPointValue::Value(0),
            DataPointType::String => DataPointValue::String(String::new()),
            DataPointType::Enum => DataPointValue::Enum(0),
            DataPointType::Bitmap => DataPointValue::Bitmap(Vec::new()),
        };
        DataPoint::new(self.id, value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceConfig {
                address: "00:00:00:00:00:00".to_string(),
                category: "ms".to_string(),
                product_id: "isljqiq1".to_string(),
            },
            product: ProductInfo::new("Smart Lock").with_lock(true),
            datapoints: vec![],
        }
    }
}

impl Config {
    /// Read a JSON config file and apply env overrides.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SwitchError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults with env overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        if let Ok(address) = std::env::var("TUYA_BLE_ADDRESS") {
            self.device.address = address;
        }
        if let Ok(category) = std::env::var("TUYA_BLE_CATEGORY") {
            self.device.category = category;
        }
        if let Ok(product_id) = std::env::var("TUYA_BLE_PRODUCT_ID") {
            self.device.product_id = product_id;
        }
        if let Ok(name) = std::env::var("TUYA_BLE_PRODUCT_NAME") {
            self.product.name = name;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.device.address.trim().is_empty() {
            return Err(SwitchError::InvalidConfig("device.address is empty".into()));
        }
        if self.device.category.trim().is_empty() {
            return Err(SwitchError::InvalidConfig("device.category is empty".into()));
        }
        Ok(())
    }

    /// Device handle with the configured data points.
    pub fn build_device(&self) -> TuyaBleDevice {
        let datapoints: DataPoints = self
            .datapoints
            .iter()
            .map(|dp| dp.to_datapoint())
            .collect();
        TuyaBleDevice::new(
            self.device.address.clone(),
            self.device.category.clone(),
            self.device.product_id.clone(),
        )
        .with_datapoints(datapoints)
    }
}
