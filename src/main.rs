//! Inspect the switch entities the Tuya BLE switch platform creates.
//!
//! Usage:
//!   tuya-ble-switch entities [--connected]
//!   tuya-ble-switch mappings
//!   tuya-ble-switch --config ./lock.json entities

use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tuya_ble_switch::config::{Config, default_config_path, load_dotenv};
use tuya_ble_switch::coordinator::UpdateCoordinator;
use tuya_ble_switch::devices::{ConfigEntry, IntegrationData, TuyaBleData};
use tuya_ble_switch::error::SwitchError;
use tuya_ble_switch::switch::{SwitchSnapshot, TuyaBleSwitch, mapping_table, setup_entry};
use tuya_ble_switch::tuya_ble::DeviceHandle;

#[derive(Parser)]
#[command(name = "tuya-ble-switch")]
#[command(about = "Inspect switch entities for Tuya BLE devices")]
struct Cli {
    /// Device config file (JSON)
    #[arg(long, env = "TUYA_BLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the switches setup would register for the configured device
    Entities {
        /// Report the device as connected
        #[arg(long)]
        connected: bool,
    },
    /// Print the built-in mapping table
    Mappings,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// Load the config file, falling back to env-only config when the default
/// file does not exist.
fn load_config(path: Option<PathBuf>) -> Result<Config, SwitchError> {
    match path {
        Some(path) => Config::load(&path),
        None => match Config::load(&default_config_path()) {
            Err(SwitchError::ConfigNotFound(path)) => {
                warn!("No config at {}, using defaults and environment", path);
                Config::from_env()
            }
            other => other,
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Entities { connected } => {
            let config = load_config(cli.config)?;
            info!(
                "Device {} ({}/{})",
                config.device.address, config.device.category, config.device.product_id
            );

            let device = config.build_device();
            info!("Reported data points: {:?}", device.datapoints().ids());

            let coordinator = Arc::new(UpdateCoordinator::new(config.product.name.clone()));
            let weak = Arc::downgrade(&coordinator);
            coordinator.add_listener(Arc::new(move || {
                if let Some(coordinator) = weak.upgrade() {
                    debug!(
                        "[TuyaBLE] {} update #{}",
                        coordinator.name(),
                        coordinator.version()
                    );
                }
            }));
            coordinator.set_connected(connected);

            let entry = ConfigEntry::new(config.device.address.clone(), config.product.name.clone());
            let data = IntegrationData::new();
            data.insert(
                entry.entry_id.clone(),
                TuyaBleData::new(
                    Arc::new(device),
                    Arc::new(config.product.clone()),
                    coordinator,
                ),
            );

            let registered = parking_lot::Mutex::new(Vec::<SwitchSnapshot>::new());
            let registrar = |entities: Vec<TuyaBleSwitch>| {
                registered
                    .lock()
                    .extend(entities.iter().map(TuyaBleSwitch::snapshot));
            };
            setup_entry(&data, &entry, &registrar);

            println!(
                "{}",
                serde_json::to_string_pretty(&registered.into_inner())?
            );
        }
        Commands::Mappings => {
            println!("{}", serde_json::to_string_pretty(mapping_table())?);
        }
    }

    Ok(())
}
