//! Update coordinator shared by all entities of one device.
//!
//! Scheduling of refreshes belongs to the host. The coordinator only tracks
//! whether the device is connected and fans out change notifications to
//! registered listeners, so entities can push their state as soon as new
//! data arrives.

use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Listener invoked whenever the coordinator publishes an update.
pub type UpdateListener = Arc<dyn Fn() + Send + Sync>;

/// Coordinator interface consumed by entities.
pub trait Coordinator: Send + Sync + 'static {
    /// Whether the device is currently reachable.
    fn connected(&self) -> bool;
}

/// Thread-safe coordinator for a single device.
pub struct UpdateCoordinator {
    name: String,
    connected: AtomicBool,
    version: AtomicU32,
    listeners: RwLock<Vec<UpdateListener>>,
}

impl UpdateCoordinator {
    /// Create a new coordinator. Devices start disconnected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connected: AtomicBool::new(false),
            version: AtomicU32::new(0),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Update the connection state. Listeners are notified only on change.
    pub fn set_connected(&self, connected: bool) {
        let old = self.connected.swap(connected, Ordering::SeqCst);
        if old != connected {
            log::info!(
                "[TuyaBLE] {} {}",
                self.name,
                if connected { "connected" } else { "disconnected" }
            );
            self.notify_updated();
        }
    }

    /// Publish an update to all listeners. Always increments version.
    pub fn notify_updated(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
        // Listeners may register further listeners
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn add_listener(&self, listener: UpdateListener) {
        self.listeners.write().push(listener);
    }

    pub fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }
}

impl Coordinator for UpdateCoordinator {
    fn connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
