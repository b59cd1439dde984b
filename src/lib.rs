pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FileStore;
pub use app::Menu;
pub use config::AppConfig;
pub use crate::core::{DealershipInfo, Inventory, InventoryStore, LoadOutcome, VehicleRecord};
pub use utils::error::{InventoryError, Result};
