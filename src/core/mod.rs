pub mod inventory;

pub use crate::domain::model::{DealershipInfo, ParseFailure, VehicleRecord};
pub use crate::domain::ports::{InventoryStore, LoadOutcome};
pub use crate::utils::error::Result;
pub use inventory::Inventory;
