use crate::core::inventory::Inventory;
use crate::utils::error::{InventoryError, Result};

/// What a load produced: always a usable inventory, plus the I/O failure that
/// forced a fallback to the default one, if any.
#[derive(Debug)]
pub struct LoadOutcome {
    pub inventory: Inventory,
    pub diagnostic: Option<InventoryError>,
}

impl LoadOutcome {
    pub fn clean(inventory: Inventory) -> Self {
        Self {
            inventory,
            diagnostic: None,
        }
    }

    pub fn degraded(inventory: Inventory, diagnostic: InventoryError) -> Self {
        Self {
            inventory,
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }
}

pub trait InventoryStore {
    /// Never fails; read problems are reported through [`LoadOutcome::diagnostic`].
    fn load(&self) -> LoadOutcome;

    /// Overwrites the backing storage with the whole inventory.
    fn save(&self, inventory: &Inventory) -> Result<()>;
}
