use crate::core::Inventory;
use crate::domain::model::{split_fields, DealershipInfo, VehicleRecord};
use crate::domain::ports::{InventoryStore, LoadOutcome};
use crate::utils::error::{InventoryError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_PATH: &str = "inventory.csv";

const DEFAULT_NAME: &str = "Your Dealership";
const DEFAULT_ADDRESS: &str = "123 Main st";
const DEFAULT_PHONE: &str = "888-888-8888";
const FALLBACK_PHONE: &str = "000-000-0000";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Pipe-delimited inventory file: a metadata line followed by one line per vehicle.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dealership used when there is no file yet.
    fn missing_file_inventory() -> Inventory {
        Inventory::new(DealershipInfo::new(DEFAULT_NAME, DEFAULT_ADDRESS, DEFAULT_PHONE))
    }

    /// Dealership used when the file starts with a blank line.
    fn blank_header_inventory() -> Inventory {
        Inventory::new(DealershipInfo::new(DEFAULT_NAME, "Your address", FALLBACK_PHONE))
    }

    /// Dealership used when the file exists but cannot be read.
    fn unreadable_inventory() -> Inventory {
        Inventory::new(DealershipInfo::new("Your dealership", DEFAULT_ADDRESS, FALLBACK_PHONE))
    }

    fn parse_header(header: &str) -> DealershipInfo {
        let fields = split_fields(header);
        DealershipInfo::new(
            fields.first().copied().unwrap_or(DEFAULT_NAME),
            fields.get(1).copied().unwrap_or(DEFAULT_ADDRESS),
            fields.get(2).copied().unwrap_or(FALLBACK_PHONE),
        )
    }

    /// Builds an inventory from the full file contents.
    pub fn parse_contents(contents: &str) -> Inventory {
        let mut lines = contents.split(['\n', '\r']);

        let header = match lines.next() {
            Some(header) if !header.trim().is_empty() => header,
            _ => {
                tracing::debug!("Inventory header is blank, using defaults");
                return Self::blank_header_inventory();
            }
        };

        let mut inventory = Inventory::new(Self::parse_header(header));
        for line in lines.filter(|line| !line.trim().is_empty()) {
            match line.parse::<VehicleRecord>() {
                Ok(vehicle) => inventory.add(vehicle),
                Err(e) => tracing::debug!("Skipping vehicle line {:?}: {}", line, e),
            }
        }
        inventory
    }

    fn write_inventory(&self, inventory: &Inventory) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);

        write!(writer, "{}{}", inventory.info().serialize(), LINE_ENDING)?;
        for vehicle in inventory.iter() {
            write!(writer, "{}{}", vehicle.serialize(), LINE_ENDING)?;
        }

        writer.flush()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> LoadOutcome {
        if !self.path.exists() {
            tracing::info!("No inventory at {}, starting fresh", self.path.display());
            return LoadOutcome::clean(Self::missing_file_inventory());
        }

        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let inventory = Self::parse_contents(&contents);
                tracing::info!(
                    "Loaded {} vehicles for {} from {}",
                    inventory.len(),
                    inventory.name(),
                    self.path.display()
                );
                LoadOutcome::clean(inventory)
            }
            Err(source) => {
                let error = InventoryError::ReadError {
                    path: self.path.clone(),
                    source,
                };
                tracing::warn!("{}", error);
                LoadOutcome::degraded(Self::unreadable_inventory(), error)
            }
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<()> {
        self.write_inventory(inventory).map_err(|source| {
            let error = InventoryError::WriteError {
                path: self.path.clone(),
                source,
            };
            tracing::warn!("{}", error);
            error
        })?;

        tracing::debug!(
            "Saved {} vehicles to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}
