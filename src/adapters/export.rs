//! Snapshot exports of vehicle lists for use outside the dealership file.

use crate::domain::model::VehicleRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Comma-separated with a header row, quoting as needed.
pub fn export_csv<W: Write>(vehicles: &[VehicleRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if vehicles.is_empty() {
        csv_writer.write_record([
            "vin", "year", "make", "model", "type", "color", "odometer", "price",
        ])?;
    }
    for vehicle in vehicles {
        csv_writer.serialize(vehicle)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_json<W: Write>(vehicles: &[VehicleRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, vehicles)?;
    writeln!(writer)?;
    Ok(())
}
