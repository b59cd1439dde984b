use crate::domain::model::{DealershipInfo, VehicleRecord};
use std::io::{self, Write};

const BANNER_RULE: &str = "=========================================================";

pub fn write_banner<W: Write>(out: &mut W, info: &DealershipInfo) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "   🚗 {}  -  {}  -  {}", info.name, info.address, info.phone)?;
    writeln!(out, "{}", BANNER_RULE)
}

/// Table of vehicles, or a notice when there is nothing to show.
pub fn write_vehicles<W: Write>(out: &mut W, vehicles: &[VehicleRecord]) -> io::Result<()> {
    if vehicles.is_empty() {
        return writeln!(out, "⚠️  No matching vehicles found.");
    }

    let (titles, rule) = VehicleRecord::table_header();
    writeln!(out, "{}", titles)?;
    writeln!(out, "{}", rule)?;
    for vehicle in vehicles {
        writeln!(out, "{}", vehicle)?;
    }
    Ok(())
}
