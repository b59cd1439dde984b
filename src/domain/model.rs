use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field separator of the persisted inventory format.
pub const DELIMITER: char = '|';

/// Number of fields a vehicle line must carry to be accepted.
pub const VEHICLE_FIELD_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("vehicle line has {found} fields, expected at least {}", VEHICLE_FIELD_COUNT)]
pub struct ParseFailure {
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vin: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub r#type: String,
    pub color: String,
    pub odometer: i64,
    pub price: f64,
}

impl VehicleRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vin: i32,
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        r#type: impl Into<String>,
        color: impl Into<String>,
        odometer: i64,
        price: f64,
    ) -> Self {
        Self {
            vin,
            year,
            make: make.into(),
            model: model.into(),
            r#type: r#type.into(),
            color: color.into(),
            odometer,
            price,
        }
    }

    /// `vin|year|make|model|type|color|odometer|price`, without escaping.
    pub fn serialize(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.vin,
            self.year,
            self.make,
            self.model,
            self.r#type,
            self.color,
            self.odometer,
            self.price
        )
    }

    /// Parses one persisted vehicle line.
    ///
    /// Only a short line is a failure. Numeric columns go through
    /// [`parse_or_zero`], text columns are kept verbatim and anything past the
    /// eighth column is ignored.
    pub fn parse(line: &str) -> Result<Self, ParseFailure> {
        let fields = split_fields(line);
        if fields.len() < VEHICLE_FIELD_COUNT {
            return Err(ParseFailure {
                found: fields.len(),
            });
        }

        Ok(Self {
            vin: parse_or_zero(fields[0]),
            year: parse_or_zero(fields[1]),
            make: fields[2].to_string(),
            model: fields[3].to_string(),
            r#type: fields[4].to_string(),
            color: fields[5].to_string(),
            odometer: parse_or_zero(fields[6]),
            price: parse_or_zero(fields[7]),
        })
    }
}

impl FromStr for VehicleRecord {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fixed-width table row, aligned with [`VehicleRecord::table_header`].
impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6}  {:<4}  {:<10} {:<12} {:<6} {:<10} {:>12}  {:>12.2}",
            self.vin,
            self.year,
            self.make,
            self.model,
            self.r#type,
            self.color,
            self.odometer,
            self.price
        )
    }
}

impl VehicleRecord {
    /// Column titles and the rule printed under them.
    pub fn table_header() -> (String, String) {
        let titles = format!(
            "{:<6}  {:<4}  {:<10} {:<12} {:<6} {:<10} {:>12}  {:>12}",
            "VIN", "YEAR", "MAKE", "MODEL", "TYPE", "COLOR", "MILEAGE", "PRICE"
        );
        let rule = [6, 4, 10, 12, 6, 10, 12, 12]
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let sep = match i {
                    0 => "",
                    1 | 2 | 7 => "  ",
                    _ => " ",
                };
                format!("{}{}", sep, "-".repeat(*width))
            })
            .collect();
        (titles, rule)
    }
}

/// Dealership metadata stored on the first line of the inventory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealershipInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl DealershipInfo {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    pub fn serialize(&self) -> String {
        format!("{}|{}|{}", self.name, self.address, self.phone)
    }
}

/// Best-effort numeric parse with zero fallback: the raw value is trimmed and
/// parsed, and anything unparsable becomes the type's zero.
pub fn parse_or_zero<T>(raw: &str) -> T
where
    T: FromStr + Default,
{
    raw.trim().parse().unwrap_or_default()
}

/// Splits a persisted line on [`DELIMITER`], dropping trailing empty fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
