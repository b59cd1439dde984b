use crate::app::display::{write_banner, write_vehicles};
use crate::core::Inventory;
use crate::domain::model::VehicleRecord;
use crate::domain::ports::InventoryStore;
use crate::utils::error::{InventoryError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

const OPTIONS: &str = "\
1 - Find vehicles within a price range
2 - Find vehicles by make / model
3 - Find vehicles by year range
4 - Find vehicles by color
5 - Find vehicles by mileage range
6 - Find vehicles by type (car, truck, SUV, van)
7 - List ALL vehicles
8 - Add a vehicle
9 - Remove a vehicle
0 - Quit
";

const WHOLE_NUMBER_HINT: &str = "Please enter a whole number.";
const DECIMAL_HINT: &str = "Please enter a number (e.g., 12345.67).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive text menu over an injected reader and writer.
///
/// The inventory is loaded from the store once, on construction, and saved
/// back after every add or successful remove. Running out of input at any
/// prompt ends the session.
pub struct Menu<S: InventoryStore, R: BufRead, W: Write> {
    store: S,
    inventory: Inventory,
    input: R,
    output: W,
    startup_diagnostic: Option<InventoryError>,
}

impl<S: InventoryStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(store: S, input: R, output: W) -> Self {
        let outcome = store.load();
        Self {
            store,
            inventory: outcome.inventory,
            input,
            output,
            startup_diagnostic: outcome.diagnostic,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(diagnostic) = self.startup_diagnostic.take() {
            writeln!(self.output, "⚠️  {}", diagnostic.user_friendly_message())?;
        }

        loop {
            write_banner(&mut self.output, self.inventory.info())?;
            writeln!(self.output, "{}", OPTIONS)?;

            let Some(choice) = self.read_line("👉 Choose option: ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.process_price_range()?,
                "2" => self.process_make_model()?,
                "3" => self.process_year_range()?,
                "4" => self.process_color()?,
                "5" => self.process_mileage_range()?,
                "6" => self.process_type()?,
                "7" => self.show(self.inventory.all())?,
                "8" => self.process_add_vehicle()?,
                "9" => self.process_remove_vehicle()?,
                "0" => {
                    writeln!(self.output, "\n👋 Goodbye!")?;
                    Flow::Quit
                }
                other => {
                    tracing::debug!("Unknown menu choice {:?}", other);
                    writeln!(self.output, "⚠️  Invalid option. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit || !self.pause()? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show(&mut self, vehicles: Vec<VehicleRecord>) -> Result<Flow> {
        write_vehicles(&mut self.output, &vehicles)?;
        Ok(Flow::Continue)
    }

    fn process_price_range(&mut self) -> Result<Flow> {
        let Some(min) = self.read_number::<f64>("Min price: ", DECIMAL_HINT)? else {
            return Ok(Flow::Quit);
        };
        let Some(max) = self.read_number::<f64>("Max price: ", DECIMAL_HINT)? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_price_range(min, max))
    }

    fn process_make_model(&mut self) -> Result<Flow> {
        let Some(make) = self.read_line("Make (blank = any): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(model) = self.read_line("Model (blank = any): ")? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_make_model(&make, &model))
    }

    fn process_year_range(&mut self) -> Result<Flow> {
        let Some(min) = self.read_number::<i32>("Min year: ", WHOLE_NUMBER_HINT)? else {
            return Ok(Flow::Quit);
        };
        let Some(max) = self.read_number::<i32>("Max year: ", WHOLE_NUMBER_HINT)? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_year_range(min, max))
    }

    fn process_color(&mut self) -> Result<Flow> {
        let Some(color) = self.read_line("Color: ")? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_color(&color))
    }

    fn process_mileage_range(&mut self) -> Result<Flow> {
        let Some(min) = self.read_number::<i64>("Min mileage: ", WHOLE_NUMBER_HINT)? else {
            return Ok(Flow::Quit);
        };
        let Some(max) = self.read_number::<i64>("Max mileage: ", WHOLE_NUMBER_HINT)? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_mileage_range(min, max))
    }

    fn process_type(&mut self) -> Result<Flow> {
        let Some(r#type) = self.read_line("Type (car, truck, suv, van, ...): ")? else {
            return Ok(Flow::Quit);
        };
        self.show(self.inventory.by_type(&r#type))
    }

    fn process_add_vehicle(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n➕ Add Vehicle")?;
        match self.read_vehicle()? {
            Some(vehicle) => {
                tracing::info!("Adding vehicle {}", vehicle.vin);
                self.inventory.add(vehicle);
                self.persist("✅ Vehicle added and inventory saved.")?;
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Quit),
        }
    }

    fn read_vehicle(&mut self) -> Result<Option<VehicleRecord>> {
        let Some(vin) = self.read_number::<i32>("VIN (int): ", WHOLE_NUMBER_HINT)? else {
            return Ok(None);
        };
        let Some(year) = self.read_number::<i32>("Year: ", WHOLE_NUMBER_HINT)? else {
            return Ok(None);
        };
        let Some(make) = self.read_line("Make: ")? else {
            return Ok(None);
        };
        let Some(model) = self.read_line("Model: ")? else {
            return Ok(None);
        };
        let Some(r#type) = self.read_line("Type (car/truck/suv/van): ")? else {
            return Ok(None);
        };
        let Some(color) = self.read_line("Color: ")? else {
            return Ok(None);
        };
        let Some(odometer) = self.read_number::<i64>("Odometer (miles): ", WHOLE_NUMBER_HINT)?
        else {
            return Ok(None);
        };
        let Some(price) = self.read_number::<f64>("Price: ", DECIMAL_HINT)? else {
            return Ok(None);
        };

        Ok(Some(VehicleRecord::new(
            vin,
            year,
            make.trim(),
            model.trim(),
            r#type.trim().to_lowercase(),
            color.trim(),
            odometer,
            price,
        )))
    }

    fn process_remove_vehicle(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n🗑  Remove Vehicle")?;
        let Some(vin) = self.read_number::<i32>("Enter VIN to remove: ", WHOLE_NUMBER_HINT)? else {
            return Ok(Flow::Quit);
        };

        if self.inventory.remove(vin) {
            tracing::info!("Removed vehicle {}", vin);
            self.persist("✅ Vehicle removed and inventory saved.")?;
        } else {
            writeln!(self.output, "⚠️  No vehicle with that VIN was found.")?;
        }
        Ok(Flow::Continue)
    }

    /// Save failures are shown to the user and the session carries on.
    fn persist(&mut self, confirmation: &str) -> Result<()> {
        match self.store.save(&self.inventory) {
            Ok(()) => writeln!(self.output, "{}", confirmation)?,
            Err(e) => writeln!(self.output, "❌ {}", e.user_friendly_message())?,
        }
        Ok(())
    }

    /// Returns false when input is exhausted.
    fn pause(&mut self) -> Result<bool> {
        Ok(self.read_line("\nPress ENTER to continue...")?.is_some())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD instead of ending the session.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Re-prompts until the answer parses.
    fn read_number<T: FromStr>(&mut self, prompt: &str, hint: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "  {}", hint)?,
            }
        }
    }
}
