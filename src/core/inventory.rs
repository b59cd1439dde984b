use crate::domain::model::{DealershipInfo, VehicleRecord};

/// The dealership and its vehicles, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    info: DealershipInfo,
    vehicles: Vec<VehicleRecord>,
}

impl Inventory {
    pub fn new(info: DealershipInfo) -> Self {
        Self {
            info,
            vehicles: Vec::new(),
        }
    }

    pub fn info(&self) -> &DealershipInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn address(&self) -> &str {
        &self.info.address
    }

    pub fn phone(&self) -> &str {
        &self.info.phone
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Appends without checking for an existing vin.
    pub fn add(&mut self, vehicle: VehicleRecord) {
        self.vehicles.push(vehicle);
    }

    /// Removes every vehicle carrying `vin`. Returns whether anything was removed.
    pub fn remove(&mut self, vin: i32) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.vin != vin);
        self.vehicles.len() != before
    }

    /// Snapshot of every vehicle; changes to it do not reach the inventory.
    pub fn all(&self) -> Vec<VehicleRecord> {
        self.vehicles.clone()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.vehicles.iter()
    }

    pub fn by_price_range(&self, min: f64, max: f64) -> Vec<VehicleRecord> {
        self.select(|v| v.price >= min && v.price <= max)
    }

    pub fn by_make_model(&self, make: &str, model: &str) -> Vec<VehicleRecord> {
        let make = normalize(make);
        let model = normalize(model);
        self.select(|v| contains_folded(&v.make, &make) && contains_folded(&v.model, &model))
    }

    pub fn by_year_range(&self, min: i32, max: i32) -> Vec<VehicleRecord> {
        self.select(|v| v.year >= min && v.year <= max)
    }

    pub fn by_color(&self, color: &str) -> Vec<VehicleRecord> {
        let color = normalize(color);
        self.select(|v| contains_folded(&v.color, &color))
    }

    pub fn by_mileage_range(&self, min: i64, max: i64) -> Vec<VehicleRecord> {
        self.select(|v| v.odometer >= min && v.odometer <= max)
    }

    pub fn by_type(&self, r#type: &str) -> Vec<VehicleRecord> {
        let r#type = normalize(r#type);
        self.select(|v| contains_folded(&v.r#type, &r#type))
    }

    fn select<F>(&self, keep: F) -> Vec<VehicleRecord>
    where
        F: Fn(&VehicleRecord) -> bool,
    {
        self.vehicles.iter().filter(|v| keep(v)).cloned().collect()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Empty needle matches everything.
fn contains_folded(field: &str, needle: &str) -> bool {
    needle.is_empty() || normalize(field).contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot() -> Inventory {
        let mut inventory = Inventory::new(DealershipInfo::new("Test Motors", "456 Elm St", "555-7890"));
        inventory.add(VehicleRecord::new(1001, 2020, "Toyota", "Camry", "Car", "Blue", 12345, 25999.99));
        inventory.add(VehicleRecord::new(1002, 2021, "Honda", "Civic", "Car", "Red", 9876, 21999.99));
        inventory.add(VehicleRecord::new(3001, 2019, "BMW", "X3", "SUV", "White", 15000, 39999.99));
        inventory.add(VehicleRecord::new(4002, 2022, "Tesla", "Model 3", "Car", "Silver", 8000, 45999.99));
        inventory.add(VehicleRecord::new(5001, 2018, "Ford", "F150", "Truck", "Dark Blue", 60000, 28500.0));
        inventory
    }

    fn vins(records: &[VehicleRecord]) -> Vec<i32> {
        records.iter().map(|v| v.vin).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order_and_duplicates() {
        let mut inventory = lot();
        inventory.add(VehicleRecord::new(1001, 2015, "Kia", "Rio", "Car", "Grey", 1, 1.0));

        assert_eq!(inventory.len(), 6);
        assert_eq!(vins(&inventory.all()), vec![1001, 1002, 3001, 4002, 5001, 1001]);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut inventory = lot();
        inventory.add(VehicleRecord::new(1001, 2015, "Kia", "Rio", "Car", "Grey", 1, 1.0));

        assert!(inventory.remove(1001));
        assert!(inventory.all().iter().all(|v| v.vin != 1001));
        assert_eq!(inventory.len(), 4);
        assert!(!inventory.remove(1001));
        assert!(!inventory.remove(424242));
    }

    #[test]
    fn test_all_is_a_snapshot() {
        let inventory = lot();
        let mut snapshot = inventory.all();
        snapshot.clear();
        assert_eq!(inventory.len(), 5);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let inventory = lot();
        let hits = inventory.by_price_range(21999.99, 28500.0);
        assert_eq!(vins(&hits), vec![1001, 1002, 5001]);
        assert!(hits.iter().all(|v| v.price >= 21999.99 && v.price <= 28500.0));
    }

    #[test]
    fn test_inverted_ranges_are_empty() {
        let inventory = lot();
        assert!(inventory.by_price_range(50000.0, 10000.0).is_empty());
        assert!(inventory.by_year_range(2022, 2018).is_empty());
        assert!(inventory.by_mileage_range(60000, 0).is_empty());
    }

    #[test]
    fn test_degenerate_range_matches_exact_value() {
        let inventory = lot();
        assert_eq!(vins(&inventory.by_year_range(2019, 2019)), vec![3001]);
        assert_eq!(vins(&inventory.by_mileage_range(8000, 8000)), vec![4002]);
    }

    #[test]
    fn test_year_and_mileage_ranges() {
        let inventory = lot();
        assert_eq!(vins(&inventory.by_year_range(2020, 2021)), vec![1001, 1002]);
        assert_eq!(vins(&inventory.by_mileage_range(0, 12345)), vec![1001, 1002, 4002]);
    }

    #[test]
    fn test_make_model_is_case_insensitive_substring() {
        let inventory = lot();
        assert_eq!(vins(&inventory.by_make_model("  toy ", "")), vec![1001]);
        assert_eq!(vins(&inventory.by_make_model("", "MODEL")), vec![4002]);
        assert_eq!(vins(&inventory.by_make_model("o", "c")), vec![1001, 1002]);
        assert!(inventory.by_make_model("Honda", "Camry").is_empty());
    }

    #[test]
    fn test_blank_queries_return_everything_in_order() {
        let inventory = lot();
        let all = vins(&inventory.all());
        assert_eq!(vins(&inventory.by_make_model("", "   ")), all);
        assert_eq!(vins(&inventory.by_color("")), all);
        assert_eq!(vins(&inventory.by_type("  ")), all);
    }

    #[test]
    fn test_color_and_type_filters() {
        let inventory = lot();
        assert_eq!(vins(&inventory.by_color("BLUE")), vec![1001, 5001]);
        assert_eq!(vins(&inventory.by_type("car")), vec![1001, 1002, 4002]);
        assert_eq!(vins(&inventory.by_type("suv")), vec![3001]);
        assert!(inventory.by_type("van").is_empty());
    }

    #[test]
    fn test_filters_leave_stored_fields_untouched() {
        let mut inventory = Inventory::new(DealershipInfo::new("a", "b", "c"));
        inventory.add(VehicleRecord::new(1, 2000, " Mazda ", "Miata", "Car", " Red ", 1, 1.0));

        let hits = inventory.by_color("red");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].color, " Red ");
        assert_eq!(hits[0].make, " Mazda ");
    }
}
