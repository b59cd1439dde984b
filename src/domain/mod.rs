// Domain layer: vehicle records, dealership metadata and the storage port.

pub mod model;
pub mod ports;
