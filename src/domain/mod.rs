// Domain layer: site model and the filesystem port. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
