// Domain layer: document and rule models plus the storage port. No I/O here.

pub mod model;
pub mod ports;
