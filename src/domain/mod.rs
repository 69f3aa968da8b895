// Domain layer: catalog records, page state values and ports (interfaces).

pub mod model;
pub mod ports;
