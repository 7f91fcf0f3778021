// Domain layer: entity shapes, boundary normalization, and the persistence port.

pub mod model;
pub mod ports;
