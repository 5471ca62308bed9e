// Domain layer: input shapes, booking rows and ports. No I/O here.

pub mod model;
pub mod ports;
