// Domain layer: customer model and the ports the service and console talk through.

pub mod model;
pub mod ports;
