// Domain layer: the joke model and the ports the workers and config talk through.

pub mod model;
pub mod ports;
