// Domain layer: shared models and the output port. No dependency on adapters.

pub mod model;
pub mod ports;
