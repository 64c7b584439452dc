// Domain layer: models and ports. Adapters implement the ports, core holds the rules.

pub mod model;
pub mod ports;
