// Domain layer: models and ports. No terminal or file dependencies.

pub mod model;
pub mod ports;
