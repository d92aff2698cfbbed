// Domain layer: models, ports and rule-line classification. No I/O here.

pub mod model;
pub mod ports;
pub mod rules;
