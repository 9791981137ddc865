// Domain layer: the secret value and the port the handler reads it through.

pub mod model;
pub mod ports;
