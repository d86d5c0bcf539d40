// Domain layer: entities, call context and the capability ports the gateway implements.

pub mod context;
pub mod model;
pub mod ports;
