// Domain layer: lookup results, replies and the ports the relay talks through.

pub mod model;
pub mod ports;
