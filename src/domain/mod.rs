// Domain layer: resource spec models, wire types, tags and ports (interfaces).

pub mod model;
pub mod ports;
pub mod tag;
pub mod wire;
