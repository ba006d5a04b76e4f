//! Chart aggregate containing the chart-ready value objects and the
//! series-alignment domain service.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
