//! News aggregate containing the headline entity and sentiment value objects.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
