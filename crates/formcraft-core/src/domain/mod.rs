//! Domain layer
//!
//! Form model, value objects and the pure rules that act on them.

pub mod form;
pub mod services;
pub mod value_objects;

pub use form::*;
pub use value_objects::*;
