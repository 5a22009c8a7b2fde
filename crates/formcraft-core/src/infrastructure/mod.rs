//! Infrastructure layer
//!
//! Gateway implementations that live inside the core crate.

pub mod memory;

pub use memory::InMemoryFormGateway;
