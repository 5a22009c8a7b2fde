//! Domain services
//!
//! Stateless rules that do not belong to a single entity.

pub mod assembler;
pub mod normalizer;
pub mod validator;

pub use assembler::FormAssembler;
pub use normalizer::normalize_display_order;
pub use validator::FormValidator;
