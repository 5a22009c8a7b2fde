//! API Routes

pub mod field_options;
pub mod forms;
pub mod health;
pub mod preview;
