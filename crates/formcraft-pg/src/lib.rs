//! FormCraft PostgreSQL Gateway
//!
//! [`PgFormGateway`] implements the core's persistence port on top of a
//! `sqlx` pool. Schema, seed option catalog and the `sp_*` procedures ship
//! as an embedded migration ([`MIGRATOR`]).

#![warn(clippy::all)]

pub mod config;
pub mod gateway;
mod records;

pub use config::PgGatewayConfig;
pub use gateway::{PgFormGateway, MIGRATOR};
