//! SeaORM entities
//!
//! Database row models. Converted to domain entities by the postgres adapters.

pub mod clients;
