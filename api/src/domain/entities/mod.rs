//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod client;
pub mod user;

pub use client::{Client, ClientId, ClientTier, CreditPolicy};
pub use user::{CreditLimit, NewUser, RegistrationRequest};
