//! Row models and request/response DTOs, one module per table family.
//!
//! Rows hold foreign keys as plain ids only. Display names of referenced
//! rows are resolved by the HTTP layer into the `*Response` types.

pub mod boat;
pub mod character;
pub mod crew;
pub mod devil_fruit;
pub mod haki;
pub mod island;
pub mod manga;
pub mod rank;
pub mod region;
pub mod user;
pub mod weapon;
