//! Request handlers, one module per resource.
//!
//! Every handler except `auth::login` takes an [`AuthUser`](crate::middleware::auth::AuthUser)
//! so that a missing or invalid bearer token is rejected with 401 before
//! any storage access.

pub mod auth;
pub mod boat;
pub mod character;
pub mod crew;
pub mod devil_fruit;
pub mod devil_fruit_type;
pub mod haki;
pub mod haki_type;
pub mod island;
pub mod manga;
pub mod rank;
pub mod region;
pub mod users;
pub mod weapon;
