//! Domain logic for the asset inventory.
//!
//! Nothing in this crate touches the database; callers pass in data from the
//! repository layer and persist what comes back.

pub mod assets;
pub mod error;
pub mod types;
