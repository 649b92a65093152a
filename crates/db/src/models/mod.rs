//! Row models.
//!
//! Each submodule holds a `FromRow` + `Serialize` entity struct matching the
//! database row. Write payloads are normalized in `inventory_core` before
//! they reach the repositories.

pub mod asset;
