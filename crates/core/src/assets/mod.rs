//! Asset inventory business logic.
//!
//! - [`status`]: the status vocabulary and enforcement policy.
//! - [`input`]: normalization and validation of create/update payloads.
//! - [`view`]: the presentation adapter between stored records and the
//!   list/edit screens.

pub mod input;
pub mod status;
pub mod view;

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in `NotFound` errors and log lines.
pub const ASSET_ENTITY: &str = "Asset";

/// Parse an asset id taken from a request path.
///
/// Only positive integers are accepted. Surrounding whitespace is ignored.
pub fn parse_asset_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidArgument(
            "Valid asset ID is required".to_string(),
        )),
    }
}
