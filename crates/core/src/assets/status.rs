//! Asset status vocabulary.
//!
//! The database stores status as free text. Whether unknown values are
//! accepted is decided by [`StatusPolicy`].

use std::str::FromStr;

use crate::error::CoreError;

/// Asset is in stock and can be handed out.
pub const STATUS_AVAILABLE: &str = "available";

/// Asset has been assigned to someone.
pub const STATUS_ASSIGNED: &str = "assigned";

/// Asset is actively in use.
pub const STATUS_IN_USE: &str = "in_use";

/// Asset is out for repair or servicing.
pub const STATUS_MAINTENANCE: &str = "maintenance";

/// Status given to assets created without one.
pub const DEFAULT_STATUS: &str = STATUS_AVAILABLE;

/// All recognised status values, in display order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_AVAILABLE,
    STATUS_ASSIGNED,
    STATUS_IN_USE,
    STATUS_MAINTENANCE,
];

/// How strictly incoming status values are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Unknown statuses are stored as given (after trimming).
    #[default]
    Permissive,
    /// Only values in [`VALID_STATUSES`] are accepted.
    Strict,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "Unknown status policy '{other}'. Must be one of: permissive, strict"
            )),
        }
    }
}

/// Check a (trimmed, non-empty) status against the policy.
pub fn validate_status(status: &str, policy: StatusPolicy) -> Result<(), CoreError> {
    if policy == StatusPolicy::Permissive || VALID_STATUSES.contains(&status) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid status '{status}'. Must be one of: {}",
        VALID_STATUSES.join(", ")
    )))
}

/// Human-readable label for a status, falling back to the raw value.
pub fn status_label(status: &str) -> &str {
    match status {
        STATUS_AVAILABLE => "Available",
        STATUS_ASSIGNED => "Assigned",
        STATUS_IN_USE => "In Use",
        STATUS_MAINTENANCE => "Maintenance",
        other => other,
    }
}

/// Style class used by the inventory table's status pill.
pub fn status_class(status: &str) -> &'static str {
    match status {
        STATUS_AVAILABLE => "status-available",
        STATUS_ASSIGNED | STATUS_IN_USE => "status-inuse",
        STATUS_MAINTENANCE => "status-maintenance",
        _ => "status-default",
    }
}
