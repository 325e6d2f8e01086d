//! # Workflows
//!
//! Multi-step operations that end in a navigation: log in and land on the
//! dashboard, create an event and land on the feed. Workflows return domain
//! values and [`Navigation`](crate::routing::Navigation)s; front ends decide
//! how to show them.
//!
//! Only the auth workflows write the session.

pub mod auth;
pub mod create_event;
pub mod create_group;

use vms_core::VmsError;

/// Reject a blank required field.
pub(crate) fn require(field: &str, value: &str) -> Result<(), VmsError> {
    if value.trim().is_empty() {
        Err(VmsError::invalid(format!("{field} is required")))
    } else {
        Ok(())
    }
}
