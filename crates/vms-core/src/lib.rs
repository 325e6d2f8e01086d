//! VMS Core - shared domain model
//!
//! Types that every VMS crate speaks: the session pair (token + role), the
//! entities served by the backend (events, groups, users, notifications) and
//! the unified error type.
//!
//! This crate is pure: no I/O, no async runtime. The application core
//! (`vms-app`) owns transport, storage and state.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Backend entities and their wire shapes
pub mod domain;

/// Unified error handling
pub mod errors;

/// Typed identifiers for backend entities
pub mod identifiers;

/// Closed role enumeration
pub mod role;

/// Session credentials
pub mod session;

pub use domain::{
    Event, Group, MembershipState, Notification, Skills, User, Volunteer,
};
pub use errors::{ErrorCategory, HttpError, Result, VmsError};
pub use identifiers::{EventId, GroupId, NotificationId, UserId};
pub use role::Role;
pub use session::Session;
