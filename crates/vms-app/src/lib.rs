//! # VMS App - Portable Headless Application Core
//!
//! The client side of the volunteer management system without any rendering:
//! session persistence, the authenticated HTTP client, route guards, debounced
//! search and the data-bound list views with optimistic mutations.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Front end (vms-cli, or any other)                    │
//! └───────────────┬──────────────────────────────────────┘
//!                 │ open(path) / workflows
//! ┌───────────────▼──────────────────────────────────────┐
//! │ AppCore                                              │
//! │   Router ── guards ──▶ SessionReader ◀── SessionStore │
//! │   views (LiveList / RemoteList) ──▶ ApiClient         │
//! └───────────────┬──────────────────────────────────────┘
//!                 │ HttpTransport
//!        ReqwestTransport | InMemoryTransport
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let app = AppCore::with_reqwest(config, FileStorage::open(path)?)?;
//! workflows::auth::login(&app, "vol1@vms.com", "password123").await?;
//!
//! if let Page::Groups(groups) = app.open("/groups").await?.page {
//!     groups.set_search("beach");
//! }
//! ```

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod core;
pub mod debounce;
pub mod http;
pub mod routing;
pub mod session;
pub mod views;
pub mod workflows;

pub use crate::config::AppConfig;
pub use crate::core::{AppCore, Opened, Page};
pub use crate::debounce::Debouncer;
pub use crate::http::{ApiClient, HttpMethod, HttpRequest, HttpTransport, InMemoryTransport};
#[cfg(feature = "reqwest-transport")]
pub use crate::http::ReqwestTransport;
pub use crate::routing::{Guard, GuardDecision, Navigation, Route, Router};
pub use crate::session::{FileStorage, MemoryStorage, SessionReader, SessionStorage, SessionStore};
pub use crate::views::{LoadStatus, MutationOutcome, ViewContext};

pub use vms_core::{HttpError, Role, Session, VmsError};
