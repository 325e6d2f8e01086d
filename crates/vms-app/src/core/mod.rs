//! # Core Application Module
//!
//! - [`AppCore`]: owns configuration, the session store, the API client and
//!   the router
//! - [`Page`]: a mounted page after guards have run

mod app;
mod page;

pub use app::AppCore;
pub use page::{Opened, Page};
