//! # List Views
//!
//! Headless versions of the list pages. Each view fetches on mount, exposes
//! its items and [`LoadStatus`], and applies user actions optimistically
//! through [`RemoteList::mutate`].
//!
//! Views never read global state. They receive a [`ViewContext`] carrying the
//! API client (and through it the read-only session) and the search delay.

mod collection;
mod live;
mod remote_list;

pub mod events;
pub mod group_details;
pub mod groups;
pub mod network;
pub mod notifications;
pub mod profile;

pub use collection::{Keyed, KeyedList};
pub use live::{ListSource, LiveList};
pub use remote_list::{
    ConflictPolicy, Edit, FetchOutcome, FetchTicket, LoadStatus, MutationOutcome, RemoteList,
};

pub use events::{Dashboard, DashboardKind, EventFeed};
pub use group_details::GroupDetails;
pub use groups::Groups;
pub use network::{Friends, People};
pub use notifications::Notifications;
pub use profile::{Profile, ProfileTab};

use crate::http::ApiClient;
use crate::session::SessionReader;
use std::time::Duration;

/// Dependencies shared by every view.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub api: ApiClient,
    pub search_debounce: Duration,
}

impl ViewContext {
    pub fn new(api: ApiClient, search_debounce: Duration) -> Self {
        Self {
            api,
            search_debounce,
        }
    }

    pub fn session(&self) -> &SessionReader {
        self.api.session()
    }
}
