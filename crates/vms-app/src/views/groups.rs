//! Group directory.

use super::live::{ListSource, LiveList};
use super::remote_list::{FetchOutcome, LoadStatus};
use super::ViewContext;
use crate::api;
use crate::http::ApiClient;
use crate::workflows::create_group::{self, GroupDraft};
use async_trait::async_trait;
use vms_core::{Group, GroupId, HttpError, VmsError};

/// Source for `/groups`.
#[derive(Debug, Clone)]
pub struct GroupsSource {
    api: ApiClient,
}

#[async_trait]
impl ListSource for GroupsSource {
    type Item = Group;

    fn name(&self) -> &'static str {
        "groups"
    }

    async fn fetch(&self, search: &str) -> Result<Vec<Group>, HttpError> {
        api::groups::list(&self.api, search).await
    }
}

/// Searchable group list.
#[derive(Debug)]
pub struct Groups {
    live: LiveList<GroupsSource>,
}

impl Groups {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = GroupsSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn groups(&self) -> Vec<Group> {
        self.live.list().items()
    }

    pub fn group(&self, id: GroupId) -> Option<Group> {
        self.live.list().get(&id)
    }

    pub fn status(&self) -> LoadStatus {
        self.live.list().status()
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.live.set_search(term);
    }

    /// Search without waiting for the quiet period.
    pub async fn search(&self, term: &str) -> Result<FetchOutcome, VmsError> {
        self.live.search_now(term).await
    }

    pub fn search_term(&self) -> String {
        self.live.search_term()
    }

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    /// Create a group, then refetch so it shows up with its server id.
    pub async fn create(&self, draft: GroupDraft) -> Result<(), VmsError> {
        create_group::create_group(&self.live.source().api, draft).await?;
        self.refresh().await?;
        Ok(())
    }
}
