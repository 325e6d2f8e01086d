//! Pending group invitations.

use super::live::{ListSource, LiveList};
use super::remote_list::{ConflictPolicy, Edit, FetchOutcome, LoadStatus, MutationOutcome};
use super::ViewContext;
use crate::api;
use crate::http::ApiClient;
use async_trait::async_trait;
use vms_core::{HttpError, Notification, NotificationId, VmsError};

/// Source for `/notifications`.
#[derive(Debug, Clone)]
pub struct NotificationSource {
    api: ApiClient,
}

#[async_trait]
impl ListSource for NotificationSource {
    type Item = Notification;

    fn name(&self) -> &'static str {
        "notifications"
    }

    async fn fetch(&self, _search: &str) -> Result<Vec<Notification>, HttpError> {
        api::notifications::list(&self.api).await
    }
}

/// Invite inbox. Answering an invite removes it from the list.
#[derive(Debug)]
pub struct Notifications {
    live: LiveList<NotificationSource>,
}

impl Notifications {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = NotificationSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.live.list().items()
    }

    pub fn status(&self) -> LoadStatus {
        self.live.list().status()
    }

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    /// Accept an invite and join its group. A 409 means the caller is
    /// already a member.
    pub async fn accept(&self, id: NotificationId) -> Result<MutationOutcome, VmsError> {
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::remove(id),
                api::notifications::accept(client, id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }

    pub async fn decline(&self, id: NotificationId) -> Result<MutationOutcome, VmsError> {
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::remove(id),
                api::notifications::decline(client, id),
                ConflictPolicy::Fail,
            )
            .await
    }
}
