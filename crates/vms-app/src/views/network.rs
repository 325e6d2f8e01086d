//! People directory with follow toggles, and the legacy friends list.

use super::live::{ListSource, LiveList};
use super::remote_list::{ConflictPolicy, Edit, FetchOutcome, LoadStatus, MutationOutcome};
use super::ViewContext;
use crate::api;
use crate::http::ApiClient;
use async_trait::async_trait;
use vms_core::{HttpError, User, UserId, VmsError};

/// Source for `/users`.
#[derive(Debug, Clone)]
pub struct PeopleSource {
    api: ApiClient,
}

#[async_trait]
impl ListSource for PeopleSource {
    type Item = User;

    fn name(&self) -> &'static str {
        "people"
    }

    async fn fetch(&self, search: &str) -> Result<Vec<User>, HttpError> {
        api::users::search(&self.api, search).await
    }
}

/// Searchable people list. Follow is directed and toggled per user.
#[derive(Debug)]
pub struct People {
    live: LiveList<PeopleSource>,
}

impl People {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = PeopleSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.live.list().items()
    }

    pub fn user(&self, id: UserId) -> Option<User> {
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

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    pub async fn follow(&self, id: UserId) -> Result<MutationOutcome, VmsError> {
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::update(id, |u: &mut User| u.is_followed = true),
                api::users::follow(client, id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }

    pub async fn unfollow(&self, id: UserId) -> Result<MutationOutcome, VmsError> {
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::update(id, |u: &mut User| u.is_followed = false),
                api::users::unfollow(client, id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }
}

/// Source for the legacy `/friends` relation.
#[derive(Debug, Clone)]
pub struct FriendsSource {
    api: ApiClient,
}

#[async_trait]
impl ListSource for FriendsSource {
    type Item = User;

    fn name(&self) -> &'static str {
        "friends"
    }

    async fn fetch(&self, _search: &str) -> Result<Vec<User>, HttpError> {
        api::friends::list(&self.api).await
    }
}

/// Legacy symmetric friends list. Independent of follows.
#[derive(Debug)]
pub struct Friends {
    live: LiveList<FriendsSource>,
}

impl Friends {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = FriendsSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn friends(&self) -> Vec<User> {
        self.live.list().items()
    }

    pub fn is_friend(&self, id: UserId) -> bool {
        self.live.list().get(&id).is_some()
    }

    pub fn status(&self) -> LoadStatus {
        self.live.list().status()
    }

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    /// Add `user` as a friend. Already being friends is not an error.
    pub async fn add(&self, user: User) -> Result<MutationOutcome, VmsError> {
        if self.is_friend(user.id) {
            return Ok(MutationOutcome::AlreadySatisfied);
        }
        let id = user.id;
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::append(user),
                api::friends::add(client, id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }
}
