//! One group: membership actions, admin join-request queue and invites.
//!
//! Membership transitions are checked against [`MembershipState`] before any
//! request is sent. An impossible transition (leaving a group the caller is
//! not in, cancelling a request that does not exist) fails locally.

use super::remote_list::{
    ConflictPolicy, Edit, FetchOutcome, LoadStatus, MutationOutcome, RemoteList,
};
use super::ViewContext;
use crate::api;
use crate::http::ApiClient;
use futures::{Stream, StreamExt};
use std::future::Future;
use tokio::task::JoinHandle;
use vms_core::{Group, GroupId, HttpError, MembershipState, Session, User, UserId, VmsError};

/// Group details page state.
///
/// A logout clears the page; the next login refetches the group and, for
/// admins, the request queue.
#[derive(Debug)]
pub struct GroupDetails {
    api: ApiClient,
    id: GroupId,
    /// Holds the single group, so membership edits share the list helper
    group: RemoteList<Group>,
    requests: RemoteList<User>,
    invitable: RemoteList<User>,
    task: JoinHandle<()>,
}

impl GroupDetails {
    /// Fetch the group, and its join requests when the caller is an admin.
    pub async fn mount(ctx: &ViewContext, id: GroupId) -> Self {
        let sessions = ctx.session().changes();
        let api = ctx.api.clone();
        let group = RemoteList::new("group");
        let requests = RemoteList::new("join-requests");
        let invitable = RemoteList::new("invitable-followers");

        let _ = reload(&api, id, &group, &requests).await;
        let task = tokio::spawn(watch(
            api.clone(),
            id,
            group.clone(),
            requests.clone(),
            invitable.clone(),
            sessions,
        ));

        Self {
            api,
            id,
            group,
            requests,
            invitable,
            task,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn group(&self) -> Option<Group> {
        self.group.get(&self.id)
    }

    pub fn status(&self) -> LoadStatus {
        self.group.status()
    }

    pub fn members(&self) -> Vec<User> {
        self.group().map(|g| g.members).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.group().is_some_and(|g| g.is_admin)
    }

    pub fn membership(&self) -> Result<MembershipState, VmsError> {
        self.group()
            .map(|g| g.membership())
            .ok_or_else(|| VmsError::invalid("Group is not loaded"))
    }

    pub fn requests(&self) -> Vec<User> {
        self.requests.items()
    }

    pub fn requests_status(&self) -> LoadStatus {
        self.requests.status()
    }

    pub fn invitable(&self) -> Vec<User> {
        self.invitable.items()
    }

    pub fn invitable_status(&self) -> LoadStatus {
        self.invitable.status()
    }

    /// Refetch the group; admins also refetch the join-request queue.
    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        reload(&self.api, self.id, &self.group, &self.requests).await
    }

    pub async fn refresh_requests(&self) -> Result<FetchOutcome, VmsError> {
        self.requests
            .refresh(api::groups::requests(&self.api, self.id))
            .await
    }

    // ─── Membership ──────────────────────────────────────────

    pub async fn request_join(&self) -> Result<MutationOutcome, VmsError> {
        let next = self.membership()?.request_join()?;
        self.transition(
            next,
            api::groups::request_join(&self.api, self.id),
            ConflictPolicy::AlreadySatisfied,
        )
        .await
    }

    pub async fn cancel_request(&self) -> Result<MutationOutcome, VmsError> {
        let next = self.membership()?.cancel_request()?;
        self.transition(
            next,
            api::groups::cancel_request(&self.api, self.id),
            ConflictPolicy::Fail,
        )
        .await
    }

    /// Join an open group directly.
    pub async fn join(&self) -> Result<MutationOutcome, VmsError> {
        let next = self.membership()?.join()?;
        let outcome = self
            .transition(
                next,
                api::groups::join(&self.api, self.id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await?;
        let _ = self.refresh().await;
        Ok(outcome)
    }

    /// Leave the group. The server refuses admins; that refusal reverts the
    /// local edit and surfaces its message.
    pub async fn leave(&self) -> Result<MutationOutcome, VmsError> {
        let next = self.membership()?.leave()?;
        let outcome = self
            .transition(
                next,
                api::groups::leave(&self.api, self.id),
                ConflictPolicy::Fail,
            )
            .await?;
        let _ = self.refresh().await;
        Ok(outcome)
    }

    async fn transition(
        &self,
        next: MembershipState,
        request: impl Future<Output = Result<(), HttpError>>,
        policy: ConflictPolicy,
    ) -> Result<MutationOutcome, VmsError> {
        self.group
            .mutate(
                Edit::update(self.id, move |g: &mut Group| g.set_membership(next)),
                request,
                policy,
            )
            .await
    }

    // ─── Admin ───────────────────────────────────────────────

    /// Approve a pending request. The member list is refetched afterwards.
    pub async fn approve(&self, user: UserId) -> Result<MutationOutcome, VmsError> {
        let outcome = self
            .requests
            .mutate(
                Edit::remove(user),
                api::groups::approve(&self.api, self.id, user),
                ConflictPolicy::Fail,
            )
            .await?;
        let id = self.id;
        let _ = self
            .group
            .refresh(async { api::groups::get(&self.api, id).await.map(|g| vec![g]) })
            .await;
        Ok(outcome)
    }

    pub async fn deny(&self, user: UserId) -> Result<MutationOutcome, VmsError> {
        self.requests
            .mutate(
                Edit::remove(user),
                api::groups::deny(&self.api, self.id, user),
                ConflictPolicy::Fail,
            )
            .await
    }

    // ─── Invites ─────────────────────────────────────────────

    /// Load the caller's followers who can still be invited.
    pub async fn load_invitable(&self) -> Result<FetchOutcome, VmsError> {
        self.invitable
            .refresh(api::groups::invitable_followers(&self.api, self.id))
            .await
    }

    /// Invite a follower. They drop out of the invitable list at once.
    pub async fn invite(&self, receiver: UserId) -> Result<MutationOutcome, VmsError> {
        self.invitable
            .mutate(
                Edit::remove(receiver),
                api::groups::invite(&self.api, self.id, receiver),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }
}

impl Drop for GroupDetails {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fetch the group, then the request queue if the caller administers it.
/// A caller who is not an admin keeps no queue.
async fn reload(
    client: &ApiClient,
    id: GroupId,
    group: &RemoteList<Group>,
    requests: &RemoteList<User>,
) -> Result<FetchOutcome, VmsError> {
    let outcome = group
        .refresh(async { api::groups::get(client, id).await.map(|g| vec![g]) })
        .await?;
    if group.get(&id).is_some_and(|g| g.is_admin) {
        requests.refresh(api::groups::requests(client, id)).await?;
    } else {
        requests.reset();
    }
    Ok(outcome)
}

async fn watch(
    client: ApiClient,
    id: GroupId,
    group: RemoteList<Group>,
    requests: RemoteList<User>,
    invitable: RemoteList<User>,
    mut sessions: impl Stream<Item = Session> + Unpin,
) {
    while let Some(session) = sessions.next().await {
        invitable.reset();
        if session.is_authenticated() {
            let _ = reload(&client, id, &group, &requests).await;
        } else {
            group.reset();
            requests.reset();
        }
    }
}
