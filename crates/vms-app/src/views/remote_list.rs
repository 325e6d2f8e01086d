//! # Remote List
//!
//! Client-side copy of one server collection, with the fetch and mutation
//! bookkeeping every list page shares:
//!
//! - **Fetch**: each fetch takes a generation ticket. Only the newest ticket
//!   may replace the items; older responses are discarded on arrival.
//! - **Optimistic mutation**: [`RemoteList::mutate`] applies a local edit,
//!   records its inverse, sends the request and reverts exactly that edit if
//!   the request fails. A `409` on an idempotent action keeps the edit.
//! - **Supersession**: a fetch that replaces the items while a mutation is in
//!   flight wins over that mutation's revert. A mutation the server confirms
//!   is replayed onto the refreshed items, since the refresh may predate it.
//!
//! The state lock is never held across an await.

use super::collection::{Keyed, KeyedList};
use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use vms_core::{HttpError, VmsError};

/// Load state of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Terminal for this fetch; shown instead of the list. No auto-retry.
    Failed(String),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic fetch ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What happened to a fetch response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued; the response was dropped.
    Stale,
}

/// How a mutation treats `409 Conflict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// The action is idempotent; a conflict means it already happened.
    AlreadySatisfied,
    /// A conflict is an ordinary failure.
    Fail,
}

/// Result of a mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Confirmed,
    /// The server reported a conflict on an idempotent action.
    AlreadySatisfied,
}

/// A local edit to apply before the request is sent.
pub enum Edit<T: Keyed> {
    /// Change an item in place.
    Update {
        key: T::Key,
        apply: Arc<dyn Fn(&mut T) + Send + Sync>,
    },
    /// Remove an item.
    Remove(T::Key),
    /// Insert an item at a position, or append.
    Insert { item: T, index: Option<usize> },
}

impl<T: Keyed> Edit<T> {
    pub fn update(key: T::Key, apply: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
        Self::Update {
            key,
            apply: Arc::new(apply),
        }
    }

    pub fn remove(key: T::Key) -> Self {
        Self::Remove(key)
    }

    pub fn append(item: T) -> Self {
        Self::Insert { item, index: None }
    }
}

impl<T: Keyed + Clone> Clone for Edit<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Update { key, apply } => Self::Update {
                key: key.clone(),
                apply: apply.clone(),
            },
            Self::Remove(key) => Self::Remove(key.clone()),
            Self::Insert { item, index } => Self::Insert {
                item: item.clone(),
                index: *index,
            },
        }
    }
}

impl<T: Keyed> fmt::Debug for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update { key, .. } => f.debug_struct("Update").field("key", key).finish(),
            Self::Remove(key) => f.debug_tuple("Remove").field(key).finish(),
            Self::Insert { item, index } => f
                .debug_struct("Insert")
                .field("key", &item.key())
                .field("index", index)
                .finish(),
        }
    }
}

/// Undo record for one applied edit.
enum Inverse<T: Keyed> {
    Restore(T),
    Reinsert { index: usize, item: T },
    Remove(T::Key),
}

struct ListState<T: Keyed> {
    items: KeyedList<T>,
    status: LoadStatus,
    /// Newest ticket issued
    issued: u64,
    /// Bumped every time a fetch replaces the items
    epoch: u64,
}

/// Shared, cloneable handle to one remote collection.
pub struct RemoteList<T: Keyed> {
    name: &'static str,
    state: Arc<Mutex<ListState<T>>>,
}

impl<T: Keyed> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: self.state.clone(),
        }
    }
}

impl<T: Keyed> fmt::Debug for RemoteList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("RemoteList")
            .field("name", &self.name)
            .field("len", &state.items.len())
            .field("status", &state.status)
            .finish()
    }
}

impl<T> RemoteList<T>
where
    T: Keyed + Clone + Send + 'static,
{
    /// Empty list in `Loading`. `name` labels log lines.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(ListState {
                items: KeyedList::new(),
                status: LoadStatus::Loading,
                issued: 0,
                epoch: 0,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    // ─── Reads ───────────────────────────────────────────────

    pub fn status(&self) -> LoadStatus {
        self.state.lock().status.clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.lock().items.to_vec()
    }

    pub fn get(&self, key: &T::Key) -> Option<T> {
        self.state.lock().items.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    // ─── Fetch ───────────────────────────────────────────────

    /// Issue a ticket and enter `Loading`.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.state.lock();
        state.issued += 1;
        state.status = LoadStatus::Loading;
        FetchTicket(state.issued)
    }

    /// Apply a fetch result if `ticket` is still the newest.
    pub fn complete_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<T>, HttpError>,
    ) -> Result<FetchOutcome, VmsError> {
        let mut state = self.state.lock();
        if ticket.0 != state.issued {
            tracing::warn!(
                list = self.name,
                ticket = ticket.0,
                newest = state.issued,
                "Discarding stale response"
            );
            return Ok(FetchOutcome::Stale);
        }
        match result {
            Ok(items) => {
                state.items = KeyedList::from_items(items);
                state.status = LoadStatus::Ready;
                state.epoch += 1;
                tracing::debug!(list = self.name, len = state.items.len(), "List loaded");
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(list = self.name, error = %e, "List fetch failed");
                state.status = LoadStatus::Failed(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Run one fetch with a fresh ticket.
    pub async fn refresh<Fut>(&self, fetch: Fut) -> Result<FetchOutcome, VmsError>
    where
        Fut: Future<Output = Result<Vec<T>, HttpError>>,
    {
        let ticket = self.begin_fetch();
        let result = fetch.await;
        self.complete_fetch(ticket, result)
    }

    /// Drop all items and wait for the next fetch.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.issued += 1;
        state.epoch += 1;
        state.items.clear();
        state.status = LoadStatus::Loading;
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Apply `edit` now, send `request`, and revert the edit if the request
    /// fails.
    ///
    /// An edit that targets a key not in the list is rejected before the
    /// request is sent. If a fetch replaced the items while the request was
    /// in flight, a confirmed edit is applied again to the fetched items and
    /// a failed one is not reverted.
    pub async fn mutate<Fut>(
        &self,
        edit: Edit<T>,
        request: Fut,
        policy: ConflictPolicy,
    ) -> Result<MutationOutcome, VmsError>
    where
        Fut: Future<Output = Result<(), HttpError>>,
    {
        let replay = edit.clone();
        let (inverse, epoch) = {
            let mut state = self.state.lock();
            let inverse = apply(&mut state.items, edit)?;
            (inverse, state.epoch)
        };

        let result = request.await;
        let mut state = self.state.lock();
        let refreshed = state.epoch != epoch;

        let outcome = match result {
            Ok(()) => Ok(MutationOutcome::Confirmed),
            Err(e)
                if e.category().is_success_equivalent()
                    && policy == ConflictPolicy::AlreadySatisfied =>
            {
                tracing::debug!(list = self.name, "Conflict on idempotent action, keeping edit");
                Ok(MutationOutcome::AlreadySatisfied)
            }
            Err(e) => Err(e),
        };
        let error = match outcome {
            Ok(outcome) => {
                if refreshed {
                    tracing::debug!(list = self.name, "Replaying confirmed edit onto refreshed items");
                    reapply(&mut state.items, replay);
                }
                return Ok(outcome);
            }
            Err(e) => e,
        };

        if refreshed {
            tracing::warn!(
                list = self.name,
                error = %error,
                "Mutation failed after a refresh; keeping refreshed items"
            );
        } else {
            tracing::warn!(list = self.name, error = %error, "Mutation failed, reverting");
            revert(&mut state.items, inverse);
        }
        Err(error.into())
    }
}

fn apply<T: Keyed>(items: &mut KeyedList<T>, edit: Edit<T>) -> Result<Inverse<T>, VmsError>
where
    T: Clone,
{
    match edit {
        Edit::Update { key, apply } => {
            let previous = items
                .get(&key)
                .cloned()
                .ok_or_else(|| VmsError::invalid(format!("No item {key:?} in the list")))?;
            items.update(&key, |item| apply(item));
            Ok(Inverse::Restore(previous))
        }
        Edit::Remove(key) => {
            let (index, item) = items
                .remove(&key)
                .ok_or_else(|| VmsError::invalid(format!("No item {key:?} in the list")))?;
            Ok(Inverse::Reinsert { index, item })
        }
        Edit::Insert { item, index } => {
            let key = item.key();
            if items.contains(&key) {
                return Err(VmsError::invalid(format!("Item {key:?} is already listed")));
            }
            match index {
                Some(index) => {
                    items.insert_at(index, item);
                }
                None => {
                    items.upsert(item);
                }
            }
            Ok(Inverse::Remove(key))
        }
    }
}

/// Apply an edit to items that may already reflect it.
fn reapply<T: Keyed>(items: &mut KeyedList<T>, edit: Edit<T>) {
    match edit {
        Edit::Update { key, apply } => {
            items.update(&key, |item| apply(item));
        }
        Edit::Remove(key) => {
            items.remove(&key);
        }
        Edit::Insert { item, index } => {
            if items.contains(&item.key()) {
                return;
            }
            match index {
                Some(index) => {
                    items.insert_at(index, item);
                }
                None => {
                    items.upsert(item);
                }
            }
        }
    }
}

fn revert<T: Keyed>(items: &mut KeyedList<T>, inverse: Inverse<T>) {
    match inverse {
        Inverse::Restore(previous) => {
            let key = previous.key();
            items.update(&key, |item| *item = previous);
        }
        Inverse::Reinsert { index, item } => {
            if !items.contains(&item.key()) {
                items.insert_at(index, item);
            }
        }
        Inverse::Remove(key) => {
            items.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        flag: bool,
    }

    impl Keyed for Row {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        (1..=3).map(|id| Row { id, flag: false }).collect()
    }

    async fn loaded() -> RemoteList<Row> {
        let list = RemoteList::new("rows");
        list.refresh(async { Ok(rows()) }).await.unwrap();
        list
    }

    #[tokio::test]
    async fn test_refresh_sets_ready() {
        let list = loaded().await;
        assert_eq!(list.status(), LoadStatus::Ready);
        assert_eq!(list.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_terminal_status() {
        let list: RemoteList<Row> = RemoteList::new("rows");
        let err = list
            .refresh(async { Err(HttpError::network("refused")) })
            .await
            .unwrap_err();
        assert!(matches!(err, VmsError::Http(_)));
        assert_eq!(
            list.status().error(),
            Some(vms_core::errors::UNREACHABLE_MESSAGE)
        );
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let list: RemoteList<Row> = RemoteList::new("rows");
        let old = list.begin_fetch();
        let new = list.begin_fetch();

        assert_eq!(
            list.complete_fetch(new, Ok(vec![Row { id: 9, flag: true }])).unwrap(),
            FetchOutcome::Applied
        );
        assert_eq!(
            list.complete_fetch(old, Ok(rows())).unwrap(),
            FetchOutcome::Stale
        );
        assert_eq!(list.items(), vec![Row { id: 9, flag: true }]);
    }

    #[test]
    fn test_stale_failure_does_not_mark_failed() {
        let list: RemoteList<Row> = RemoteList::new("rows");
        let old = list.begin_fetch();
        let new = list.begin_fetch();
        list.complete_fetch(new, Ok(rows())).unwrap();
        let outcome = list
            .complete_fetch(old, Err(HttpError::server(500, "boom")))
            .unwrap();
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(list.status().is_ready());
    }

    #[tokio::test]
    async fn test_failed_update_restores_only_that_item() {
        let list = loaded().await;
        list.mutate(
            Edit::update(1, |r: &mut Row| r.flag = true),
            async { Ok(()) },
            ConflictPolicy::Fail,
        )
        .await
        .unwrap();

        let err = list
            .mutate(
                Edit::update(2, |r: &mut Row| r.flag = true),
                async { Err(HttpError::server(500, "boom")) },
                ConflictPolicy::Fail,
            )
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "boom");
        assert_eq!(list.get(&1), Some(Row { id: 1, flag: true }));
        assert_eq!(list.get(&2), Some(Row { id: 2, flag: false }));
    }

    #[tokio::test]
    async fn test_conflict_on_idempotent_action_keeps_edit() {
        let list = loaded().await;
        let outcome = list
            .mutate(
                Edit::update(3, |r: &mut Row| r.flag = true),
                async { Err(HttpError::server(409, "already")) },
                ConflictPolicy::AlreadySatisfied,
            )
            .await
            .unwrap();
        assert_eq!(outcome, MutationOutcome::AlreadySatisfied);
        assert_eq!(list.get(&3), Some(Row { id: 3, flag: true }));
    }

    #[tokio::test]
    async fn test_failed_remove_reinserts_at_position() {
        let list = loaded().await;
        list.mutate(
            Edit::remove(2),
            async { Err(HttpError::network("refused")) },
            ConflictPolicy::Fail,
        )
        .await
        .unwrap_err();
        let ids: Vec<u32> = list.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failed_insert_is_removed() {
        let list = loaded().await;
        list.mutate(
            Edit::append(Row { id: 4, flag: true }),
            async { Err(HttpError::server(400, "bad")) },
            ConflictPolicy::Fail,
        )
        .await
        .unwrap_err();
        assert_eq!(list.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_key_rejected_before_request() {
        let list = loaded().await;
        let mut sent = false;
        let err = list
            .mutate(
                Edit::remove(42),
                async {
                    sent = true;
                    Ok(())
                },
                ConflictPolicy::Fail,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VmsError::Invalid { .. }));
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_refresh_during_mutation_supersedes_revert() {
        let list = loaded().await;
        let refresher = list.clone();
        list.mutate(
            Edit::update(1, |r: &mut Row| r.flag = true),
            async move {
                refresher
                    .refresh(async { Ok(vec![Row { id: 1, flag: true }]) })
                    .await
                    .unwrap();
                Err(HttpError::server(500, "boom"))
            },
            ConflictPolicy::Fail,
        )
        .await
        .unwrap_err();
        assert_eq!(list.items(), vec![Row { id: 1, flag: true }]);
    }

    #[tokio::test]
    async fn test_confirmed_edit_survives_refresh_in_flight() {
        let list = loaded().await;
        let refresher = list.clone();
        let outcome = list
            .mutate(
                Edit::update(2, |r: &mut Row| r.flag = true),
                async move {
                    refresher.refresh(async { Ok(rows()) }).await.unwrap();
                    Ok(())
                },
                ConflictPolicy::Fail,
            )
            .await
            .unwrap();
        assert_eq!(outcome, MutationOutcome::Confirmed);
        assert_eq!(list.get(&2), Some(Row { id: 2, flag: true }));
        assert_eq!(list.get(&1), Some(Row { id: 1, flag: false }));
    }

    #[tokio::test]
    async fn test_removal_replayed_when_refresh_still_lists_item() {
        let list = loaded().await;
        let refresher = list.clone();
        list.mutate(
            Edit::remove(3),
            async move {
                refresher.refresh(async { Ok(rows()) }).await.unwrap();
                Err(HttpError::server(409, "gone"))
            },
            ConflictPolicy::AlreadySatisfied,
        )
        .await
        .unwrap();
        let ids: Vec<u32> = list.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
