//! # Live List
//!
//! A mounted list page: a [`RemoteList`] plus a background task that
//! refetches whenever the debounced search term settles or the session is
//! replaced. Dropping the [`LiveList`] aborts the task and cancels the
//! debouncer; fetches already in flight still land in the list.

use super::collection::Keyed;
use super::remote_list::{FetchOutcome, RemoteList};
use crate::debounce::Debouncer;
use crate::session::SessionReader;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use vms_core::{HttpError, Session, VmsError};

/// Where a live list gets its items.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: Keyed + Clone + Send + Sync + 'static;

    /// Label for log lines.
    fn name(&self) -> &'static str;

    /// Fetch the collection. `search` is empty when no term is set.
    async fn fetch(&self, search: &str) -> Result<Vec<Self::Item>, HttpError>;
}

/// A list view that stays in sync with its dependencies.
pub struct LiveList<S: ListSource> {
    list: RemoteList<S::Item>,
    source: Arc<S>,
    search: Debouncer<String>,
    term: Arc<Mutex<String>>,
    task: JoinHandle<()>,
}

impl<S: ListSource> LiveList<S> {
    /// Perform the first fetch, then start watching the search term and the
    /// session.
    ///
    /// A failed first fetch is reported through [`RemoteList::status`].
    pub async fn mount(source: S, session: &SessionReader, debounce: Duration) -> Self {
        let sessions = session.changes();
        let authenticated = session.is_authenticated();
        let source = Arc::new(source);
        let list = RemoteList::new(source.name());
        let term = Arc::new(Mutex::new(String::new()));

        let _ = list.refresh(source.fetch("")).await;

        let (search, terms) = Debouncer::new(String::new(), debounce);
        let task = tokio::spawn(watch(
            list.clone(),
            source.clone(),
            term.clone(),
            terms,
            sessions,
            authenticated,
        ));

        Self {
            list,
            source,
            search,
            term,
            task,
        }
    }

    pub fn list(&self) -> &RemoteList<S::Item> {
        &self.list
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Feed a keystroke-level search value. A fetch follows once the value
    /// settles.
    pub fn set_search(&self, term: impl Into<String>) {
        self.search.set(term.into());
    }

    /// The last settled search term.
    pub fn search_term(&self) -> String {
        self.term.lock().clone()
    }

    /// Settle `term` immediately and fetch, skipping the quiet period. For
    /// submitted (rather than typed) searches.
    pub async fn search_now(&self, term: impl Into<String>) -> Result<FetchOutcome, VmsError> {
        let term = term.into();
        *self.term.lock() = term.clone();
        self.search.settle(term.clone());
        self.list.refresh(self.source.fetch(&term)).await
    }

    /// Refetch now with the settled term.
    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        let term = self.search_term();
        self.list.refresh(self.source.fetch(&term)).await
    }
}

impl<S: ListSource> Drop for LiveList<S> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl<S: ListSource> std::fmt::Debug for LiveList<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveList")
            .field("list", &self.list)
            .field("search", &self.search_term())
            .finish()
    }
}

async fn watch<S: ListSource>(
    list: RemoteList<S::Item>,
    source: Arc<S>,
    term: Arc<Mutex<String>>,
    mut terms: mpsc::UnboundedReceiver<String>,
    mut sessions: impl Stream<Item = Session> + Unpin,
    mut authenticated: bool,
) {
    let mut sessions_open = true;
    loop {
        tokio::select! {
            next = terms.recv() => match next {
                Some(next) => {
                    *term.lock() = next.clone();
                    // Anonymous lists stay empty until the next login
                    if authenticated {
                        spawn_refresh(&list, &source, next);
                    }
                }
                None => return,
            },
            change = sessions.next(), if sessions_open => match change {
                Some(session) if session.is_authenticated() => {
                    authenticated = true;
                    let current = term.lock().clone();
                    spawn_refresh(&list, &source, current);
                }
                Some(_) => {
                    authenticated = false;
                    list.reset();
                }
                None => sessions_open = false,
            },
        }
    }
}

/// Each fetch runs on its own task so a newer fetch can overtake an older
/// one; the generation ticket decides which response sticks.
fn spawn_refresh<S: ListSource>(list: &RemoteList<S::Item>, source: &Arc<S>, term: String) {
    let list = list.clone();
    let source = source.clone();
    tokio::spawn(async move {
        let _ = list.refresh(source.fetch(&term)).await;
    });
}
