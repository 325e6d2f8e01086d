//! The caller's profile page: account details, skills and tabbed lists.
//!
//! Skills are edited locally and saved as a whole list. The tabs load on
//! first open.

use super::remote_list::{FetchOutcome, LoadStatus, RemoteList};
use super::ViewContext;
use crate::api;
use crate::http::{ApiClient, FilePart};
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use vms_core::{Group, Session, Skills, User, VmsError};

/// Profile tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    Followers,
    Following,
    Groups,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [Self::Followers, Self::Following, Self::Groups];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
            Self::Groups => "groups",
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileTab {
    type Err = VmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| VmsError::invalid(format!("Unknown profile tab: {s}")))
    }
}

#[derive(Debug)]
struct Account {
    user: Option<User>,
    status: LoadStatus,
    /// Local edits, saved as a whole
    skills: Skills,
    skills_status: LoadStatus,
}

impl Account {
    fn empty() -> Self {
        Self {
            user: None,
            status: LoadStatus::Loading,
            skills: Skills::default(),
            skills_status: LoadStatus::Loading,
        }
    }
}

/// Everything the page shows, shared with the session watcher.
#[derive(Debug, Clone)]
struct State {
    api: ApiClient,
    account: Arc<Mutex<Account>>,
    /// Tabs opened so far; refetched after a new login
    opened: Arc<Mutex<HashSet<ProfileTab>>>,
    followers: RemoteList<User>,
    following: RemoteList<User>,
    groups: RemoteList<Group>,
}

impl State {
    async fn load_account(&self) -> Result<(), VmsError> {
        let me = api::profile::me(&self.api).await;
        let skills = api::profile::skills(&self.api).await;

        let mut account = self.account.lock();
        account.status = match &me {
            Ok(_) => LoadStatus::Ready,
            Err(e) => LoadStatus::Failed(e.user_message()),
        };
        account.skills_status = match &skills {
            Ok(_) => LoadStatus::Ready,
            Err(e) => LoadStatus::Failed(e.user_message()),
        };
        if let Ok(skills) = &skills {
            account.skills = skills.clone();
        }
        account.user = me.as_ref().ok().cloned();
        drop(account);

        me?;
        skills?;
        Ok(())
    }

    async fn load_tab(&self, tab: ProfileTab) -> Result<FetchOutcome, VmsError> {
        self.opened.lock().insert(tab);
        match tab {
            ProfileTab::Followers => {
                self.followers
                    .refresh(api::users::followers(&self.api))
                    .await
            }
            ProfileTab::Following => {
                self.following
                    .refresh(api::users::following(&self.api))
                    .await
            }
            ProfileTab::Groups => self.groups.refresh(api::profile::my_groups(&self.api)).await,
        }
    }

    fn reset(&self) {
        *self.account.lock() = Account::empty();
        self.followers.reset();
        self.following.reset();
        self.groups.reset();
    }

    /// Follow session replacements: clear on logout, reload on login.
    async fn watch(self, mut sessions: impl Stream<Item = Session> + Unpin) {
        while let Some(session) = sessions.next().await {
            if !session.is_authenticated() {
                self.reset();
                continue;
            }
            let _ = self.load_account().await;
            let opened: Vec<ProfileTab> = self.opened.lock().iter().copied().collect();
            for tab in opened {
                let _ = self.load_tab(tab).await;
            }
        }
    }
}

/// Profile page state.
///
/// The page follows the session: a logout clears it and the next login
/// reloads the account and every tab opened so far.
#[derive(Debug)]
pub struct Profile {
    state: State,
    task: JoinHandle<()>,
}

impl Profile {
    /// Fetch the account and its skills.
    pub async fn mount(ctx: &ViewContext) -> Self {
        let sessions = ctx.session().changes();
        let state = State {
            api: ctx.api.clone(),
            account: Arc::new(Mutex::new(Account::empty())),
            opened: Arc::new(Mutex::new(HashSet::new())),
            followers: RemoteList::new("followers"),
            following: RemoteList::new("following"),
            groups: RemoteList::new("my-groups"),
        };
        let _ = state.load_account().await;
        let task = tokio::spawn(state.clone().watch(sessions));
        Self { state, task }
    }

    pub fn user(&self) -> Option<User> {
        self.state.account.lock().user.clone()
    }

    pub fn status(&self) -> LoadStatus {
        self.state.account.lock().status.clone()
    }

    /// Refetch account details and skills. Unsaved skill edits are lost.
    pub async fn refresh(&self) -> Result<(), VmsError> {
        self.state.load_account().await
    }

    // ─── Skills ──────────────────────────────────────────────

    pub fn skills(&self) -> Skills {
        self.state.account.lock().skills.clone()
    }

    pub fn skills_status(&self) -> LoadStatus {
        self.state.account.lock().skills_status.clone()
    }

    /// Add a skill locally. Blank input and duplicates are ignored.
    pub fn add_skill(&self, raw: &str) -> bool {
        self.state.account.lock().skills.add(raw)
    }

    pub fn remove_skill(&self, skill: &str) -> bool {
        self.state.account.lock().skills.remove(skill)
    }

    /// Post the whole skill list.
    pub async fn save_skills(&self) -> Result<(), VmsError> {
        let skills = self.skills();
        api::profile::save_skills(&self.state.api, &skills).await?;
        tracing::info!(count = skills.len(), "Skills saved");
        Ok(())
    }

    /// Upload a new profile picture and refetch the account.
    pub async fn upload_picture(&self, image: FilePart) -> Result<(), VmsError> {
        api::profile::upload_picture(&self.state.api, image).await?;
        let me = api::profile::me(&self.state.api).await?;
        self.state.account.lock().user = Some(me);
        Ok(())
    }

    // ─── Tabs ────────────────────────────────────────────────

    /// Fetch a tab's list.
    pub async fn open_tab(&self, tab: ProfileTab) -> Result<FetchOutcome, VmsError> {
        self.state.load_tab(tab).await
    }

    pub fn followers(&self) -> Vec<User> {
        self.state.followers.items()
    }

    pub fn following(&self) -> Vec<User> {
        self.state.following.items()
    }

    pub fn groups(&self) -> Vec<Group> {
        self.state.groups.items()
    }

    pub fn tab_status(&self, tab: ProfileTab) -> LoadStatus {
        match tab {
            ProfileTab::Followers => self.state.followers.status(),
            ProfileTab::Following => self.state.following.status(),
            ProfileTab::Groups => self.state.groups.status(),
        }
    }
}

impl Drop for Profile {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse() {
        assert_eq!("groups".parse::<ProfileTab>().unwrap(), ProfileTab::Groups);
        assert!("skills".parse::<ProfileTab>().is_err());
        for tab in ProfileTab::ALL {
            assert_eq!(tab.to_string().parse::<ProfileTab>().unwrap(), tab);
        }
    }
}
