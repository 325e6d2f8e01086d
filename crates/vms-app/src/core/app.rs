//! Application facade.

use super::page::{Opened, Page};
use crate::config::AppConfig;
use crate::http::{ApiClient, HttpTransport};
use crate::routing::{Navigation, Route, Router};
use crate::session::{MemoryStorage, SessionReader, SessionStorage, SessionStore};
use crate::views::{
    Dashboard, EventFeed, GroupDetails, Groups, Notifications, People, Profile, ViewContext,
};
use std::sync::Arc;
use vms_core::VmsError;

/// Headless application: the part of the client every front end shares.
///
/// `AppCore` is the only owner of the [`SessionStore`]. Views and the API
/// client see the session through [`SessionReader`]s; the auth workflows
/// reach the store through a crate-private accessor.
pub struct AppCore {
    config: AppConfig,
    session: SessionStore,
    api: ApiClient,
    router: Router,
}

impl AppCore {
    /// Build from validated configuration, a transport and session storage.
    /// The persisted session is loaded synchronously.
    pub fn new(
        config: AppConfig,
        transport: Arc<dyn HttpTransport>,
        storage: impl SessionStorage + 'static,
    ) -> Result<Self, VmsError> {
        config.validate()?;
        let session = SessionStore::load(storage)?;
        let reader = session.reader();
        Ok(Self {
            api: ApiClient::new(transport, reader.clone()),
            router: Router::new(reader),
            session,
            config,
        })
    }

    /// Production wiring over `reqwest`.
    #[cfg(feature = "reqwest-transport")]
    pub fn with_reqwest(
        config: AppConfig,
        storage: impl SessionStorage + 'static,
    ) -> Result<Self, VmsError> {
        let transport = crate::http::ReqwestTransport::from_config(&config)?;
        Self::new(config, Arc::new(transport), storage)
    }

    /// Test configuration with an in-memory session.
    pub fn testing(transport: Arc<dyn HttpTransport>) -> Result<Self, VmsError> {
        Self::new(AppConfig::testing(), transport, MemoryStorage::new())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> SessionReader {
        self.session.reader()
    }

    pub(crate) fn session_store(&self) -> &SessionStore {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.api.clone(), self.config.search_debounce())
    }

    /// Evaluate guards for `path` without mounting anything.
    pub fn navigate(&self, path: &str) -> Result<Navigation, VmsError> {
        self.router.navigate(path)
    }

    /// Evaluate guards and mount the page that renders.
    ///
    /// Only the final route's view is mounted, so a redirected navigation
    /// never fetches the data of the page it was redirected away from.
    pub async fn open(&self, path: &str) -> Result<Opened, VmsError> {
        let navigation = self.navigate(path)?;
        let ctx = self.view_context();
        let page = match &navigation.route {
            Route::Landing => Page::Landing,
            Route::Login => Page::Login,
            Route::Register => Page::Register,
            Route::Dashboard => Page::Dashboard(Dashboard::mount(&ctx).await),
            Route::EventFeed => Page::EventFeed(EventFeed::mount(&ctx).await),
            Route::CreateEvent => Page::CreateEvent,
            Route::Network => Page::Network(People::mount(&ctx).await),
            Route::Groups => Page::Groups(Groups::mount(&ctx).await),
            Route::GroupDetails(id) => Page::GroupDetails(GroupDetails::mount(&ctx, *id).await),
            Route::Notifications => Page::Notifications(Notifications::mount(&ctx).await),
            Route::Profile => Page::Profile(Profile::mount(&ctx).await),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        };
        Ok(Opened { navigation, page })
    }
}

impl std::fmt::Debug for AppCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCore")
            .field("base_url", &self.config.base_url())
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::InMemoryTransport;

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::testing();
        config.api.base_url = String::new();
        let err = AppCore::new(config, Arc::new(InMemoryTransport::new()), MemoryStorage::new())
            .unwrap_err();
        assert!(matches!(err, VmsError::Config { .. }));
    }

    #[tokio::test]
    async fn test_open_static_pages_does_not_fetch() {
        let transport = Arc::new(InMemoryTransport::new());
        let app = AppCore::testing(transport.clone()).unwrap();

        let opened = app.open("/").await.unwrap();
        assert!(matches!(opened.page, Page::Landing));
        let opened = app.open("/missing").await.unwrap();
        assert!(matches!(opened.page, Page::NotFound(ref p) if p == "/missing"));
        assert_eq!(transport.request_count(), 0);
    }
}
