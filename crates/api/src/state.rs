//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{DesignStore, OrderStore, ProductStore, UserStore};
use crate::realtime::BroadcastNotifier;
use crate::services::TokenService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// document stores, the token service, and the notification channel.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    users: UserStore,
    products: ProductStore,
    orders: OrderStore,
    designs: DesignStore,
    tokens: TokenService,
    notifier: BroadcastNotifier,
}

impl AppState {
    /// Create application state from configuration, with empty stores.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_secs);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: UserStore::new(),
                products: ProductStore::new(),
                orders: OrderStore::new(),
                designs: DesignStore::new(),
                tokens,
                notifier: BroadcastNotifier::new(),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the user store.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// Get a reference to the product catalog store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the saved-design store.
    #[must_use]
    pub fn designs(&self) -> &DesignStore {
        &self.inner.designs
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    /// Get a reference to the notification channel.
    #[must_use]
    pub fn notifier(&self) -> &BroadcastNotifier {
        &self.inner.notifier
    }
}
