use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::user::{Session, User};
use crate::storage::manager::{StorageManager, AUTH_TOKEN_KEY, AUTH_USER_KEY};
use crate::storage::traits::KeyValueStore;

use super::traits::AuthBackend;

/// Holds the signed-in user and token for the lifetime of the app.
///
/// Lifecycle: [`new`](Self::new) → [`init`](Self::init) (rehydrate from the
/// store) → login/register → [`logout`](Self::logout). The session is
/// mirrored to the store under `auth_token` and `auth_user` so a restart
/// picks it up again.
pub struct SessionManager {
    backend: Box<dyn AuthBackend>,
    store: Arc<dyn KeyValueStore>,
    session: Option<Session>,
    loading: bool,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("backend", &self.backend.name())
            .field("user", &self.session.as_ref().map(|s| &s.user.id))
            .field("loading", &self.loading)
            .finish()
    }
}

impl SessionManager {
    pub fn new(backend: Box<dyn AuthBackend>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            store,
            session: None,
            loading: true,
        }
    }

    /// Restore a stored session, if any, and re-resolve its user through
    /// the backend.
    ///
    /// A token the backend rejects clears the session. Any other lookup
    /// failure (e.g. the API being unreachable) keeps the stored user.
    /// Unreadable stored data is discarded.
    pub async fn init(&mut self) -> Result<Option<&User>, CoreError> {
        self.loading = true;
        let token = self.store.get(AUTH_TOKEN_KEY)?;
        let user = match StorageManager::load_json::<User>(self.store.as_ref(), AUTH_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!("discarding unreadable stored session: {e}");
                self.clear_store();
                None
            }
        };

        self.session = match (token, user) {
            (Some(token), Some(cached)) => {
                match self.backend.current_user(&token, &cached).await {
                    Ok(user) => {
                        StorageManager::save_json(self.store.as_ref(), AUTH_USER_KEY, &user)?;
                        debug!("restored session for user {}", user.id);
                        Some(Session { token, user })
                    }
                    Err(CoreError::NotAuthenticated) => {
                        info!("stored token rejected by {}", self.backend.name());
                        self.clear_store();
                        None
                    }
                    Err(e) => {
                        warn!("could not refresh user {}: {e}", cached.id);
                        Some(Session {
                            token,
                            user: cached,
                        })
                    }
                }
            }
            (None, None) => None,
            _ => {
                warn!("discarding half-stored session");
                self.clear_store();
                None
            }
        };

        self.loading = false;
        Ok(self.user())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, CoreError> {
        let session = self.backend.login(email, password).await?;
        self.establish(session)
    }

    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, CoreError> {
        let session = self.backend.register(email, password, name).await?;
        self.establish(session)
    }

    /// Forget the session. Always succeeds and is idempotent; stored
    /// account records are left alone.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("user {} signed out", session.user.id);
        }
        self.clear_store();
    }

    /// Add `amount` to the virtual balance and persist it.
    ///
    /// Nothing changes when the backend refuses the new balance.
    pub async fn top_up(&mut self, amount: f64) -> Result<&User, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Top-up amount must be positive, got {amount}"
            )));
        }
        let mut user = self
            .session
            .as_ref()
            .map(|s| s.user.clone())
            .ok_or(CoreError::NotAuthenticated)?;
        user.virtual_balance += amount;

        self.backend.update_balance(&user).await?;
        StorageManager::save_json(self.store.as_ref(), AUTH_USER_KEY, &user)?;
        info!("user {} topped up by {:.2}", user.id, amount);

        let session = self.session.as_mut().ok_or(CoreError::NotAuthenticated)?;
        session.user = user;
        Ok(&session.user)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// `true` until [`init`](Self::init) has finished.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    fn establish(&mut self, session: Session) -> Result<&User, CoreError> {
        self.store.set(AUTH_TOKEN_KEY, &session.token)?;
        StorageManager::save_json(self.store.as_ref(), AUTH_USER_KEY, &session.user)?;
        let session = self.session.insert(session);
        Ok(&session.user)
    }

    fn clear_store(&self) {
        for key in [AUTH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("failed to remove '{key}' from store: {e}");
            }
        }
    }
}
