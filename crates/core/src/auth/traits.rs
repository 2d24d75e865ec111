use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::user::{Session, User};

/// Authenticates users and resolves the current user from a token.
///
/// Implemented by the local fake user store and by the remote HTTP API.
/// Backends only authenticate; keeping the session around is the job of
/// [`SessionManager`](super::session::SessionManager).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthBackend: Send + Sync {
    /// Human-readable name of this backend (for logs).
    fn name(&self) -> &str;

    /// Exchange credentials for a session.
    async fn login(&self, email: &str, password: &str) -> Result<Session, CoreError>;

    /// Create an account and sign it in.
    async fn register(&self, email: &str, password: &str, name: &str)
        -> Result<Session, CoreError>;

    /// Resolve the user behind `token` ("who am I"). `cached` is the user
    /// restored from storage, for backends that cannot look tokens up.
    /// Fails with `NotAuthenticated` when the token is no longer accepted.
    async fn current_user(&self, token: &str, cached: &User) -> Result<User, CoreError>;

    /// Persist a changed virtual balance. The default accepts it as-is,
    /// for backends whose session store is the only record.
    async fn update_balance(&self, _user: &User) -> Result<(), CoreError> {
        Ok(())
    }
}
