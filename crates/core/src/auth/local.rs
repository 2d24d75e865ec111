use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::user::{Session, StoredAccount, User};
use crate::storage::manager::{StorageManager, MOCK_USERS_KEY};
use crate::storage::traits::KeyValueStore;

use super::password::{self, KdfParams};
use super::traits::AuthBackend;

/// Fake user store kept under `mock_users` in a [`KeyValueStore`].
///
/// Stands in for a real auth server: every call waits out a simulated
/// delay, accounts are matched by email (case-insensitive) and passwords
/// are checked against Argon2id hashes.
pub struct LocalAuthBackend {
    store: Arc<dyn KeyValueStore>,
    starting_balance: f64,
    delay: Duration,
    kdf: KdfParams,
}

impl LocalAuthBackend {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        starting_balance: f64,
        delay: Duration,
        kdf: KdfParams,
    ) -> Self {
        Self {
            store,
            starting_balance,
            delay,
            kdf,
        }
    }

    fn load_accounts(&self) -> Result<Vec<StoredAccount>, CoreError> {
        StorageManager::load_json_or_default(self.store.as_ref(), MOCK_USERS_KEY)
    }

    fn save_accounts(&self, accounts: &[StoredAccount]) -> Result<(), CoreError> {
        StorageManager::save_json(self.store.as_ref(), MOCK_USERS_KEY, accounts)
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn new_token() -> String {
        format!("mock_token_{}", Utc::now().timestamp_millis())
    }

    /// Whether `password` opens `account`. Records holding a plaintext
    /// password from older builds are compared directly.
    fn password_matches(account: &StoredAccount, password: &str) -> Result<bool, CoreError> {
        match (&account.password_hash, &account.password) {
            (Some(phc), _) => password::verify_password(password, phc),
            (None, Some(plain)) => Ok(plain == password),
            (None, None) => Ok(false),
        }
    }

    /// Number of stored accounts.
    pub fn account_count(&self) -> Result<usize, CoreError> {
        Ok(self.load_accounts()?.len())
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn require(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthBackend for LocalAuthBackend {
    fn name(&self) -> &str {
        "Local user store"
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, CoreError> {
        self.simulate_latency().await;
        require(email, "Email")?;
        require(password, "Password")?;

        let mut accounts = self.load_accounts()?;
        let idx = accounts
            .iter()
            .position(|a| same_email(&a.email, email))
            .ok_or(CoreError::InvalidCredentials)?;

        if !Self::password_matches(&accounts[idx], password)? {
            return Err(CoreError::InvalidCredentials);
        }

        // Replace a legacy plaintext password with a hash now that we know it.
        if accounts[idx].password_hash.is_none() {
            accounts[idx].password_hash = Some(password::hash_password(password, &self.kdf)?);
            accounts[idx].password = None;
            self.save_accounts(&accounts)?;
            debug!("upgraded stored password for user {}", accounts[idx].id);
        }

        let user = accounts[idx].to_user();
        info!("user {} signed in", user.id);
        Ok(Session {
            token: Self::new_token(),
            user,
        })
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, CoreError> {
        self.simulate_latency().await;
        require(email, "Email")?;
        require(password, "Password")?;

        let mut accounts = self.load_accounts()?;
        if accounts.iter().any(|a| same_email(&a.email, email)) {
            return Err(CoreError::DuplicateEmail);
        }

        let account = StoredAccount {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password_hash: Some(password::hash_password(password, &self.kdf)?),
            password: None,
            balance: self.starting_balance,
            created_at: Utc::now(),
        };
        let user = account.to_user();
        accounts.push(account);
        self.save_accounts(&accounts)?;

        info!("registered user {}", user.id);
        Ok(Session {
            token: Self::new_token(),
            user,
        })
    }

    async fn current_user(&self, _token: &str, cached: &User) -> Result<User, CoreError> {
        // Mock tokens carry no identity; trust the cached user id.
        let accounts = self.load_accounts()?;
        match accounts.iter().find(|a| a.id == cached.id) {
            Some(account) => Ok(account.to_user()),
            None => {
                warn!("session user {} has no stored account", cached.id);
                Ok(cached.clone())
            }
        }
    }

    async fn update_balance(&self, user: &User) -> Result<(), CoreError> {
        let mut accounts = self.load_accounts()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.id == user.id)
            .ok_or(CoreError::NotAuthenticated)?;
        account.balance = user.virtual_balance;
        self.save_accounts(&accounts)
    }
}
