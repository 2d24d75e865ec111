use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::auth::password::KdfParams;
use crate::errors::CoreError;

/// Application settings. Every field has a default, so a settings file only
/// needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Virtual cash credited to a newly registered account.
    pub starting_balance: f64,

    /// Amount added by a single "top up" on the profile page.
    pub top_up_amount: f64,

    /// Artificial latency applied to local sign-in and order submission,
    /// in milliseconds. Set to 0 in tests.
    pub simulated_delay_ms: u64,

    /// Base URL of the remote auth API (e.g., "https://api.example.com").
    /// When unset the local fake user store is used.
    pub api_base_url: Option<String>,

    /// Display currency for formatted amounts.
    pub currency: String,

    /// Argon2id cost parameters for stored passwords.
    pub kdf: KdfParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_balance: 100_000.0,
            top_up_amount: 10_000.0,
            simulated_delay_ms: 1_000,
            api_base_url: None,
            currency: "USD".to_string(),
            kdf: KdfParams::default(),
        }
    }
}

impl Settings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the rest of the library cannot work with.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "starting_balance must be a non-negative amount, got {}",
                self.starting_balance
            )));
        }
        if !self.top_up_amount.is_finite() || self.top_up_amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "top_up_amount must be positive, got {}",
                self.top_up_amount
            )));
        }
        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{}': must be exactly 3 ASCII letters (e.g., USD)",
                self.currency
            )));
        }
        if let Some(url) = &self.api_base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CoreError::ValidationError(format!(
                    "api_base_url must start with http:// or https://, got '{url}'"
                )));
            }
        }
        Ok(())
    }
}
