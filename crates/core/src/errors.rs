use thiserror::Error;

/// Unified error type for the entire papertrade-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Order / Form Validation ─────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown stock symbol: {0}")]
    UnknownSymbol(String),

    #[error("Insufficient funds: order costs {required:.2} but only {available:.2} is available")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("Insufficient holdings: cannot sell {requested} {symbol}, only {held} held")]
    InsufficientHoldings {
        symbol: String,
        requested: u64,
        held: u64,
    },

    // ── Authentication ──────────────────────────────────────────────
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Not supported by {backend}: {operation}")]
    Unsupported { backend: String, operation: String },

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Store error: {0}")]
    Store(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; drop anything after '?'.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<argon2::password_hash::Error> for CoreError {
    fn from(e: argon2::password_hash::Error) -> Self {
        CoreError::PasswordHash(e.to_string())
    }
}
