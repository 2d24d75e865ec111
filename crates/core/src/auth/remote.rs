use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::user::{Session, User};

use super::traits::AuthBackend;

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const ME_PATH: &str = "/api/auth/me";

/// Auth backed by an external HTTP API.
///
/// - `POST /api/auth/login {email, password}` → `{token, user}`
/// - `POST /api/auth/register {email, password, name}` → `{token, user}`
/// - `GET /api/auth/me` with `Authorization: Bearer <token>` → `{user}`
///
/// The API has no balance endpoint, so `update_balance` fails with
/// `Unsupported` and a top-up leaves the session untouched.
pub struct RemoteAuthBackend {
    client: Client,
    base_url: String,
}

impl RemoteAuthBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

#[derive(Deserialize)]
struct MeResponse {
    user: User,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a non-2xx response into `CoreError::Api`, using the body's
/// `message` (or `error`) field when the server sent one.
async fn api_error(resp: Response) -> CoreError {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
    CoreError::Api {
        status: status.as_u16(),
        message,
    }
}

async fn parse_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, CoreError> {
    resp.json::<T>()
        .await
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse {what} response: {e}")))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthBackend for RemoteAuthBackend {
    fn name(&self) -> &str {
        "Remote auth API"
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, CoreError> {
        let resp = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => {
                let body: AuthResponse = parse_json(resp, "login").await?;
                info!("user {} signed in via {}", body.user.id, self.base_url);
                Ok(Session {
                    token: body.token,
                    user: body.user,
                })
            }
            StatusCode::UNAUTHORIZED => Err(CoreError::InvalidCredentials),
            _ => Err(api_error(resp).await),
        }
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, CoreError> {
        let resp = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(&RegisterRequest {
                email,
                password,
                name,
            })
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => {
                let body: AuthResponse = parse_json(resp, "register").await?;
                info!("registered user {} via {}", body.user.id, self.base_url);
                Ok(Session {
                    token: body.token,
                    user: body.user,
                })
            }
            StatusCode::CONFLICT => Err(CoreError::DuplicateEmail),
            _ => Err(api_error(resp).await),
        }
    }

    async fn current_user(&self, token: &str, _cached: &User) -> Result<User, CoreError> {
        let resp = self
            .client
            .get(self.url(ME_PATH))
            .bearer_auth(token)
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => {
                let body: MeResponse = parse_json(resp, "me").await?;
                debug!("token resolved to user {}", body.user.id);
                Ok(body.user)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CoreError::NotAuthenticated),
            _ => Err(api_error(resp).await),
        }
    }

    async fn update_balance(&self, user: &User) -> Result<(), CoreError> {
        info!("refusing balance change for user {}", user.id);
        Err(CoreError::Unsupported {
            backend: self.name().to_string(),
            operation: "balance top-up".into(),
        })
    }
}
