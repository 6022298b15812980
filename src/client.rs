//! REST client for the channel message listing.
//!
//! [`ChannelClient`] is the production page source for
//! [`fetch_range`](crate::fetch::fetch_range). It issues
//! `GET {base}/channels/{channel}/messages?limit=100&after={cursor}` and maps
//! HTTP failures onto [`SmoldumpError`] variants. It does not retry and does
//! not look at rate-limit headers.
//!
//! ```rust,no_run
//! use smoldump::client::{AuthScheme, ChannelClient, Credentials};
//! use smoldump::fetch::FetchRange;
//!
//! # async fn run() -> smoldump::Result<()> {
//! let client = ChannelClient::new(Credentials::new("my-token", AuthScheme::Bot))?;
//! let range = FetchRange::parse("238354899291734017", "1100000000000000000", "1100000000000099999")?;
//! let messages = client.fetch_range(&range).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SmoldumpError};
use crate::fetch::{FetchRange, PAGE_SIZE, fetch_range_with_progress};
use crate::progress::{ProgressCallback, no_progress};
use crate::{Message, Snowflake};

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

const USER_AGENT: &str = concat!("smoldump/", env!("CARGO_PKG_VERSION"));

/// How the token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Raw token, no prefix (user accounts)
    #[default]
    User,

    /// `Bot <token>`
    Bot,

    /// `Bearer <token>` (OAuth2 access tokens)
    Bearer,
}

/// A token plus the scheme it is sent with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    scheme: AuthScheme,
}

impl Credentials {
    /// Creates credentials from a token and scheme.
    pub fn new(token: impl Into<String>, scheme: AuthScheme) -> Self {
        Self {
            token: token.into(),
            scheme,
        }
    }

    /// Returns the scheme.
    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Returns `true` if the token is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        let token = self.token.trim();
        match self.scheme {
            AuthScheme::User => token.to_string(),
            AuthScheme::Bot => format!("Bot {}", token),
            AuthScheme::Bearer => format!("Bearer {}", token),
        }
    }
}

// Keep tokens out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// HTTP client for one API root and one credential.
#[derive(Debug, Clone)]
pub struct ChannelClient {
    http: Client,
    base_url: String,
    auth: HeaderValue,
}

impl ChannelClient {
    /// Creates a client against [`DEFAULT_API_URL`].
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_API_URL)
    }

    /// Creates a client against a custom API root.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        if credentials.is_empty() {
            return Err(SmoldumpError::config("a token is required"));
        }

        let mut auth = HeaderValue::from_str(&credentials.header_value())
            .map_err(|_| SmoldumpError::config("token contains characters not allowed in a header"))?;
        auth.set_sensitive(true);

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SmoldumpError::transport("building HTTP client", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page: up to [`PAGE_SIZE`] messages newer than `after`,
    /// newest first.
    pub async fn messages_after(
        &self,
        channel: Snowflake,
        after: Snowflake,
    ) -> Result<Vec<Message>> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel);
        debug!(%channel, %after, "requesting page");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth.clone())
            .query(&[("limit", PAGE_SIZE.to_string()), ("after", after.to_string())])
            .send()
            .await
            .map_err(|e| SmoldumpError::transport(format!("requesting {}", url), e))?;

        let status = response.status();
        if !status.is_success() {
            // The status alone decides the error; a lost body only loses detail.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status = status.as_u16(), error = %e, "could not read error body");
                    String::new()
                }
            };
            return Err(SmoldumpError::from_status(
                status.as_u16(),
                channel.to_string(),
                body,
            ));
        }

        response
            .json::<Vec<Message>>()
            .await
            .map_err(|e| SmoldumpError::transport("decoding message page", e))
    }

    /// Fetches every message of `range`, oldest first.
    pub async fn fetch_range(&self, range: &FetchRange) -> Result<Vec<Message>> {
        self.fetch_range_with_progress(range, &no_progress()).await
    }

    /// Like [`fetch_range`](Self::fetch_range), with a per-page callback.
    pub async fn fetch_range_with_progress(
        &self,
        range: &FetchRange,
        progress: &ProgressCallback,
    ) -> Result<Vec<Message>> {
        let client = self;
        let channel = range.channel_id();
        fetch_range_with_progress(
            range,
            move |after| client.messages_after(channel, after),
            progress,
        )
        .await
    }
}
