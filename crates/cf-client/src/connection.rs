// Shared HTTP plumbing for every resource client.
//
// `Connection` owns the reqwest client and token provider; `RestClient`
// pins a connection to one API root and implements the verbs, bearer auth
// and response decoding that `Policies` and `Routes` build on.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::{TokenProvider, authorization_value};
use crate::error::Error;
use crate::transport::TransportConfig;

// ── Error response shapes ────────────────────────────────────────────

/// Union of the v2 (`{code, description, error_code}`) and networking
/// (`{error}`) error bodies.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Connection ───────────────────────────────────────────────────────

/// HTTP client plus token source, shared by all resource clients.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct Connection {
    http: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl Connection {
    /// Build a connection from a transport config.
    pub fn new(
        transport: &TransportConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            token_provider,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(http: reqwest::Client, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            http,
            token_provider,
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

// ── RestClient ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    connection: Connection,
    root: Url,
}

impl RestClient {
    pub(crate) fn new(connection: Connection, root: &Url) -> Self {
        Self {
            connection,
            root: normalize_root(root),
        }
    }

    pub(crate) fn root(&self) -> &Url {
        &self.root
    }

    /// Append path segments to the root, percent-encoding each one.
    ///
    /// A segment is always a single path component: `/`, `?` and `#` inside
    /// it are escaped, never interpreted.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let token = self.connection.token_provider.token().await?;
        let value = authorization_value(&token)?;
        Ok(builder.header(reqwest::header::AUTHORIZATION, value))
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url}");
        trace!(?query, "query parameters");

        let builder = self.connection.http.get(url).query(query);
        let resp = self.authorized(builder).await?.send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn post_no_response<B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let builder = self.connection.http.post(url).json(body);
        let resp = self.authorized(builder).await?.send().await?;
        handle_empty(resp).await
    }
}

/// Ensure the root ends with `/` so the root path is kept as a prefix.
fn normalize_root(root: &Url) -> Url {
    let mut url = root.clone();
    let path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{path}/"));
    url
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let raw = resp.text().await.unwrap_or_default();

    if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
        Error::Api {
            status: status.as_u16(),
            code: err.error_code,
            description: err
                .description
                .or(err.error)
                .unwrap_or_else(|| status.to_string()),
        }
    } else {
        Error::Api {
            status: status.as_u16(),
            code: None,
            description: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }
}
