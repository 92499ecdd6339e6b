// Entry point tying one connection to both API roots.

use std::sync::Arc;

use url::Url;

use crate::auth::TokenProvider;
use crate::connection::Connection;
use crate::error::Error;
use crate::networking::Policies;
use crate::transport::TransportConfig;
use crate::v2::Routes;

/// Where the platform lives and how to reach it.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Cloud controller root, e.g. `https://api.sys.example.com`.
    pub api_root: Url,
    /// Networking API root. Defaults to `api_root`.
    pub networking_root: Option<Url>,
    pub transport: TransportConfig,
}

impl ConnectionConfig {
    pub fn new(api_root: Url) -> Self {
        Self {
            api_root,
            networking_root: None,
            transport: TransportConfig::default(),
        }
    }

    pub fn networking_root(&self) -> &Url {
        self.networking_root.as_ref().unwrap_or(&self.api_root)
    }
}

/// Resource clients sharing one HTTP connection pool and token provider.
#[derive(Debug, Clone)]
pub struct CloudFoundryClient {
    policies: Policies,
    routes: Routes,
}

impl CloudFoundryClient {
    pub fn new(
        config: &ConnectionConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        let connection = Connection::new(&config.transport, token_provider)?;
        Ok(Self::from_connection(
            &connection,
            &config.api_root,
            config.networking_root(),
        ))
    }

    pub fn from_connection(connection: &Connection, api_root: &Url, networking_root: &Url) -> Self {
        Self {
            policies: Policies::new(connection.clone(), networking_root),
            routes: Routes::new(connection.clone(), api_root),
        }
    }

    /// Networking policies (`/v1/external/policies`).
    pub fn policies(&self) -> &Policies {
        &self.policies
    }

    /// v2 routes (`/v2/routes`).
    pub fn routes(&self) -> &Routes {
        &self.routes
    }
}
