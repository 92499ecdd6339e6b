// Async client for the cloud controller v2 route endpoints.
//
// Root: the cloud controller API root.
// Auth: bearer token from the connection's `TokenProvider`.

use tracing::debug;
use url::Url;

use super::requests::{GetRouteRequest, ListRouteApplicationsRequest};
use super::types::{ApplicationEntity, PaginatedResponse, Resource, RouteEntity};
use crate::connection::{Connection, RestClient};
use crate::error::Error;
use crate::query::QueryParameters;
use crate::validation::ensure_valid;

/// Client for `/v2/routes`.
#[derive(Debug, Clone)]
pub struct Routes {
    rest: RestClient,
}

impl Routes {
    pub fn new(connection: Connection, root: &Url) -> Self {
        Self {
            rest: RestClient::new(connection, root),
        }
    }

    /// Fetch one route.
    ///
    /// `GET /v2/routes/{id}`
    pub async fn get(&self, request: &GetRouteRequest) -> Result<Resource<RouteEntity>, Error> {
        ensure_valid(request, "routes.get")?;
        let route_id = required_id(request.route_id())?;
        self.rest.get(&["v2", "routes", route_id], &[]).await
    }

    /// List the applications mapped to a route, one page at a time.
    ///
    /// `GET /v2/routes/{id}/apps`
    pub async fn list_applications(
        &self,
        request: &ListRouteApplicationsRequest,
    ) -> Result<PaginatedResponse<Resource<ApplicationEntity>>, Error> {
        ensure_valid(request, "routes.list_applications")?;
        let route_id = required_id(request.route_id())?;
        debug!(route_id, "listing route applications");
        self.rest
            .get(&["v2", "routes", route_id, "apps"], &request.query())
            .await
    }
}

// Validation already rejected a missing id; this only avoids an unwrap.
fn required_id(id: Option<&str>) -> Result<&str, Error> {
    id.ok_or_else(|| Error::Validation {
        messages: vec!["id must be specified".into()],
    })
}
