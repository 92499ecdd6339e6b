// Async client for the networking external policy API.
//
// Root: the networking API root (usually the same host as the cloud controller).
// Auth: bearer token from the connection's `TokenProvider`.

use tracing::debug;
use url::Url;

use super::types::{
    CreatePoliciesRequest, DeletePoliciesRequest, ListPoliciesRequest, ListPoliciesResponse,
};
use crate::connection::{Connection, RestClient};
use crate::error::Error;
use crate::query::QueryParameters;
use crate::validation::ensure_valid;

const POLICIES_PATH: &[&str] = &["v1", "external", "policies"];
const POLICIES_DELETE_PATH: &[&str] = &["v1", "external", "policies", "delete"];

/// Client for `/v1/external/policies`.
#[derive(Debug, Clone)]
pub struct Policies {
    rest: RestClient,
}

impl Policies {
    pub fn new(connection: Connection, root: &Url) -> Self {
        Self {
            rest: RestClient::new(connection, root),
        }
    }

    /// Create policies. Completes with `()` on success.
    ///
    /// `POST /v1/external/policies`
    pub async fn create(&self, request: &CreatePoliciesRequest) -> Result<(), Error> {
        ensure_valid(request, "policies.create")?;
        debug!(count = request.policies().len(), "creating policies");
        self.rest.post_no_response(POLICIES_PATH, request).await
    }

    /// Delete policies. Completes with `()` on success.
    ///
    /// `POST /v1/external/policies/delete`
    pub async fn delete(&self, request: &DeletePoliciesRequest) -> Result<(), Error> {
        ensure_valid(request, "policies.delete")?;
        debug!(count = request.policies().len(), "deleting policies");
        self.rest.post_no_response(POLICIES_DELETE_PATH, request).await
    }

    /// List policies, optionally restricted to one application.
    ///
    /// `GET /v1/external/policies`
    pub async fn list(&self, request: &ListPoliciesRequest) -> Result<ListPoliciesResponse, Error> {
        ensure_valid(request, "policies.list")?;
        self.rest.get(POLICIES_PATH, &request.query()).await
    }
}
