// Typed requests for the v2 route endpoints.
//
// `route_id` is a path segment and is never sent as a query parameter or
// body field.

use crate::query::{OrderDirection, PaginatedRequest, QueryBuilder, QueryParameters};
use crate::validation::{Validate, ValidationResult};

/// A route id must be a non-blank single path segment.
fn check_route_id(route_id: Option<&str>) -> ValidationResult {
    let id = route_id.map(str::trim).unwrap_or_default();
    ValidationResult::builder()
        .check(id.is_empty(), "id must be specified")
        .check(matches!(id, "." | ".."), "id must not be a relative path segment")
        .build()
}

// ── Get route ────────────────────────────────────────────────────────

/// Parameters of `GET /v2/routes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRouteRequest {
    route_id: Option<String>,
}

impl GetRouteRequest {
    pub fn builder() -> GetRouteRequestBuilder {
        GetRouteRequestBuilder::default()
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }
}

impl Validate for GetRouteRequest {
    fn validate(&self) -> ValidationResult {
        check_route_id(self.route_id())
    }
}

#[derive(Debug, Default)]
pub struct GetRouteRequestBuilder {
    route_id: Option<String>,
}

impl GetRouteRequestBuilder {
    pub fn route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    pub fn build(self) -> GetRouteRequest {
        GetRouteRequest {
            route_id: self.route_id,
        }
    }
}

// ── List route applications ──────────────────────────────────────────

/// Parameters of `GET /v2/routes/{id}/apps`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRouteApplicationsRequest {
    paging: PaginatedRequest,
    route_id: Option<String>,
    app_id: Option<String>,
    diegos: Vec<String>,
    names: Vec<String>,
    organization_ids: Vec<String>,
    space_ids: Vec<String>,
    stack_ids: Vec<String>,
}

impl ListRouteApplicationsRequest {
    pub fn builder() -> ListRouteApplicationsRequestBuilder {
        ListRouteApplicationsRequestBuilder::default()
    }

    pub fn paging(&self) -> &PaginatedRequest {
        &self.paging
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn diegos(&self) -> &[String] {
        &self.diegos
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn organization_ids(&self) -> &[String] {
        &self.organization_ids
    }

    pub fn space_ids(&self) -> &[String] {
        &self.space_ids
    }

    pub fn stack_ids(&self) -> &[String] {
        &self.stack_ids
    }
}

impl Validate for ListRouteApplicationsRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .merge(self.paging.validate())
            .merge(check_route_id(self.route_id()))
            .build()
    }
}

impl QueryParameters for ListRouteApplicationsRequest {
    fn query(&self) -> Vec<(String, String)> {
        QueryBuilder::new()
            .paginated(&self.paging)
            .param("app_guid", self.app_id.as_deref())
            .filter("diego", &self.diegos)
            .filter("name", &self.names)
            .filter("organization_guid", &self.organization_ids)
            .filter("space_guid", &self.space_ids)
            .filter("stack_guid", &self.stack_ids)
            .build()
    }
}

#[derive(Debug, Default)]
pub struct ListRouteApplicationsRequestBuilder {
    inner: ListRouteApplicationsRequest,
}

impl ListRouteApplicationsRequestBuilder {
    pub fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.inner.paging.order_direction = Some(direction);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.inner.paging.page = Some(page);
        self
    }

    pub fn results_per_page(mut self, results_per_page: u32) -> Self {
        self.inner.paging.results_per_page = Some(results_per_page);
        self
    }

    pub fn route_id(mut self, id: impl Into<String>) -> Self {
        self.inner.route_id = Some(id.into());
        self
    }

    pub fn app_id(mut self, id: impl Into<String>) -> Self {
        self.inner.app_id = Some(id.into());
        self
    }

    pub fn diego(mut self, diego: impl Into<String>) -> Self {
        self.inner.diegos.push(diego.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.names.push(name.into());
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn organization_id(mut self, id: impl Into<String>) -> Self {
        self.inner.organization_ids.push(id.into());
        self
    }

    pub fn organization_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.organization_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn space_id(mut self, id: impl Into<String>) -> Self {
        self.inner.space_ids.push(id.into());
        self
    }

    pub fn space_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.space_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn stack_id(mut self, id: impl Into<String>) -> Self {
        self.inner.stack_ids.push(id.into());
        self
    }

    pub fn stack_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.stack_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ListRouteApplicationsRequest {
        self.inner
    }
}
