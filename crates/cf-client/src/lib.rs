//! Async client for the Cloud Foundry networking policy and v2 route APIs.
//!
//! [`CloudFoundryClient`] bundles [`Policies`] (networking root) and
//! [`Routes`] (cloud controller root) over one shared [`Connection`].
//! Every request is validated locally before a token is fetched.

pub mod auth;
pub mod client;
pub mod connection;
pub mod error;
pub mod networking;
pub mod query;
pub mod transport;
pub mod v2;
pub mod validation;

pub use auth::{StaticTokenProvider, TokenProvider};
pub use client::{CloudFoundryClient, ConnectionConfig};
pub use connection::Connection;
pub use error::Error;
pub use networking::Policies;
pub use query::{OrderDirection, PaginatedRequest, QueryParameters};
pub use transport::{TlsMode, TransportConfig};
pub use v2::Routes;
pub use validation::{Validate, ValidationResult};

/// Networking request/response types, re-exported for convenience.
pub use networking::types as networking_types;
/// v2 request/response types, re-exported for convenience.
pub mod v2_types {
    pub use crate::v2::requests::{
        GetRouteRequest, GetRouteRequestBuilder, ListRouteApplicationsRequest,
        ListRouteApplicationsRequestBuilder,
    };
    pub use crate::v2::types::{
        ApplicationEntity, Metadata, PaginatedResponse, Resource, RouteEntity,
    };
}
