//! Response envelope and entity types for the cloud controller v2 API.
//!
//! Every v2 resource arrives as `{ metadata, entity }`; list endpoints wrap
//! resources in a page with `total_results` and next/prev links.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Envelope ─────────────────────────────────────────────────────────

/// Identity and timestamps common to every v2 resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "guid")]
    pub id: String,
    pub url: String,
    /// ISO 8601 date-time.
    pub created_at: Option<String>,
    /// ISO 8601 date-time.
    pub updated_at: Option<String>,
}

/// A single v2 resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    pub metadata: Metadata,
    pub entity: T,
}

/// One page of a v2 list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    pub total_results: u32,
    pub total_pages: u32,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    #[serde(default)]
    pub resources: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// `true` when the server advertises a following page.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

// ── Applications ─────────────────────────────────────────────────────

/// Application entity, as listed by `GET /v2/routes/{id}/apps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEntity {
    pub name: String,
    pub space_guid: Option<String>,
    pub stack_guid: Option<String>,
    /// `STARTED` or `STOPPED`.
    pub state: Option<String>,
    pub instances: Option<u32>,
    /// Megabytes.
    pub memory: Option<u32>,
    /// Megabytes.
    pub disk_quota: Option<u32>,
    pub diego: Option<bool>,
    pub buildpack: Option<String>,
    pub detected_buildpack: Option<String>,
    pub health_check_type: Option<String>,
    pub package_state: Option<String>,
    pub ports: Option<Vec<u16>>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ── Routes ───────────────────────────────────────────────────────────

/// Route entity, as returned by `GET /v2/routes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntity {
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub domain_guid: String,
    pub space_guid: String,
    pub port: Option<u16>,
    pub service_instance_guid: Option<String>,
    pub domain_url: Option<String>,
    pub space_url: Option<String>,
    pub apps_url: Option<String>,
    pub route_mappings_url: Option<String>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
