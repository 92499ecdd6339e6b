//! Request and response types for the networking external policy API.
//!
//! Wire shapes match `/v1/external/policies`. Field names are already
//! snake_case on the wire, so no renames are needed.

use serde::{Deserialize, Serialize};

use crate::query::{QueryBuilder, QueryParameters};
use crate::validation::{Validate, ValidationResult};

// ── Policy ───────────────────────────────────────────────────────────

/// Inclusive port range on the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ports {
    pub start: u16,
    pub end: u16,
}

impl Ports {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one port.
    pub fn single(port: u16) -> Self {
        Self {
            start: port,
            end: port,
        }
    }
}

/// The application allowed to open connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Application GUID.
    pub id: String,
}

impl Source {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The application accepting connections, and on what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Application GUID.
    pub id: String,
    /// `tcp` or `udp`.
    pub protocol: String,
    pub ports: Ports,
}

impl Destination {
    pub fn new(id: impl Into<String>, protocol: impl Into<String>, ports: Ports) -> Self {
        Self {
            id: id.into(),
            protocol: protocol.into(),
            ports,
        }
    }
}

/// One allowed traffic rule from `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub source: Source,
    pub destination: Destination,
}

impl Policy {
    pub fn new(source: Source, destination: Destination) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl Validate for Policy {
    fn validate(&self) -> ValidationResult {
        let ports = self.destination.ports;
        ValidationResult::builder()
            .check(ports.start > ports.end, "ports start must not exceed end")
            .build()
    }
}

fn validate_policies(policies: &[Policy]) -> ValidationResult {
    policies.iter().fold(
        ValidationResult::builder().check(policies.is_empty(), "policies must be specified"),
        |builder, policy| builder.merge(policy.validate()),
    )
    .build()
}

// ── Create ───────────────────────────────────────────────────────────

/// Body of `POST /v1/external/policies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePoliciesRequest {
    policies: Vec<Policy>,
}

impl CreatePoliciesRequest {
    pub fn builder() -> CreatePoliciesRequestBuilder {
        CreatePoliciesRequestBuilder::default()
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }
}

impl Validate for CreatePoliciesRequest {
    fn validate(&self) -> ValidationResult {
        validate_policies(&self.policies)
    }
}

#[derive(Debug, Default)]
pub struct CreatePoliciesRequestBuilder {
    policies: Vec<Policy>,
}

impl CreatePoliciesRequestBuilder {
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies.extend(policies);
        self
    }

    pub fn build(self) -> CreatePoliciesRequest {
        CreatePoliciesRequest {
            policies: self.policies,
        }
    }
}

// ── Delete ───────────────────────────────────────────────────────────

/// Body of `POST /v1/external/policies/delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletePoliciesRequest {
    policies: Vec<Policy>,
}

impl DeletePoliciesRequest {
    pub fn builder() -> DeletePoliciesRequestBuilder {
        DeletePoliciesRequestBuilder::default()
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }
}

impl Validate for DeletePoliciesRequest {
    fn validate(&self) -> ValidationResult {
        validate_policies(&self.policies)
    }
}

#[derive(Debug, Default)]
pub struct DeletePoliciesRequestBuilder {
    policies: Vec<Policy>,
}

impl DeletePoliciesRequestBuilder {
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies.extend(policies);
        self
    }

    pub fn build(self) -> DeletePoliciesRequest {
        DeletePoliciesRequest {
            policies: self.policies,
        }
    }
}

// ── List ─────────────────────────────────────────────────────────────

/// Parameters of `GET /v1/external/policies`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPoliciesRequest {
    policy_group_id: Option<String>,
}

impl ListPoliciesRequest {
    pub fn builder() -> ListPoliciesRequestBuilder {
        ListPoliciesRequestBuilder::default()
    }

    /// Restrict the result to policies touching this application (query `id`).
    pub fn policy_group_id(&self) -> Option<&str> {
        self.policy_group_id.as_deref()
    }
}

impl Validate for ListPoliciesRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::default()
    }
}

impl QueryParameters for ListPoliciesRequest {
    fn query(&self) -> Vec<(String, String)> {
        QueryBuilder::new()
            .param("id", self.policy_group_id.as_deref())
            .build()
    }
}

#[derive(Debug, Default)]
pub struct ListPoliciesRequestBuilder {
    policy_group_id: Option<String>,
}

impl ListPoliciesRequestBuilder {
    pub fn policy_group_id(mut self, id: impl Into<String>) -> Self {
        self.policy_group_id = Some(id.into());
        self
    }

    pub fn build(self) -> ListPoliciesRequest {
        ListPoliciesRequest {
            policy_group_id: self.policy_group_id,
        }
    }
}

/// Response of `GET /v1/external/policies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPoliciesResponse {
    pub total_policies: u32,
    #[serde(default)]
    pub policies: Vec<Policy>,
}
