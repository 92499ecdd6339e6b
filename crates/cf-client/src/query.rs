// Query-string mapping.
//
// Each request type spells out its own query parameters in a
// `QueryParameters` impl; `QueryBuilder` keeps the encoding rules for plain
// parameters, `q` filters and paging in one place.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationResult};

/// Largest page size the cloud controller accepts.
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// Sort direction for v2 list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Paging fields shared by every v2 list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginatedRequest {
    pub(crate) order_direction: Option<OrderDirection>,
    pub(crate) page: Option<u32>,
    pub(crate) results_per_page: Option<u32>,
}

impl PaginatedRequest {
    pub fn order_direction(&self) -> Option<OrderDirection> {
        self.order_direction
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn results_per_page(&self) -> Option<u32> {
        self.results_per_page
    }
}

impl Validate for PaginatedRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .check(self.page == Some(0), "page must be greater than zero")
            .check(
                self.results_per_page
                    .is_some_and(|n| !(1..=MAX_RESULTS_PER_PAGE).contains(&n)),
                "results per page must be between 1 and 100",
            )
            .build()
    }
}

/// Explicit query-string mapping for a request type.
pub trait QueryParameters {
    fn query(&self) -> Vec<(String, String)>;
}

/// Ordered accumulator of `(name, value)` query pairs.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name=value` when the value is present.
    pub fn param<V: Display>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name.to_owned(), value.to_string()));
        }
        self
    }

    /// One `q` entry: `name:value` for a single value, `name IN a,b` for
    /// several, nothing when the list is empty.
    pub fn filter(mut self, name: &str, values: &[String]) -> Self {
        let expression = match values {
            [] => return self,
            [single] => format!("{name}:{single}"),
            many => format!("{name} IN {}", many.join(",")),
        };
        self.pairs.push(("q".to_owned(), expression));
        self
    }

    /// `order-direction`, `page` and `results-per-page` when set.
    pub fn paginated(self, paging: &PaginatedRequest) -> Self {
        self.param("order-direction", paging.order_direction)
            .param("page", paging.page)
            .param("results-per-page", paging.results_per_page)
    }

    pub fn build(self) -> Vec<(String, String)> {
        self.pairs
    }
}
