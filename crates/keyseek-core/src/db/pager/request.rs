use serde::{Deserialize, Serialize};

///
/// PagingRequest
///
/// Inbound request shape a pager can be built from. Empty strings mean
/// "not supplied".
///

pub trait PagingRequest {
    /// Continuation token from a previous page.
    fn continuation(&self) -> &str;

    /// Order expression such as `"name ASC, id DESC"`.
    fn order(&self) -> &str {
        ""
    }

    /// Requested page size, clamped by the pager options.
    fn page_size(&self) -> Option<u32> {
        None
    }
}

///
/// PageRequest
/// Plain request carrier, e.g. deserialized from query parameters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PageRequest {
    pub continuation: String,
    pub order: String,
    pub page_size: Option<u32>,
}

impl PageRequest {
    #[must_use]
    pub fn resume(token: impl Into<String>) -> Self {
        Self {
            continuation: token.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ordered(order: impl Into<String>) -> Self {
        Self {
            order: order.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

impl PagingRequest for PageRequest {
    fn continuation(&self) -> &str {
        &self.continuation
    }

    fn order(&self) -> &str {
        &self.order
    }

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}
