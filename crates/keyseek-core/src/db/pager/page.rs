use serde::Serialize;
use std::ops::Deref;

///
/// Page
///
/// One page of rows in logical order, with the tokens that continue the scan.
/// A `None` token means that direction is exhausted.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub next_token: Option<String>,
    pub prev_token: Option<String>,
}

impl<R> Page<R> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_token: None,
            prev_token: None,
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev_token.is_some()
    }

    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    #[must_use]
    pub fn prev_token(&self) -> Option<&str> {
        self.prev_token.as_deref()
    }

    /// `(items, next, prev)` with exhausted directions as empty strings.
    #[must_use]
    pub fn into_parts(self) -> (Vec<R>, String, String) {
        (
            self.items,
            self.next_token.unwrap_or_default(),
            self.prev_token.unwrap_or_default(),
        )
    }
}

impl<R> Deref for Page<R> {
    type Target = [R];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<R> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
