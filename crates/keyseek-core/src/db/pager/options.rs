use crate::config::PagerConfig;

///
/// PagerOptions
///
/// Per-pager knobs. A zero or absent page size means an unbounded scan; a
/// configured maximum caps every page, unbounded ones included.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PagerOptions {
    page_size: Option<u32>,
    max_page_size: Option<u32>,
    forward_only: bool,
}

impl PagerOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page_size: None,
            max_page_size: None,
            forward_only: false,
        }
    }

    #[must_use]
    pub const fn from_config(config: &PagerConfig) -> Self {
        Self {
            page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            forward_only: config.forward_only,
        }
    }

    /// Request a page size; `0` disables the limit.
    #[must_use]
    pub const fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = if size == 0 { None } else { Some(size) };
        self
    }

    #[must_use]
    pub const fn with_max_page_size(mut self, max: u32) -> Self {
        self.max_page_size = if max == 0 { None } else { Some(max) };
        self
    }

    /// Never emit `prev` tokens.
    #[must_use]
    pub const fn forward_only(mut self, forward_only: bool) -> Self {
        self.forward_only = forward_only;
        self
    }

    /// Effective page size after clamping to the configured maximum.
    #[must_use]
    pub const fn page_size(&self) -> Option<u32> {
        match (self.page_size, self.max_page_size) {
            (Some(size), Some(max)) if size > max => Some(max),
            (Some(size), _) => Some(size),
            (None, max) => max,
        }
    }

    #[must_use]
    pub const fn max_page_size(&self) -> Option<u32> {
        self.max_page_size
    }

    #[must_use]
    pub const fn is_forward_only(&self) -> bool {
        self.forward_only
    }
}
