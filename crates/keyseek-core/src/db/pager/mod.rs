//! Per-request pager.
//!
//! A `Pager` resolves one sort scheme (and optionally a continuation boundary),
//! compiles the seek plan for the backend, and maps the fetched rows into a
//! `Page` with `next` / `prev` tokens.

mod options;
mod page;
mod request;


use crate::{
    db::{
        cursor::Continuation,
        direction::Direction,
        scheme::{SchemeError, SchemeId, SchemeRegistry, SortScheme, parse_order},
        seek::{SeekPlan, SeekTarget, compile_seek_predicate, seek_order},
    },
    error::PagerError,
    obs::sink::{self, MetricsEvent, PagerSource},
    traits::SortKey,
    value::{Value, canonical_cmp_slice},
};
use std::{marker::PhantomData, sync::Arc};

// re-exports
pub use options::PagerOptions;
pub use page::Page;
pub use request::{PageRequest, PagingRequest};

///
/// Pager
///
/// Short-lived, single-use state for one page fetch over rows of type `R`.
/// Holds its own `Arc` of the scheme, so the registry is only borrowed during
/// construction. `map` consumes the pager.
///

#[derive(Debug)]
pub struct Pager<R> {
    scheme: Arc<SortScheme>,
    directions: Vec<Direction>,
    continuation: Option<Continuation>,
    options: PagerOptions,
    source: PagerSource,
    _marker: PhantomData<fn() -> R>,
}

impl<R: SortKey> Pager<R> {
    /// First page under the row type's default scheme.
    pub fn new(registry: &SchemeRegistry, options: PagerOptions) -> Result<Self, PagerError> {
        let scheme = registry.resolve_default(R::TYPE_TAG)?;
        let directions = scheme.directions().to_vec();

        Ok(Self::build(scheme, directions, None, options, PagerSource::Default))
    }

    /// First page under the scheme registered for the columns of `order`.
    /// Directions come from the expression, not the registration.
    pub fn from_order(
        registry: &SchemeRegistry,
        order: &str,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        let (columns, directions): (Vec<_>, Vec<_>) = parse_order(order)?.into_iter().unzip();
        let scheme = registry.resolve_by_columns(R::TYPE_TAG, &columns)?;

        Ok(Self::build(scheme, directions, None, options, PagerSource::Order))
    }

    /// First page under an explicit scheme id, which must belong to `R`.
    pub fn from_scheme_id(
        registry: &SchemeRegistry,
        id: SchemeId,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        let scheme = resolve_owned::<R>(registry, id)?;
        let directions = scheme.directions().to_vec();

        Ok(Self::build(scheme, directions, None, options, PagerSource::SchemeId))
    }

    /// Resume from a continuation token.
    ///
    /// The scheme is looked up by the token's id only; there is no fallback to
    /// the default. The boundary must match the scheme's arity and declared
    /// column kinds, and the token's directions replace the registered ones.
    pub fn from_token(
        registry: &SchemeRegistry,
        token: &str,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        Self::resolve_token(registry, token, options).inspect_err(|err| {
            tracing::warn!(row_type = R::TYPE_TAG, error = %err, "rejected continuation token");
            sink::record(MetricsEvent::TokenRejected {
                row_type: R::TYPE_TAG,
            });
        })
    }

    /// Build from a request: its continuation if present, otherwise its order
    /// expression, otherwise the default scheme.
    pub fn from_request(
        registry: &SchemeRegistry,
        request: &impl PagingRequest,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        let options = match request.page_size() {
            Some(size) => options.with_page_size(size),
            None => options,
        };

        let token = request.continuation().trim();
        if !token.is_empty() {
            return Self::from_token(registry, token, options);
        }

        let order = request.order().trim();
        if !order.is_empty() {
            return Self::from_order(registry, order, options);
        }

        Self::new(registry, options)
    }

    fn resolve_token(
        registry: &SchemeRegistry,
        token: &str,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        let continuation = Continuation::decode(token)?;
        let scheme = resolve_owned::<R>(registry, continuation.scheme_id())?;

        scheme
            .check_boundary(continuation.values())
            .map_err(PagerError::token_malformed)?;
        let directions = continuation.directions().to_vec();

        Ok(Self::build(
            scheme,
            directions,
            Some(continuation),
            options,
            PagerSource::Token,
        ))
    }

    fn build(
        scheme: Arc<SortScheme>,
        directions: Vec<Direction>,
        continuation: Option<Continuation>,
        options: PagerOptions,
        source: PagerSource,
    ) -> Self {
        tracing::debug!(
            row_type = R::TYPE_TAG,
            scheme_id = %scheme.id(),
            source = ?source,
            resuming = continuation.is_some(),
            "resolved pager"
        );
        sink::record(MetricsEvent::PagerCreated {
            source,
            row_type: R::TYPE_TAG,
        });

        Self {
            scheme,
            directions,
            continuation,
            options,
            source,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &SortScheme {
        &self.scheme
    }

    /// Logical column directions in effect for this pager.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    #[must_use]
    pub const fn continuation(&self) -> Option<&Continuation> {
        self.continuation.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &PagerOptions {
        &self.options
    }

    #[must_use]
    pub const fn source(&self) -> PagerSource {
        self.source
    }

    /// True when this pager walks backward from its boundary.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.continuation
            .as_ref()
            .is_some_and(Continuation::is_reverse)
    }

    /// Compile the seek plan. The limit includes one probe row.
    #[must_use]
    pub fn compile(&self) -> SeekPlan {
        let columns: Vec<&str> = self.scheme.column_names().collect();
        let reverse = self.is_reverse();

        let predicate = self.continuation.as_ref().and_then(|cont| {
            compile_seek_predicate(
                &columns,
                &self.directions,
                cont.values(),
                reverse,
                cont.is_inclusive(),
            )
        });
        let order = seek_order(&columns, &self.directions, reverse);
        let limit = self
            .options
            .page_size()
            .map(|size| size.saturating_add(1));

        tracing::debug!(
            scheme_id = %self.scheme.id(),
            reverse,
            seek = predicate.is_some(),
            limit = ?limit,
            "compiled seek plan"
        );

        SeekPlan::new(predicate, order, limit)
    }

    /// Compile and hand the plan to an external query builder.
    pub fn apply_to<T: SeekTarget + ?Sized>(&self, target: &mut T) {
        self.compile().apply_to(target);
    }

    /// Turn the rows fetched with [`Pager::compile`] (in physical order) into a page.
    pub fn map(self, mut rows: Vec<R>) -> Result<Page<R>, PagerError> {
        let reverse = self.is_reverse();

        let probed = match self.options.page_size() {
            Some(size) => {
                let size = usize::try_from(size).unwrap_or(usize::MAX);
                let probed = rows.len() > size;
                rows.truncate(size);
                probed
            }
            None => false,
        };

        let page = if rows.is_empty() {
            self.map_empty()?
        } else {
            if reverse {
                rows.reverse();
            }
            self.map_rows(rows, probed)?
        };

        let rows_returned = u64::try_from(page.items.len()).unwrap_or(u64::MAX);
        let tokens_issued = u64::from(page.has_next()) + u64::from(page.has_prev());
        let reflected = page.items.is_empty() && tokens_issued > 0;

        tracing::debug!(
            row_type = R::TYPE_TAG,
            scheme_id = %self.scheme.id(),
            rows = rows_returned,
            has_next = page.has_next(),
            has_prev = page.has_prev(),
            reflected,
            "mapped page"
        );
        sink::record(MetricsEvent::PageMapped {
            row_type: R::TYPE_TAG,
            rows: rows_returned,
            tokens_issued,
            reflected,
        });

        Ok(page)
    }

    // Rows are already in logical order.
    fn map_rows(&self, rows: Vec<R>, probed: bool) -> Result<Page<R>, PagerError> {
        let reverse = self.is_reverse();
        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return Ok(Page::empty());
        };

        let first_values = first.sort_values(&self.scheme);
        let last_values = last.sort_values(&self.scheme);

        // forward scans probe ahead of `last`, reverse scans ahead of `first`
        let next_open = if reverse {
            self.behind_open(&last_values)
        } else {
            probed
        };
        let prev_open = !self.options.is_forward_only()
            && if reverse {
                probed
            } else {
                self.behind_open(&first_values)
            };

        let next_token = if next_open {
            Some(self.token(last_values, false, false)?)
        } else {
            None
        };
        let prev_token = if prev_open {
            Some(self.token(first_values, true, false)?)
        } else {
            None
        };

        Ok(Page {
            items: rows,
            next_token,
            prev_token,
        })
    }

    fn map_empty(&self) -> Result<Page<R>, PagerError> {
        let Some(cont) = &self.continuation else {
            return Ok(Page::empty());
        };

        let reflected = cont.reflect();
        if reflected.is_reverse() && self.options.is_forward_only() {
            return Ok(Page::empty());
        }

        let token = Some(reflected.encode()?);
        let (next_token, prev_token) = if reflected.is_reverse() {
            (None, token)
        } else {
            (token, None)
        };

        Ok(Page {
            items: Vec::new(),
            next_token,
            prev_token,
        })
    }

    // The side facing the inbound boundary. Closed on a first page, and when
    // an inclusive boundary is itself the edge row.
    fn behind_open(&self, edge: &[Value]) -> bool {
        match &self.continuation {
            None => false,
            Some(cont) => {
                !(cont.is_inclusive() && canonical_cmp_slice(cont.values(), edge).is_eq())
            }
        }
    }

    fn token(
        &self,
        values: Vec<Value>,
        reverse: bool,
        include: bool,
    ) -> Result<String, PagerError> {
        let cont = Continuation::new(
            self.scheme.id(),
            self.directions.clone(),
            values,
            reverse,
            include,
        )?;

        Ok(cont.encode()?)
    }
}

// Resolve a scheme by id and require that it was registered for `R`.
fn resolve_owned<R: SortKey>(
    registry: &SchemeRegistry,
    id: SchemeId,
) -> Result<Arc<SortScheme>, PagerError> {
    let scheme = registry.resolve_by_id(id)?;

    if scheme.row_type() != R::TYPE_TAG {
        return Err(SchemeError::RowTypeMismatch {
            id,
            expected: R::TYPE_TAG.to_string(),
            actual: scheme.row_type().to_string(),
        }
        .into());
    }

    Ok(scheme)
}
