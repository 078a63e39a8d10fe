use crate::{
    db::{
        direction::Direction,
        scheme::{
            SchemeError, SchemeId, SortColumn, SortScheme, normalize_column, parse_order,
        },
    },
    traits::SortKey,
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// SchemeRegistry
///
/// Catalog of sort schemes keyed by content-derived id, plus one default
/// scheme per row type. Construct once, share by reference.
///
/// The whole catalog sits behind one read/write lock: lookups happen per
/// request, registrations are rare.
///

#[derive(Debug, Default)]
pub struct SchemeRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    schemes: HashMap<SchemeId, Arc<SortScheme>>,
    defaults: HashMap<String, SchemeId>,
}

impl SchemeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a scheme for a row type tag.
    ///
    /// Idempotent: the same row type and column list always yield the same id.
    pub fn register<S: AsRef<str>>(
        &self,
        row_type: &str,
        columns: &[S],
        directions: &[Direction],
        is_default: bool,
    ) -> Result<SchemeId, SchemeError> {
        let columns = columns
            .iter()
            .map(|column| SortColumn::new(normalize_column(column.as_ref()), None))
            .collect();

        self.register_columns(row_type, columns, directions.to_vec(), is_default)
    }

    /// Register a scheme for `R`, recording the declared kind of each column.
    pub fn register_for<R: SortKey, S: AsRef<str>>(
        &self,
        columns: &[S],
        directions: &[Direction],
        is_default: bool,
    ) -> Result<SchemeId, SchemeError> {
        let columns = columns
            .iter()
            .map(|column| typed_column::<R>(column.as_ref()))
            .collect();

        self.register_columns(R::TYPE_TAG, columns, directions.to_vec(), is_default)
    }

    /// Register a scheme for `R` from an order expression such as `"name ASC, id DESC"`.
    pub fn register_order<R: SortKey>(
        &self,
        order: &str,
        is_default: bool,
    ) -> Result<SchemeId, SchemeError> {
        let (columns, directions): (Vec<_>, Vec<_>) = parse_order(order)?.into_iter().unzip();

        self.register_for::<R, _>(&columns, &directions, is_default)
    }

    pub(crate) fn register_columns(
        &self,
        row_type: &str,
        columns: Vec<SortColumn>,
        directions: Vec<Direction>,
        is_default: bool,
    ) -> Result<SchemeId, SchemeError> {
        let scheme = SortScheme::try_new(row_type, columns, directions, is_default)?;
        let id = scheme.id();

        self.write().upsert(scheme, is_default);

        tracing::debug!(
            scheme_id = %id,
            row_type,
            is_default,
            "registered sort scheme"
        );

        Ok(id)
    }

    pub fn resolve_by_id(&self, id: SchemeId) -> Result<Arc<SortScheme>, SchemeError> {
        self.read()
            .schemes
            .get(&id)
            .cloned()
            .ok_or(SchemeError::UnknownId { id })
    }

    pub fn resolve_default(&self, row_type: &str) -> Result<Arc<SortScheme>, SchemeError> {
        let state = self.read();

        state
            .defaults
            .get(row_type)
            .and_then(|id| state.schemes.get(id))
            .cloned()
            .ok_or_else(|| SchemeError::NoDefault {
                row_type: row_type.to_string(),
            })
    }

    /// Look up the scheme registered for `row_type` with exactly these columns.
    pub fn resolve_by_columns<S: AsRef<str>>(
        &self,
        row_type: &str,
        columns: &[S],
    ) -> Result<Arc<SortScheme>, SchemeError> {
        let columns: Vec<String> = columns
            .iter()
            .map(|column| normalize_column(column.as_ref()))
            .collect();
        let id = SchemeId::derive(row_type, &columns);

        match self.read().schemes.get(&id) {
            Some(scheme) if scheme.row_type() == row_type => Ok(Arc::clone(scheme)),
            _ => Err(SchemeError::UnknownColumns {
                row_type: row_type.to_string(),
                columns: columns.join(", "),
            }),
        }
    }

    /// All schemes registered for a row type, ordered by id.
    #[must_use]
    pub fn schemes_for(&self, row_type: &str) -> Vec<Arc<SortScheme>> {
        let mut schemes: Vec<_> = self
            .read()
            .schemes
            .values()
            .filter(|scheme| scheme.row_type() == row_type)
            .cloned()
            .collect();
        schemes.sort_by_key(|scheme| scheme.id());

        schemes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().schemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().schemes.is_empty()
    }

    // Every write leaves the state consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RegistryState {
    // Store the scheme and move the row type's default pointer.
    // The first scheme of a type is its implicit default; an explicit default
    // always takes over; implicit registrations never displace a current default.
    fn upsert(&mut self, scheme: SortScheme, explicit_default: bool) {
        let id = scheme.id();
        let row_type = scheme.row_type().to_string();
        let previous = self.defaults.get(&row_type).copied();

        let default_id = match previous {
            Some(current) if !explicit_default => current,
            _ => id,
        };

        self.schemes
            .insert(id, Arc::new(scheme.with_default(default_id == id)));
        self.defaults.insert(row_type, default_id);

        if let Some(previous) = previous
            && previous != default_id
            && let Some(demoted) = self.schemes.get(&previous)
        {
            let demoted = demoted.as_ref().clone().with_default(false);
            self.schemes.insert(previous, Arc::new(demoted));
        }
    }
}

fn typed_column<R: SortKey>(column: &str) -> SortColumn {
    let name = normalize_column(column);
    let kind = R::column_kind(&name);

    SortColumn::new(name, kind)
}
