use crate::{
    MAX_SORT_COLUMNS,
    db::{
        direction::Direction,
        scheme::{SchemeError, SchemeId},
    },
    value::{Value, ValueKind},
};
use std::collections::HashSet;

///
/// SortColumn
///
/// One ordered column of a scheme. `kind` is the declared value type used to
/// vet boundary values decoded from tokens; `None` leaves the column unchecked.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortColumn {
    name: String,
    kind: Option<ValueKind>,
}

impl SortColumn {
    #[must_use]
    pub const fn new(name: String, kind: Option<ValueKind>) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}

///
/// SortScheme
///
/// Registered multi-column ordering for one row type. Column order defines
/// majority-to-minority precedence. Immutable once registered.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortScheme {
    id: SchemeId,
    row_type: String,
    columns: Vec<SortColumn>,
    directions: Vec<Direction>,
    is_default: bool,
}

impl SortScheme {
    /// Validate shape and derive the id. Column names must already be normalized.
    pub(crate) fn try_new(
        row_type: &str,
        columns: Vec<SortColumn>,
        directions: Vec<Direction>,
        is_default: bool,
    ) -> Result<Self, SchemeError> {
        if row_type.trim().is_empty() {
            return Err(SchemeError::invalid("row type tag is empty"));
        }
        if columns.is_empty() {
            return Err(SchemeError::invalid("sort scheme has no columns"));
        }
        if columns.len() > MAX_SORT_COLUMNS {
            return Err(SchemeError::invalid(format!(
                "sort scheme has {} columns (max {MAX_SORT_COLUMNS})",
                columns.len()
            )));
        }
        if directions.len() != columns.len() {
            return Err(SchemeError::invalid(format!(
                "sort scheme has {} columns but {} directions",
                columns.len(),
                directions.len()
            )));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.name.is_empty() {
                return Err(SchemeError::invalid("sort column name is empty"));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SchemeError::invalid(format!(
                    "sort column '{}' appears more than once",
                    column.name
                )));
            }
        }

        let names: Vec<&str> = columns.iter().map(SortColumn::name).collect();
        let id = SchemeId::derive(row_type, &names);

        Ok(Self {
            id,
            row_type: row_type.to_string(),
            columns,
            directions,
            is_default,
        })
    }

    #[must_use]
    pub const fn id(&self) -> SchemeId {
        self.id
    }

    #[must_use]
    pub fn row_type(&self) -> &str {
        &self.row_type
    }

    #[must_use]
    pub fn columns(&self) -> &[SortColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(SortColumn::name)
    }

    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Check a boundary tuple against this scheme's arity and declared kinds.
    pub(crate) fn check_boundary(&self, values: &[Value]) -> Result<(), String> {
        if values.len() != self.columns.len() {
            return Err(format!(
                "boundary arity mismatch for scheme {}: expected {}, found {}",
                self.id,
                self.columns.len(),
                values.len()
            ));
        }

        for (column, value) in self.columns.iter().zip(values) {
            if let Some(kind) = column.kind
                && !kind.accepts(value)
            {
                return Err(format!(
                    "boundary type mismatch for column '{}': expected {kind}, found {}",
                    column.name,
                    value.label()
                ));
            }
        }

        Ok(())
    }
}
