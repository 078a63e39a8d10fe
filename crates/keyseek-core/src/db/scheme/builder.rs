use crate::{
    db::{
        direction::Direction,
        scheme::{
            SchemeError, SchemeId, SchemeRegistry, SortColumn, normalize_column, parse_order,
        },
    },
    traits::SortKey,
    value::ValueKind,
};

///
/// SchemeBuilder
///
/// Fluent registration helper:
///
/// ```ignore
/// SchemeBuilder::new::<User>()
///     .order("created_at DESC")
///     .column("id")
///     .mark_default()
///     .register(&registry)?;
/// ```
///
/// Columns added with `column` take a direction from the matching `direction`
/// call (by position) and default to ascending when none was given.
///

#[derive(Clone, Debug)]
pub struct SchemeBuilder {
    row_type: &'static str,
    kind_of: fn(&str) -> Option<ValueKind>,
    columns: Vec<String>,
    directions: Vec<Direction>,
    is_default: bool,
    error: Option<SchemeError>,
}

impl SchemeBuilder {
    #[must_use]
    pub fn new<R: SortKey>() -> Self {
        Self {
            row_type: R::TYPE_TAG,
            kind_of: R::column_kind,
            columns: Vec::new(),
            directions: Vec::new(),
            is_default: false,
            error: None,
        }
    }

    #[must_use]
    pub fn column(mut self, column: &str) -> Self {
        self.columns.push(normalize_column(column));
        self
    }

    #[must_use]
    pub fn columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns
            .extend(columns.iter().map(|c| normalize_column(c.as_ref())));
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.directions.push(direction);
        self
    }

    /// Append the columns and directions of an order expression.
    ///
    /// Parse errors are held until [`SchemeBuilder::register`].
    #[must_use]
    pub fn order(mut self, expr: &str) -> Self {
        match parse_order(expr) {
            Ok(terms) => {
                // keep earlier bare columns aligned with their implicit ASC
                self.pad_directions();
                for (column, direction) in terms {
                    self.columns.push(column);
                    self.directions.push(direction);
                }
            }
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    #[must_use]
    pub const fn mark_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn register(mut self, registry: &SchemeRegistry) -> Result<SchemeId, SchemeError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if self.directions.len() > self.columns.len() {
            return Err(SchemeError::invalid(format!(
                "sort scheme has {} columns but {} directions",
                self.columns.len(),
                self.directions.len()
            )));
        }
        self.pad_directions();

        let kind_of = self.kind_of;
        let columns = self
            .columns
            .into_iter()
            .map(|name| {
                let kind = kind_of(&name);
                SortColumn::new(name, kind)
            })
            .collect();

        registry.register_columns(self.row_type, columns, self.directions, self.is_default)
    }

    fn pad_directions(&mut self) {
        if self.directions.len() < self.columns.len() {
            self.directions.resize(self.columns.len(), Direction::Asc);
        }
    }
}
