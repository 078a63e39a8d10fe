use crate::db::{direction::Direction, scheme::SchemeError};

/// Canonical column spelling used for scheme identity.
pub(crate) fn normalize_column(column: &str) -> String {
    column.trim().to_lowercase()
}

/// Parse an order expression such as `"created_at DESC, id"`.
///
/// Terms are comma-separated; each is a column optionally followed by `ASC`
/// or `DESC` (case-insensitive, default `ASC`). Column names are normalized.
pub fn parse_order(expr: &str) -> Result<Vec<(String, Direction)>, SchemeError> {
    expr.split(',')
        .enumerate()
        .map(|(i, term)| parse_term(i, term))
        .collect()
}

fn parse_term(index: usize, term: &str) -> Result<(String, Direction), SchemeError> {
    let mut words = term.split_whitespace();

    let Some(column) = words.next() else {
        return Err(SchemeError::invalid(format!("order term {index} is empty")));
    };

    let direction = match words.next() {
        None => Direction::Asc,
        Some(word) => Direction::parse_keyword(word).ok_or_else(|| {
            SchemeError::invalid(format!(
                "order term '{}' has unknown direction '{word}'",
                term.trim()
            ))
        })?,
    };

    if words.next().is_some() {
        return Err(SchemeError::invalid(format!(
            "order term '{}' has trailing input",
            term.trim()
        )));
    }

    Ok((normalize_column(column), direction))
}

/// Render columns and directions back into an order expression.
#[must_use]
pub fn format_order<S: AsRef<str>>(columns: &[S], directions: &[Direction]) -> String {
    columns
        .iter()
        .zip(directions)
        .map(|(column, dir)| format!("{} {dir}", column.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
