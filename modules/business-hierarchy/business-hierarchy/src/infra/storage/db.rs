//! Database error conversion helpers.

use std::fmt::Display;

use business_hierarchy_sdk::Page;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select, SqlErr,
};

use crate::domain::error::DomainError;
use crate::domain::repos::PageRequest;
use crate::domain::validation::{already_taken, invalid_reference};

/// Convert any displayable error into a `DomainError::Database`.
#[must_use]
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}

/// Convert a failed insert or update.
///
/// A unique index violation becomes a validation error on the first of
/// `unique_fields` whose column appears in the driver message (falling back
/// to the first one). A foreign key violation becomes a validation error on
/// `parent_field`. Anything else is a database error.
#[must_use]
pub fn write_err(e: DbErr, unique_fields: &[&str], parent_field: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            let Some(field) = unique_fields
                .iter()
                .find(|f| message.contains(**f))
                .or_else(|| unique_fields.first())
            else {
                return db_err(message);
            };
            tracing::warn!(field, "unique index rejected a write that passed the pre-check");
            DomainError::validation(field, already_taken(field))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) if !parent_field.is_empty() => {
            tracing::warn!(field = parent_field, "parent vanished before the write landed");
            DomainError::validation(parent_field, invalid_reference(parent_field))
        }
        _ => db_err(e),
    }
}

/// Convert a failed delete: a foreign key violation means dependents appeared.
#[must_use]
pub fn delete_err(e: DbErr, what: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            tracing::warn!(what, "delete blocked by dependent records");
            DomainError::conflict(format!("{what} still has dependent records."))
        }
        _ => db_err(e),
    }
}

/// Count and fetch one window of an ordered select.
///
/// # Errors
/// Any store failure.
pub async fn fetch_page<E, C>(
    select: Select<E>,
    conn: &C,
    req: &PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait + Send + Sync,
{
    let total_items = select.clone().count(conn).await?;
    let items = match req.offset() {
        Some(offset) => {
            select
                .offset(offset)
                .limit(req.per_page)
                .all(conn)
                .await?
        }
        None => Vec::new(),
    };
    Ok(Page {
        items,
        page: req.page,
        per_page: req.per_page,
        total_items,
        total_pages: total_items.div_ceil(req.per_page),
    })
}

/// `LIKE` pattern for a case-insensitive "contains" match on a lowercased column.
#[must_use]
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
