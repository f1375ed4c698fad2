use crate::db::schema::Table;
use crate::error::IngestError;
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::debug;

/// Create `table` and its declared indexes unless they already exist.
///
/// A table that already exists must carry every declared column. SQLite
/// accepts `CREATE INDEX ... ON t("missing")` as an expression index over a
/// string literal, so the columns are checked before any index is created.
pub async fn ensure_table(pool: &SqlitePool, table: &Table) -> Result<(), IngestError> {
    let schema_error = |err: sqlx::Error| IngestError::Schema {
        table: table.name,
        reason: err.to_string(),
    };

    sqlx::query(&table.create_table_sql())
        .execute(pool)
        .await
        .map_err(schema_error)?;

    let existing: HashSet<String> =
        sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
            .bind(table.name)
            .fetch_all(pool)
            .await
            .map_err(schema_error)?
            .into_iter()
            .collect();

    let missing: Vec<&str> = table
        .column_names()
        .into_iter()
        .filter(|name| !existing.contains(*name))
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::Schema {
            table: table.name,
            reason: format!("existing table lacks columns {}", missing.join(", ")),
        });
    }

    for statement in table.create_index_sql() {
        sqlx::query(&statement)
            .execute(pool)
            .await
            .map_err(schema_error)?;
    }

    debug!("Ensured table {} with {} indexes", table.name, table.indexes.len());
    Ok(())
}
