use crate::db::schema::Table;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Fetch `columns` of `table`, optionally filtered by `predicate`.
pub async fn select(
    pool: &SqlitePool,
    table: &Table,
    columns: &[&str],
    predicate: Option<&str>,
) -> Result<Vec<SqliteRow>, sqlx::Error> {
    let mut sql = table.select_columns(columns);
    if let Some(predicate) = predicate {
        sql.push_str(" WHERE ");
        sql.push_str(predicate);
    }

    sqlx::query(&sql).fetch_all(pool).await
}

/// Every identifier already persisted in `table`.
pub async fn select_ids(pool: &SqlitePool, table: &Table) -> Result<HashSet<String>, sqlx::Error> {
    let sql = table.select_columns(&[table.primary_key]);
    let ids = sqlx::query_scalar::<_, String>(&sql).fetch_all(pool).await?;

    Ok(ids.into_iter().collect())
}
