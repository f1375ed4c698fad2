//! Scoped bulk writes against a single table.
//!
//! A [`BulkWriter`] wraps one database transaction. Rows are buffered and
//! sent as multi-row `INSERT` statements; nothing is visible to other
//! connections until [`BulkWriter::commit`] succeeds. Dropping the writer
//! early (including through `?` on an error) rolls everything back.

use crate::db::schema::Table;
use crate::error::IngestError;
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

/// Upper bound on bind parameters in a single SQLite statement.
const SQLITE_MAX_VARIABLES: usize = 32_766;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Null,
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// Values in the table's column order.
pub type Row = Vec<SqlValue>;

pub struct BulkWriter<'t> {
    table: &'t Table,
    tx: Transaction<'static, Sqlite>,
    buffer: Vec<Row>,
    rows_per_statement: usize,
    written: usize,
}

impl<'t> BulkWriter<'t> {
    pub async fn open(
        pool: &SqlitePool,
        table: &'t Table,
        chunk_size: usize,
    ) -> Result<BulkWriter<'t>, IngestError> {
        let tx = pool.begin().await?;
        let max_rows = SQLITE_MAX_VARIABLES / table.columns.len().max(1);
        let rows_per_statement = chunk_size.clamp(1, max_rows);

        debug!(
            "Opened bulk writer for {} ({} rows per statement)",
            table.name, rows_per_statement
        );

        Ok(Self {
            table,
            tx,
            buffer: Vec::with_capacity(rows_per_statement),
            rows_per_statement,
            written: 0,
        })
    }

    pub async fn write_row(&mut self, row: Row) -> Result<(), IngestError> {
        if row.len() != self.table.columns.len() {
            return Err(IngestError::RowShape {
                table: self.table.name,
                expected: self.table.columns.len(),
                actual: row.len(),
            });
        }

        self.buffer.push(row);
        if self.buffer.len() >= self.rows_per_statement {
            self.flush().await?;
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), IngestError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let table = self.table;
        let rows = std::mem::take(&mut self.buffer);
        let count = rows.len();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(table.insert_prefix());
        builder.push_values(rows, |mut values, row| {
            for value in row {
                match value {
                    SqlValue::Text(text) => {
                        values.push_bind(text);
                    }
                    SqlValue::Integer(number) => {
                        values.push_bind(number);
                    }
                    SqlValue::Null => {
                        values.push_bind(None::<String>);
                    }
                }
            }
        });

        builder
            .build()
            .execute(&mut *self.tx)
            .await
            .map_err(|e| IngestError::from_write(table.name, e))?;

        self.written += count;
        debug!("Flushed {} rows into {}", count, table.name);
        Ok(())
    }

    /// Flush any buffered rows and make the whole session visible at once.
    pub async fn commit(mut self) -> Result<usize, IngestError> {
        self.flush().await?;
        self.tx.commit().await?;

        info!("Committed {} rows into {}", self.written, self.table.name);
        Ok(self.written)
    }
}
