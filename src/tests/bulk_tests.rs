#[cfg(test)]
mod tests {
    use crate::db::{migration, query, BulkWriter, SqlValue, ACCOUNTS, GENESIS_BALANCES};
    use crate::error::IngestError;
    use crate::tests::memory_pool;
    use sqlx::Row as _;

    fn account_row(id: &str) -> Vec<SqlValue> {
        vec![id.into(), "test".into()]
    }

    #[tokio::test]
    async fn test_commit_makes_rows_visible() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 100).await.unwrap();
        writer.write_row(account_row("a1")).await.unwrap();
        writer.write_row(account_row("a2")).await.unwrap();
        let written = writer.commit().await.unwrap();

        assert_eq!(written, 2);
        let ids = query::select_ids(&pool, &ACCOUNTS).await.unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("a1") && ids.contains("a2"));
    }

    #[tokio::test]
    async fn test_rows_span_multiple_statements() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 2).await.unwrap();
        for i in 0..5 {
            writer.write_row(account_row(&format!("a{}", i))).await.unwrap();
        }
        assert_eq!(writer.commit().await.unwrap(), 5);

        let rows = query::select(&pool, &ACCOUNTS, &["id", "chain_id"], None)
            .await
            .unwrap();
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert_eq!(row.get::<String, _>("chain_id"), "test");
        }
    }

    #[tokio::test]
    async fn test_dropped_writer_rolls_back() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 1).await.unwrap();
        writer.write_row(account_row("a1")).await.unwrap();
        writer.write_row(account_row("a2")).await.unwrap();
        drop(writer);

        let ids = query::select_ids(&pool, &ACCOUNTS).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_rows_abort_whole_session() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        // Chunk size 1 commits each row to its own statement before the conflict
        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 1).await.unwrap();
        writer.write_row(account_row("a1")).await.unwrap();
        writer.write_row(account_row("a2")).await.unwrap();
        let result = writer.write_row(account_row("a1")).await;

        assert!(matches!(
            result,
            Err(IngestError::ConstraintViolation { table: "accounts", .. })
        ));
        drop(writer);

        let ids = query::select_ids(&pool, &ACCOUNTS).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_rows_fail_on_commit() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 100).await.unwrap();
        writer.write_row(account_row("a1")).await.unwrap();
        writer.write_row(account_row("a1")).await.unwrap();
        let result = writer.commit().await;

        assert!(matches!(result, Err(IngestError::ConstraintViolation { .. })));
        let ids = query::select_ids(&pool, &ACCOUNTS).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_missing_foreign_key_is_constraint_violation() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();
        migration::ensure_table(&pool, &GENESIS_BALANCES).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &GENESIS_BALANCES, 100).await.unwrap();
        writer
            .write_row(vec![
                "ghost-a-token".into(),
                "ghost".into(),
                "1".into(),
                "a-token".into(),
            ])
            .await
            .unwrap();
        let result = writer.commit().await;

        assert!(matches!(
            result,
            Err(IngestError::ConstraintViolation { table: "genesis_balances", .. })
        ));
    }

    #[tokio::test]
    async fn test_row_shape_is_checked() {
        let pool = memory_pool().await;
        migration::ensure_table(&pool, &ACCOUNTS).await.unwrap();

        let mut writer = BulkWriter::open(&pool, &ACCOUNTS, 100).await.unwrap();
        let result = writer.write_row(vec!["a1".into()]).await;

        assert!(matches!(
            result,
            Err(IngestError::RowShape {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_null_and_integer_values() {
        let pool = memory_pool().await;
        sqlx::query("CREATE TABLE samples (\"id\" TEXT PRIMARY KEY, \"n\" INTEGER, \"note\" TEXT)")
            .execute(&pool)
            .await
            .unwrap();

        const SAMPLES: crate::db::Table = crate::db::Table {
            name: "samples",
            columns: &[
                crate::db::Column::required("id", crate::db::ColumnType::Text),
                crate::db::Column::optional("n", crate::db::ColumnType::Integer),
                crate::db::Column::optional("note", crate::db::ColumnType::Text),
            ],
            primary_key: "id",
            indexes: &[],
        };

        let mut writer = BulkWriter::open(&pool, &SAMPLES, 10).await.unwrap();
        writer
            .write_row(vec!["s1".into(), 42i64.into(), None::<String>.into()])
            .await
            .unwrap();
        writer.commit().await.unwrap();

        let rows = query::select(&pool, &SAMPLES, &["n", "note"], Some("\"id\" = 's1'"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get::<i64, _>("n"), 42);
        assert_eq!(rows[0].get::<Option<String>, _>("note"), None);
    }
}
