use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Strings are TEXT everywhere.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "varchar columns found: {rows:?}");
}

/// References are plain indexed columns; nothing enforces them.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_foreign_key_constraints(pool: PgPool) {
    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type = 'FOREIGN KEY'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count.0, 0);
}

/// Every `*_id` reference column has an index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_columns_are_indexed(pool: PgPool) {
    let columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND column_name LIKE '%\\_id'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!columns.is_empty());
    for (table, column) in &columns {
        let indexed: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM pg_indexes
                 WHERE schemaname = 'public'
                   AND tablename = $1
                   AND indexdef LIKE '%(' || $2 || ')%'
             )",
        )
        .bind(table)
        .bind(column)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(indexed.0, "{table}.{column} should be indexed");
    }
}

/// The shared trigger bumps `updated_at` on every update.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger_fires(pool: PgPool) {
    let (id, created): (i64, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as("INSERT INTO weapons (name) VALUES ('Wado') RETURNING id, updated_at")
            .fetch_one(&pool)
            .await
            .unwrap();

    let (updated,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE weapons SET name = 'Shusui' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(updated >= created);
}
