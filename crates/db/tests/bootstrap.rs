use sqlx::PgPool;

/// Connect, migrate, and confirm every catalogue table exists and starts empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    grandline_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "manga",
        "devil_fruit_types",
        "haki_types",
        "crews",
        "boats",
        "regions",
        "islands",
        "ranks",
        "weapons",
        "devil_fruits",
        "haki",
        "characters",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Re-running migrations against an up-to-date schema is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    grandline_db::run_migrations(&pool).await.unwrap();
}
