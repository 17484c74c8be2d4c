use telemed::{DbPool, database, load_config};
use uuid::Uuid;

/// Set to run the PostgreSQL query tests against `TELEMED__DATABASE__*`.
pub const DATABASE_TESTS_ENV: &str = "TELEMED_TEST_DATABASE";

/// Test database wrapper for better test isolation
///
/// Every email written by a test starts with `test_{test_name}_`, and rows
/// carrying that prefix (plus rows referencing those users) are removed
/// when the wrapper is created, so reruns start clean and parallel tests
/// never see each other's data.
#[allow(dead_code)]
pub struct TestDb {
    pub pool: DbPool,
    test_prefix: String,
}

impl TestDb {
    /// Connects and migrates through the production code path.
    ///
    /// Returns `None` (and the calling test passes vacuously) unless
    /// `TELEMED_TEST_DATABASE` is set.
    ///
    /// # Example
    /// ```rust
    /// #[tokio::test]
    /// async fn test_create_user_query() {
    ///     let Some(test_db) = TestDb::new("test_create_user_query").await else {
    ///         return;
    ///     };
    ///     let mut conn = test_db.get_connection().await;
    ///     // ... test logic
    /// }
    /// ```
    pub async fn new(test_name: &str) -> Option<Self> {
        if std::env::var(DATABASE_TESTS_ENV).is_err() {
            eprintln!("skipping {test_name}: set {DATABASE_TESTS_ENV}=1 to run PostgreSQL tests");
            return None;
        }

        let config = load_config().expect("Failed to load config");
        let pool = database::connect(&config.database)
            .await
            .expect("Failed to connect to database");

        let test_db = Self {
            pool,
            test_prefix: format!("test_{}", test_name),
        };
        test_db.cleanup().await;

        Some(test_db)
    }

    pub async fn get_connection(&self) -> sqlx::pool::PoolConnection<sqlx::Postgres> {
        self.pool
            .acquire()
            .await
            .expect("Failed to get database connection")
    }

    /// A fresh email inside this test's namespace.
    pub fn email(&self) -> String {
        format!("{}_{}@example.com", self.test_prefix, Uuid::now_v7())
    }

    async fn cleanup(&self) {
        let pattern = format!("{}_%", self.test_prefix);
        let statements = [
            r#"DELETE FROM feedback WHERE doctor_id IN (SELECT id FROM users WHERE email LIKE $1)
               OR patient_id IN (SELECT id FROM users WHERE email LIKE $1)"#,
            r#"DELETE FROM appointments WHERE doctor_id IN (SELECT id FROM users WHERE email LIKE $1)
               OR patient_id IN (SELECT id FROM users WHERE email LIKE $1)"#,
            r#"DELETE FROM prescriptions WHERE patient_email LIKE $1
               OR doctor_id IN (SELECT id FROM users WHERE email LIKE $1)"#,
            "DELETE FROM contact_messages WHERE email LIKE $1",
            "DELETE FROM users WHERE email LIKE $1",
        ];

        for statement in statements {
            sqlx::query(statement)
                .bind(&pattern)
                .execute(&self.pool)
                .await
                .expect("Failed to cleanup test data");
        }
    }
}
