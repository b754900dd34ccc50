//! SQLite persistence for newsletters: database bootstrap, table DDL, and the repository.

use crate::model::{NewNewsletter, Newsletter, NewsletterPatch};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

const NEWSLETTER_COLUMNS: &str = "id, title, body, published_at";

/// Persistence operations the HTTP layer depends on.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Newsletter>, sqlx::Error>;
    async fn get(&self, id: i64) -> Result<Option<Newsletter>, sqlx::Error>;
    async fn create(&self, new: &NewNewsletter) -> Result<Newsletter, sqlx::Error>;
    /// Returns `None` when no record has this id.
    async fn update(&self, id: i64, patch: &NewsletterPatch) -> Result<Option<Newsletter>, sqlx::Error>;
    /// Returns whether a record was deleted.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the SQLite database file if it does not exist yet. No-op for in-memory URLs.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if is_in_memory(database_url) {
        return Ok(());
    }
    if !Sqlite::database_exists(database_url).await? {
        tracing::info!(database_url, "creating database");
        Sqlite::create_database(database_url).await?;
    }
    Ok(())
}

/// Open a pool. In-memory databases live only as long as their connection, so they get a
/// single connection that is never reaped.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };
    options.connect(database_url).await
}

/// Create the newsletters table if not exists.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS newsletters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            published_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Clone)]
pub struct SqliteNewsletterStore {
    pool: SqlitePool,
}

impl SqliteNewsletterStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteNewsletterStore { pool }
    }

    /// Ensure the table exists, then wrap the pool.
    pub async fn open(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        ensure_tables(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl NewsletterRepository for SqliteNewsletterStore {
    async fn list(&self) -> Result<Vec<Newsletter>, sqlx::Error> {
        let sql = format!("SELECT {} FROM newsletters ORDER BY id", NEWSLETTER_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Newsletter>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    async fn get(&self, id: i64) -> Result<Option<Newsletter>, sqlx::Error> {
        let sql = format!("SELECT {} FROM newsletters WHERE id = ?", NEWSLETTER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Newsletter>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, new: &NewNewsletter) -> Result<Newsletter, sqlx::Error> {
        let sql = format!(
            "INSERT INTO newsletters (title, body, published_at) VALUES (?, ?, ?) RETURNING {}",
            NEWSLETTER_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Newsletter>(&sql)
            .bind(&new.title)
            .bind(&new.body)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: i64, patch: &NewsletterPatch) -> Result<Option<Newsletter>, sqlx::Error> {
        // Absent fields bind NULL and keep the stored value.
        let sql = format!(
            r#"
            UPDATE newsletters
            SET title = COALESCE(?, title),
                body = COALESCE(?, body),
                published_at = COALESCE(?, published_at)
            WHERE id = ?
            RETURNING {}
            "#,
            NEWSLETTER_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Newsletter>(&sql)
            .bind(patch.title.as_deref())
            .bind(patch.body.as_deref())
            .bind(patch.published_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        tracing::debug!(id, "delete newsletter");
        let result = sqlx::query("DELETE FROM newsletters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
