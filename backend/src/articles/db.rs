//! Article database operations
//!
//! Handles all database interactions for the `articles` table.

use crate::articles::models::{Article, ArticleId, ArticleUpdate, NewArticle};
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const ARTICLE_COLUMNS: &str = "id, title, content, style, date_published";

/// Data access service for articles
pub struct ArticlesService {
    pool: SqlitePool,
}

impl ArticlesService {
    /// Open (creating if missing) the database and bootstrap the schema
    ///
    /// # Arguments
    /// * `db_url` - `sqlite:` connection string or plain path to the database file
    /// * `max_connections` - Upper bound on pooled connections
    pub async fn connect(db_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let connection_string = if db_url.starts_with("sqlite:") {
            db_url.to_string()
        } else {
            format!("sqlite:{}", db_url)
        };

        // Ensure parent directory exists for file-backed databases
        let file_path = connection_string
            .trim_start_matches("sqlite:")
            .trim_start_matches("//")
            .split('?')
            .next()
            .unwrap_or_default();
        if !file_path.starts_with(":memory:") {
            if let Some(parent) = Path::new(file_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        AppError::Internal(anyhow::anyhow!(
                            "Failed to create db directory: {}",
                            e
                        ))
                    })?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::storage("Failed to connect to database", e))?;

        info!("Connected to SQLite database at: {}", db_url);

        let service = Self::from_pool(pool);
        service.ensure_schema().await?;

        Ok(service)
    }

    /// Wrap an existing pool without touching the schema
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the articles table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        info!("Bootstrapping articles schema...");

        let schema_sql = include_str!("../../migrations/001_create_articles.sql");

        // Drop comment-only lines and inline comments
        let mut cleaned_sql = String::new();
        for line in schema_sql.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("--") {
                continue;
            }
            let without_comments = match trimmed.find("--") {
                Some(pos) => &trimmed[..pos],
                None => trimmed,
            };
            cleaned_sql.push_str(without_comments.trim());
            cleaned_sql.push(' ');
        }

        for statement in cleaned_sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::storage("Schema bootstrap failed", e))?;
        }

        info!("Articles schema ready");
        Ok(())
    }

    /// Get all articles in storage order
    pub async fn list(&self) -> Result<Vec<Article>, AppError> {
        let sql = format!("SELECT {} FROM articles", ARTICLE_COLUMNS);
        sqlx::query_as::<_, Article>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage("Failed to fetch articles", e))
    }

    /// Get an article by ID
    pub async fn get_by_id(&self, id: ArticleId) -> Result<Option<Article>, AppError> {
        let sql = format!("SELECT {} FROM articles WHERE id = ?", ARTICLE_COLUMNS);
        sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage("Failed to fetch article", e))
    }

    /// Insert a new article and return the stored row
    pub async fn insert(&self, article: &NewArticle) -> Result<Article, AppError> {
        let sql = format!(
            "INSERT INTO articles (title, content, style) VALUES (?, ?, ?) RETURNING {}",
            ARTICLE_COLUMNS
        );

        let inserted = sqlx::query_as::<_, Article>(&sql)
            .bind(&article.title)
            .bind(&article.content)
            .bind(&article.style)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::storage("Failed to insert article", e))?;

        debug!("Inserted article: {}", inserted.id);
        Ok(inserted)
    }

    /// Update the provided columns of an article
    ///
    /// Returns the number of rows affected.
    pub async fn update(&self, id: ArticleId, changes: &ArticleUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE articles SET title = COALESCE(?, title), content = COALESCE(?, content), style = COALESCE(?, style) WHERE id = ?",
        )
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .bind(changes.style.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage("Failed to update article", e))?;

        debug!("Updated article: {}", id);
        Ok(result.rows_affected())
    }

    /// Delete an article
    ///
    /// Returns the number of rows affected.
    pub async fn delete(&self, id: ArticleId) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage("Failed to delete article", e))?;

        debug!("Deleted article: {}", id);
        Ok(result.rows_affected())
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
