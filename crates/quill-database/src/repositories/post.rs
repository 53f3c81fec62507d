//! Post repository implementation.

use sqlx::SqlitePool;

use quill_core::error::{AppError, ErrorKind};
use quill_core::result::AppResult;
use quill_entity::post::Post;

/// Repository for the append-only post collection.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a post. The record is durable once this returns.
    ///
    /// The author may be blank; body validation happens at the form
    /// boundary before this is called.
    pub async fn create(&self, author: &str, body: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO posts (author, body) VALUES (?, ?)")
            .bind(author)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))?;
        Ok(())
    }

    /// List all posts in insertion order.
    pub async fn list_all(&self) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT author, body FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Draw up to `n` posts uniformly at random without replacement.
    ///
    /// Ordering among the returned posts is itself randomized and not
    /// reproducible across calls. If fewer than `n` posts exist, all of
    /// them are returned.
    pub async fn sample(&self, n: i64) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT author, body FROM posts ORDER BY RANDOM() LIMIT ?")
            .bind(n)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sample posts", e))
    }

    /// Count all posts.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))
    }
}
