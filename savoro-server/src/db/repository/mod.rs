//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod dish;
pub mod menu;
pub mod status_check;

// Re-exports
pub use dish::DishRepository;
pub use menu::MenuRepository;
pub use status_check::StatusCheckRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;
use uuid::Uuid;

/// List queries stop after this many records.
pub const LIST_LIMIT: usize = 1000;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 对外 API 一律使用纯字符串 id（不带表名前缀）
// =============================================================================
//
//   - 新建记录: let key = new_record_key();  // 32 位十六进制
//   - CRUD: db.select((TABLE, key)) / db.delete((TABLE, key))
//   - 序列化: 模型通过 option_record_key 只输出 key 部分
//
// 路径参数中的 id 直接作为 record key 使用，查不到即 404。

/// Generate a record key for a new document.
pub fn new_record_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
