//! StatusCheck Repository

use super::{BaseRepository, LIST_LIMIT, RepoError, RepoResult, new_record_key};
use crate::db::models::{StatusCheck, StatusCheckCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "status_checks";

#[derive(Clone)]
pub struct StatusCheckRepository {
    base: BaseRepository,
}

impl StatusCheckRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Record a status check
    pub async fn create(&self, data: StatusCheckCreate) -> RepoResult<StatusCheck> {
        let check = StatusCheck::from(data);
        let key = new_record_key();

        let created: Option<StatusCheck> = self
            .base
            .db()
            .create((TABLE, key.as_str()))
            .content(check)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create status check".to_string()))
    }

    /// Find all status checks (natural store order, capped)
    pub async fn find_all(&self) -> RepoResult<Vec<StatusCheck>> {
        let checks: Vec<StatusCheck> = self
            .base
            .db()
            .query(format!("SELECT * FROM {TABLE} LIMIT {LIST_LIMIT}"))
            .await?
            .take(0)?;
        Ok(checks)
    }
}
