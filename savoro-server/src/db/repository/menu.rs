//! Menu Repository

use super::{BaseRepository, LIST_LIMIT, RepoError, RepoResult, new_record_key};
use crate::db::models::{Menu, MenuCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menus";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new menu with a generated record key
    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let menu = Menu::from(data);
        let key = new_record_key();

        let created: Option<Menu> = self
            .base
            .db()
            .create((TABLE, key.as_str()))
            .content(menu)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }

    /// Find menu by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let menu: Option<Menu> = self.base.db().select((TABLE, id)).await?;
        Ok(menu)
    }

    /// Find all menus (natural store order, capped)
    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query(format!("SELECT * FROM {TABLE} LIMIT {LIST_LIMIT}"))
            .await?
            .take(0)?;
        Ok(menus)
    }
}
