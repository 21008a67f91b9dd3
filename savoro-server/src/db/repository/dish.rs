//! Dish Repository

use super::{BaseRepository, LIST_LIMIT, RepoError, RepoResult, new_record_key};
use crate::db::models::{Dish, DishCreate, DishUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "dishes";

#[derive(Clone)]
pub struct DishRepository {
    base: BaseRepository,
}

impl DishRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new dish with a generated record key
    ///
    /// menu_id 不做存在性校验，允许悬挂引用。
    pub async fn create(&self, data: DishCreate) -> RepoResult<Dish> {
        let dish = Dish::from(data);
        let key = new_record_key();

        let created: Option<Dish> = self
            .base
            .db()
            .create((TABLE, key.as_str()))
            .content(dish)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dish".to_string()))
    }

    /// Find dish by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Dish>> {
        let dish: Option<Dish> = self.base.db().select((TABLE, id)).await?;
        Ok(dish)
    }

    /// Find all dishes belonging to a menu (capped)
    pub async fn find_by_menu(&self, menu_id: &str) -> RepoResult<Vec<Dish>> {
        let menu_id_owned = menu_id.to_string();
        let dishes: Vec<Dish> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {TABLE} WHERE menu_id = $menu_id LIMIT {LIST_LIMIT}"
            ))
            .bind(("menu_id", menu_id_owned))
            .await?
            .take(0)?;
        Ok(dishes)
    }

    /// Merge the supplied fields into an existing dish
    ///
    /// 空 patch 不写库，直接返回当前记录。
    pub async fn update(&self, id: &str, data: DishUpdate) -> RepoResult<Dish> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dish {} not found", id)))?;

        if data.is_empty() {
            return Ok(existing);
        }

        let updated: Option<Dish> = self.base.db().update((TABLE, id)).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Dish {} not found", id)))
    }

    /// Hard delete a dish, returning the removed record
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Dish>> {
        let deleted: Option<Dish> = self.base.db().delete((TABLE, id)).await?;
        Ok(deleted)
    }
}
