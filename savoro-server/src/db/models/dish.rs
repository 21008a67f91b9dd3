use super::serde_helpers::option_record_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 菜品数据模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_record_key"
    )]
    pub id: Option<RecordId>,
    /// 所属菜单 id（纯字符串，不校验菜单是否存在）
    pub menu_id: String,
    /// 菜品名称
    pub name: String,
    /// 菜品描述
    pub description: String,
    /// 价格
    pub price: f64,
    /// 分类（如 Appetizers、Main Courses）
    pub category: String,
    /// 菜品图片（通常为 data URI，可为空字符串）
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// 创建菜品请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub menu_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// 更新菜品请求，未出现的字段保持原值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl DishUpdate {
    /// 是否没有任何待更新字段
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }
}

impl From<DishCreate> for Dish {
    fn from(payload: DishCreate) -> Self {
        Self {
            id: None,
            menu_id: payload.menu_id,
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            price: payload.price,
            category: payload.category,
            image_url: payload.image_url.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_applies_defaults() {
        let payload: DishCreate = serde_json::from_value(serde_json::json!({
            "menu_id": "m1",
            "name": "Truffle Fries",
            "price": 8.5,
            "category": "Appetizers"
        }))
        .unwrap();
        let dish = Dish::from(payload);

        assert_eq!(dish.description, "");
        assert_eq!(dish.image_url, "");
        assert_eq!(dish.price, 8.5);
    }

    #[test]
    fn update_skips_unset_fields() {
        let update = DishUpdate {
            price: Some(9.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value.get("price").unwrap().as_f64(), Some(9.0));
        assert!(!update.is_empty());
    }

    #[test]
    fn empty_update_detected() {
        let update: DishUpdate = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({})
        );
    }
}
