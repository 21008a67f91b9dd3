use super::serde_helpers::option_record_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 菜单数据模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_record_key"
    )]
    pub id: Option<RecordId>,
    /// 餐厅名称
    pub cafe_name: String,
    /// 餐厅简介
    pub cafe_description: String,
    /// 主题色
    pub theme_color: String,
    pub created_at: DateTime<Utc>,
}

/// 创建菜单请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub cafe_name: String,
    #[serde(default)]
    pub cafe_description: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
}

impl From<MenuCreate> for Menu {
    fn from(payload: MenuCreate) -> Self {
        Self {
            id: None,
            cafe_name: payload.cafe_name,
            cafe_description: payload.cafe_description.unwrap_or_default(),
            theme_color: payload
                .theme_color
                .unwrap_or_else(|| "#FF6B6B".to_string()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_applies_defaults() {
        let payload: MenuCreate =
            serde_json::from_value(serde_json::json!({"cafe_name": "Cafe Luna"})).unwrap();
        let menu = Menu::from(payload);

        assert_eq!(menu.cafe_name, "Cafe Luna");
        assert_eq!(menu.cafe_description, "");
        assert_eq!(menu.theme_color, "#FF6B6B");
        assert!(menu.id.is_none());
    }

    #[test]
    fn create_keeps_provided_fields() {
        let payload: MenuCreate = serde_json::from_value(serde_json::json!({
            "cafe_name": "Cafe Luna",
            "cafe_description": "Seaside brunch spot",
            "theme_color": "#22C55E"
        }))
        .unwrap();
        let menu = Menu::from(payload);

        assert_eq!(menu.cafe_description, "Seaside brunch spot");
        assert_eq!(menu.theme_color, "#22C55E");
    }

    #[test]
    fn serialized_menu_skips_missing_id() {
        let menu = Menu::from(
            serde_json::from_value::<MenuCreate>(serde_json::json!({"cafe_name": "Cafe Luna"}))
                .unwrap(),
        );
        let value = serde_json::to_value(&menu).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").unwrap().is_string());
    }
}
