use super::serde_helpers::option_record_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 健康检查记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_record_key"
    )]
    pub id: Option<RecordId>,
    /// 客户端名称
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// 创建健康检查记录请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(payload: StatusCheckCreate) -> Self {
        Self {
            id: None,
            client_name: payload.client_name,
            timestamp: Utc::now(),
        }
    }
}
