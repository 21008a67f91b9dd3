use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::GeminiClient;
use crate::utils::AppError;

/// 应用状态 - 持有所有共享依赖的单例引用
///
/// 使用 Clone 浅拷贝在请求间共享，内部句柄均为引用计数。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | gemini | GeminiClient | Gemini REST 客户端 |
#[derive(Clone)]
pub struct AppState {
    /// 服务配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// Gemini 客户端
    pub gemini: GeminiClient,
}

impl AppState {
    /// 初始化应用状态
    ///
    /// 启动时打开数据库并构建 Gemini 客户端，之后全程共享，
    /// 请求处理中不再重新获取任何外部句柄。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.db_path, &config.db_name).await?;
        let gemini = GeminiClient::new(config);

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            gemini,
        })
    }
}
