//! Server Configuration
//!
//! 全部配置来自环境变量，.env 由入口先行加载。

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 监听端口
    pub http_port: u16,
    /// 嵌入式数据库路径
    pub db_path: String,
    /// 数据库名
    pub db_name: String,
    /// Gemini API key（未配置时生成接口返回 500）
    pub gemini_api_key: Option<String>,
    /// Gemini REST API 基地址
    pub gemini_base_url: String,
    /// 文案生成模型
    pub gemini_text_model: String,
    /// 图片生成模型
    pub gemini_image_model: String,
    /// 前端基地址，用于拼接二维码目标链接
    pub frontend_url: String,
    /// 允许的跨域来源，逗号分隔，"*" 表示全部放行
    pub cors_origins: String,
    /// 运行环境 development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "data/savoro.db".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "savoro".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            gemini_text_model: std::env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".into()),
            gemini_image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "imagen-3.0".into()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}
