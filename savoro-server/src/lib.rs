//! SavoroAI Server - 数字菜单后端
//!
//! # 架构概述
//!
//! 为餐厅数字菜单前端提供以下核心功能：
//!
//! - **HTTP API** (`api`): 菜单、菜品、连通性检查、AI 生成、二维码接口
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **服务** (`services`): Gemini REST 客户端、二维码渲染
//!
//! # 模块结构
//!
//! ```text
//! savoro-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # Gemini、二维码
//! ├── utils/         # 错误、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{AppState, Config, Server, build_app};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
   _____
  / ___/____ __   ______  _________
  \__ \/ __ `/ | / / __ \/ ___/ __ \
 ___/ / /_/ /| |/ / /_/ / /  / /_/ /
/____/\__,_/ |___/\____/_/   \____/
                              AI Menu
    "#
    );
}
