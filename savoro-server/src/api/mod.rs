//! API 路由模块
//!
//! # 结构
//!
//! - [`root`] - 服务横幅
//! - [`health`] - 健康检查
//! - [`status`] - 连通性检查记录
//! - [`menus`] - 菜单管理接口
//! - [`dishes`] - 菜品管理接口
//! - [`generation`] - AI 文案与图片生成接口
//! - [`qr`] - 菜单二维码接口

pub mod health;
pub mod root;

// Data models API
pub mod dishes;
pub mod menus;
pub mod status;

// AI and rendering API
pub mod generation;
pub mod qr;
