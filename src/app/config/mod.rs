//! 配置管理模块
//!
//! 提供收藏夹文档的加载、保存和修改功能

pub mod favorites;
pub mod paths;
pub mod store;
