//! UI模块 - 用户界面相关功能

pub mod app;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod fonts;

use crate::app::config::store::FavoritesStore;
use crate::app::error::types::Result;

/// 启动 GUI 应用程序
pub fn run_gui(store: FavoritesStore) -> Result<()> {
    app::run_gui(store)
}
