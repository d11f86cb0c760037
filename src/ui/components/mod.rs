//! GUI组件模块 - 包含各种UI组件的实现

pub mod adapter_form;
pub mod app_renderer;
pub mod favorites_list;

// 重新导出主要组件
pub use adapter_form::render_adapter_form;
pub use app_renderer::{AppRenderer, UserAction};
pub use favorites_list::render_favorites_list;
