//! 网卡IP快捷修改工具库
//!
//! 查看和修改单台主机上网卡的IPv4配置，并维护一份本地收藏夹
//!
//! ## 功能特性
//!
//! - 枚举启用了IP的网卡，读取IP/掩码/网关/DNS
//! - 按 地址 → 网关 → DNS 的顺序应用配置，任一步失败即停止
//! - 一键切换到DHCP
//! - 收藏夹与窗口布局保存在同一个 JSON 文件中
//!
//! ## 使用示例
//!
//! ```no_run
//! use ipedit::core::adapter::{CimAdapterProvider, ConfigFields};
//! use ipedit::core::services::ConfigService;
//!
//! let service = ConfigService::new(CimAdapterProvider::new());
//! let adapters = service.list_adapters()?;
//! if let Some(adapter) = adapters.first() {
//!     let fields = ConfigFields::new("", "", "192.168.1.1", "8.8.8.8, 1.1.1.1");
//!     service.apply(adapter, &fields)?;
//! }
//! # Ok::<(), ipedit::IpEditError>(())
//! ```

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

// 重新导出主要功能
pub use app::config::favorites::{
    FavoriteEntry, FavoritesDocument, PanelLayout, WindowLayout,
};
pub use app::config::store::{
    add_favorite, delete_favorite, FavoritesStore,
};
pub use app::error::types::{IpEditError, Result};
pub use core::adapter::{
    AdapterConfigProvider, AdapterSnapshot, ApplyOutcome,
    ApplyStep, ConfigFields, DhcpRefresh,
};
pub use core::services::ConfigService;
