//! 业务服务模块

pub mod config_service;

pub use config_service::ConfigService;
