//! 核心功能：网卡配置接口和应用流程

pub mod adapter;
pub mod services;
