//! 网卡配置接口
//!
//! `CimAdapterProvider` 访问真实系统，`MemoryAdapterProvider` 用于测试。

pub mod cim;
pub mod memory;
pub mod provider;
pub mod types;

pub use cim::CimAdapterProvider;
pub use memory::{AdapterCall, MemoryAdapterProvider};
pub use provider::{AdapterConfigProvider, StatusCode};
pub use types::{
    AdapterSnapshot, ApplyOutcome, ApplyStep, ConfigFields,
    DhcpRefresh,
};
