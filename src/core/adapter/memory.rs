//! 内存中的网卡配置实现
//!
//! 不接触真实网卡，记录每一次调用，并可预设各步骤的返回码。

use std::cell::RefCell;
use std::collections::HashMap;

use super::provider::{AdapterConfigProvider, StatusCode};
use super::types::{AdapterSnapshot, ApplyStep};
use crate::app::error::types::{IpEditError, Result};

/// 一次接口调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCall {
    /// 枚举网卡
    List,
    /// 读取配置
    Read(String),
    /// 设置静态地址
    EnableStatic {
        /// 网卡描述
        description: String,
        /// IP地址
        ip: String,
        /// 子网掩码
        subnet_mask: String,
    },
    /// 设置网关
    SetGateways {
        /// 网卡描述
        description: String,
        /// 网关列表
        gateways: Vec<String>,
    },
    /// 设置DNS
    SetDnsServers {
        /// 网卡描述
        description: String,
        /// DNS服务器列表
        servers: Vec<String>,
    },
    /// 切换DHCP
    EnableDhcp(String),
}

impl AdapterCall {
    /// 该调用对应的应用步骤，枚举和读取返回 `None`
    pub fn step(&self) -> Option<ApplyStep> {
        match self {
            AdapterCall::List | AdapterCall::Read(_) => None,
            AdapterCall::EnableStatic { .. } => {
                Some(ApplyStep::Address)
            }
            AdapterCall::SetGateways { .. } => {
                Some(ApplyStep::Gateway)
            }
            AdapterCall::SetDnsServers { .. } => {
                Some(ApplyStep::Dns)
            }
            AdapterCall::EnableDhcp(_) => Some(ApplyStep::Dhcp),
        }
    }
}

/// 内存网卡配置
#[derive(Debug, Default)]
pub struct MemoryAdapterProvider {
    adapters: RefCell<Vec<AdapterSnapshot>>,
    status_codes: HashMap<ApplyStep, StatusCode>,
    dhcp_snapshot: Option<AdapterSnapshot>,
    calls: RefCell<Vec<AdapterCall>>,
}

impl MemoryAdapterProvider {
    /// 创建空实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个网卡
    pub fn with_adapter(self, snapshot: AdapterSnapshot) -> Self {
        self.adapters.borrow_mut().push(snapshot);
        self
    }

    /// 预设某一步骤的返回码
    pub fn with_status(
        mut self,
        step: ApplyStep,
        code: StatusCode,
    ) -> Self {
        self.status_codes.insert(step, code);
        self
    }

    /// 切换DHCP后网卡呈现的配置
    pub fn with_dhcp_snapshot(
        mut self,
        snapshot: AdapterSnapshot,
    ) -> Self {
        self.dhcp_snapshot = Some(snapshot);
        self
    }

    /// 移除网卡，模拟枚举后网卡消失
    pub fn remove_adapter(&self, description: &str) {
        self.adapters
            .borrow_mut()
            .retain(|a| a.description != description);
    }

    /// 全部调用记录
    pub fn calls(&self) -> Vec<AdapterCall> {
        self.calls.borrow().clone()
    }

    /// 按顺序执行过的设置步骤
    pub fn applied_steps(&self) -> Vec<ApplyStep> {
        self.calls
            .borrow()
            .iter()
            .filter_map(AdapterCall::step)
            .collect()
    }

    /// 当前保存的网卡配置
    pub fn snapshot(
        &self,
        description: &str,
    ) -> Option<AdapterSnapshot> {
        self.adapters
            .borrow()
            .iter()
            .find(|a| a.description == description)
            .cloned()
    }

    fn record(&self, call: AdapterCall) {
        self.calls.borrow_mut().push(call);
    }

    fn status(&self, step: ApplyStep) -> StatusCode {
        self.status_codes.get(&step).copied().unwrap_or(0)
    }

    /// 返回码为0时修改对应网卡，网卡不存在时返回 `AdapterNotFound`
    fn update(
        &self,
        description: &str,
        step: ApplyStep,
        change: impl FnOnce(&mut AdapterSnapshot),
    ) -> Result<StatusCode> {
        let mut adapters = self.adapters.borrow_mut();
        let adapter = adapters
            .iter_mut()
            .find(|a| a.description == description)
            .ok_or_else(|| {
                IpEditError::AdapterNotFound(
                    description.to_string(),
                )
            })?;
        let code = self.status(step);
        if code == 0 {
            change(adapter);
        }
        Ok(code)
    }
}

impl AdapterConfigProvider for MemoryAdapterProvider {
    fn list_adapters(&self) -> Result<Vec<String>> {
        self.record(AdapterCall::List);
        Ok(self
            .adapters
            .borrow()
            .iter()
            .map(|a| a.description.clone())
            .collect())
    }

    fn read_config(
        &self,
        description: &str,
    ) -> Result<Option<AdapterSnapshot>> {
        self.record(AdapterCall::Read(description.to_string()));
        Ok(self.snapshot(description))
    }

    fn enable_static(
        &self,
        description: &str,
        ip: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode> {
        self.record(AdapterCall::EnableStatic {
            description: description.to_string(),
            ip: ip.to_string(),
            subnet_mask: subnet_mask.to_string(),
        });
        self.update(description, ApplyStep::Address, |a| {
            a.ip = ip.to_string();
            a.subnet_mask = subnet_mask.to_string();
        })
    }

    fn set_gateways(
        &self,
        description: &str,
        gateways: &[String],
    ) -> Result<StatusCode> {
        self.record(AdapterCall::SetGateways {
            description: description.to_string(),
            gateways: gateways.to_vec(),
        });
        self.update(description, ApplyStep::Gateway, |a| {
            a.gateways = gateways.to_vec();
        })
    }

    fn set_dns_servers(
        &self,
        description: &str,
        servers: &[String],
    ) -> Result<StatusCode> {
        self.record(AdapterCall::SetDnsServers {
            description: description.to_string(),
            servers: servers.to_vec(),
        });
        self.update(description, ApplyStep::Dns, |a| {
            a.dns_servers = servers.to_vec();
        })
    }

    fn enable_dhcp(
        &self,
        description: &str,
    ) -> Result<StatusCode> {
        self.record(AdapterCall::EnableDhcp(
            description.to_string(),
        ));
        let leased = self.dhcp_snapshot.clone();
        self.update(description, ApplyStep::Dhcp, |a| {
            if let Some(leased) = leased {
                *a = AdapterSnapshot {
                    description: a.description.clone(),
                    ..leased
                };
            }
        })
    }
}
