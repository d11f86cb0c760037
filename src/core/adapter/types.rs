//! 网卡配置相关类型

use serde::{Deserialize, Serialize};
use std::fmt;

use super::provider::StatusCode;
use crate::app::error::types::{IpEditError, Result};
use crate::utils::helpers::join_list;

/// 从系统读取到的网卡IPv4配置，仅用于填充表单
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdapterSnapshot {
    /// 网卡描述，即网卡的标识
    pub description: String,
    /// 第一个IP地址
    pub ip: String,
    /// 第一个子网掩码
    pub subnet_mask: String,
    /// 默认网关列表
    pub gateways: Vec<String>,
    /// DNS服务器搜索顺序
    pub dns_servers: Vec<String>,
}

/// 表单上的四个字段
///
/// 网关和DNS保持逗号分隔的原始文本，应用时再拆分
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFields {
    /// IP地址
    pub ip: String,
    /// 子网掩码
    pub subnet: String,
    /// 逗号分隔的默认网关
    pub gateway: String,
    /// 逗号分隔的DNS服务器
    pub dns: String,
}

impl ConfigFields {
    /// 创建表单字段，去除首尾空白
    pub fn new(
        ip: impl AsRef<str>,
        subnet: impl AsRef<str>,
        gateway: impl AsRef<str>,
        dns: impl AsRef<str>,
    ) -> Self {
        Self {
            ip: ip.as_ref().trim().to_string(),
            subnet: subnet.as_ref().trim().to_string(),
            gateway: gateway.as_ref().trim().to_string(),
            dns: dns.as_ref().trim().to_string(),
        }
    }

    /// 返回去除首尾空白后的副本
    pub fn trimmed(&self) -> Self {
        Self::new(&self.ip, &self.subnet, &self.gateway, &self.dns)
    }

    /// 四个字段是否都为空
    pub fn is_empty(&self) -> bool {
        self.ip.is_empty()
            && self.subnet.is_empty()
            && self.gateway.is_empty()
            && self.dns.is_empty()
    }
}

impl From<&AdapterSnapshot> for ConfigFields {
    /// 只取第一个地址和掩码，网关和DNS跳过空值后用逗号连接
    fn from(snapshot: &AdapterSnapshot) -> Self {
        Self {
            ip: snapshot.ip.clone(),
            subnet: snapshot.subnet_mask.clone(),
            gateway: join_list(&snapshot.gateways),
            dns: join_list(&snapshot.dns_servers),
        }
    }
}

/// 应用序列中的步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyStep {
    /// 静态IP和子网掩码
    Address,
    /// 默认网关
    Gateway,
    /// DNS服务器
    Dns,
    /// 切换到DHCP
    Dhcp,
}

impl fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyStep::Address => write!(f, "Set IP address"),
            ApplyStep::Gateway => write!(f, "Set gateway"),
            ApplyStep::Dns => write!(f, "Set DNS servers"),
            ApplyStep::Dhcp => write!(f, "Enable DHCP"),
        }
    }
}

/// 一次应用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// 所有字段为空，未调用系统接口
    NothingToApply,
    /// 按顺序成功执行的步骤
    Applied {
        /// 已成功的步骤
        steps: Vec<ApplyStep>,
    },
}

impl ApplyOutcome {
    /// 实际执行过的步骤
    pub fn steps(&self) -> &[ApplyStep] {
        match self {
            ApplyOutcome::NothingToApply => &[],
            ApplyOutcome::Applied { steps } => steps,
        }
    }
}

/// 切换DHCP的结果
///
/// 无论系统返回码是否为0，都会重新读取一次网卡配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpRefresh {
    /// 重新读取到的配置，网卡已消失时为 `None`
    pub snapshot: Option<AdapterSnapshot>,
    /// `EnableDHCP` 的返回码
    pub status: StatusCode,
}

impl DhcpRefresh {
    /// 返回码非0时转换为 `Apply` 错误
    pub fn check(&self) -> Result<()> {
        if self.status != 0 {
            return Err(IpEditError::Apply {
                step: ApplyStep::Dhcp,
                code: self.status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_to_fields_skips_empty_entries() {
        let snapshot = AdapterSnapshot {
            description: "Intel(R) Ethernet".into(),
            ip: "192.168.1.20".into(),
            subnet_mask: "255.255.255.0".into(),
            gateways: vec!["192.168.1.1".into(), "".into()],
            dns_servers: vec![
                "8.8.8.8".into(),
                "1.1.1.1".into(),
            ],
        };
        let fields = ConfigFields::from(&snapshot);
        assert_eq!(fields.gateway, "192.168.1.1");
        assert_eq!(fields.dns, "8.8.8.8,1.1.1.1");
        assert_eq!(fields.subnet, "255.255.255.0");
    }

    #[test]
    fn empty_fields_detected_after_trim() {
        assert!(ConfigFields::new(" ", "", "\t", "").is_empty());
        assert!(!ConfigFields::new("", "", "", "8.8.8.8")
            .is_empty());
    }

    #[test]
    fn dhcp_refresh_reports_nonzero_status() {
        let ok = DhcpRefresh {
            snapshot: None,
            status: 0,
        };
        assert!(ok.check().is_ok());

        let failed = DhcpRefresh {
            snapshot: Some(AdapterSnapshot::default()),
            status: 84,
        };
        assert!(matches!(
            failed.check(),
            Err(IpEditError::Apply {
                step: ApplyStep::Dhcp,
                code: 84
            })
        ));
    }
}
