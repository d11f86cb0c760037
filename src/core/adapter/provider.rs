//! 网卡配置接口抽象
//!
//! 所有调用都是同步阻塞的，直到系统返回为止。

use super::types::AdapterSnapshot;
use crate::app::error::types::Result;

/// 系统返回码，0 表示成功
pub type StatusCode = u32;

/// 系统网卡配置能力
///
/// 网卡按描述字符串识别，只涉及启用了IP的网卡。
/// 设置类方法返回系统的原始返回码；无法调用系统接口时返回 `Bridge` 错误。
pub trait AdapterConfigProvider {
    /// 枚举启用了IP的网卡描述
    fn list_adapters(&self) -> Result<Vec<String>>;

    /// 读取网卡当前配置，找不到时返回 `Ok(None)`
    fn read_config(
        &self,
        description: &str,
    ) -> Result<Option<AdapterSnapshot>>;

    /// 设置静态IP和子网掩码
    fn enable_static(
        &self,
        description: &str,
        ip: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode>;

    /// 设置默认网关列表
    fn set_gateways(
        &self,
        description: &str,
        gateways: &[String],
    ) -> Result<StatusCode>;

    /// 设置DNS服务器搜索顺序
    fn set_dns_servers(
        &self,
        description: &str,
        servers: &[String],
    ) -> Result<StatusCode>;

    /// 切换到DHCP
    fn enable_dhcp(
        &self,
        description: &str,
    ) -> Result<StatusCode>;
}

impl<P: AdapterConfigProvider + ?Sized> AdapterConfigProvider
    for &P
{
    fn list_adapters(&self) -> Result<Vec<String>> {
        (**self).list_adapters()
    }

    fn read_config(
        &self,
        description: &str,
    ) -> Result<Option<AdapterSnapshot>> {
        (**self).read_config(description)
    }

    fn enable_static(
        &self,
        description: &str,
        ip: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode> {
        (**self).enable_static(description, ip, subnet_mask)
    }

    fn set_gateways(
        &self,
        description: &str,
        gateways: &[String],
    ) -> Result<StatusCode> {
        (**self).set_gateways(description, gateways)
    }

    fn set_dns_servers(
        &self,
        description: &str,
        servers: &[String],
    ) -> Result<StatusCode> {
        (**self).set_dns_servers(description, servers)
    }

    fn enable_dhcp(
        &self,
        description: &str,
    ) -> Result<StatusCode> {
        (**self).enable_dhcp(description)
    }
}
