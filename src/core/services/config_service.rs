//! 网卡配置服务
//!
//! 负责把表单字段按顺序应用到网卡：地址 → 网关 → DNS，任何一步失败即停止。

use crate::app::error::types::{IpEditError, Result};
use crate::core::adapter::{
    AdapterConfigProvider, AdapterSnapshot, ApplyOutcome,
    ApplyStep, ConfigFields, DhcpRefresh, StatusCode,
};
use crate::utils::helpers::split_list;

/// 网卡配置服务
pub struct ConfigService<P> {
    provider: P,
}

impl<P: AdapterConfigProvider> ConfigService<P> {
    /// 创建新的配置服务实例
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 底层的网卡配置接口
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 枚举启用了IP的网卡，没有网卡时返回空列表
    pub fn list_adapters(&self) -> Result<Vec<String>> {
        let adapters = self.provider.list_adapters()?;
        tracing::debug!("Found {} IP-enabled adapters", adapters.len());
        Ok(adapters)
    }

    /// 读取网卡配置，网卡不存在时返回 `AdapterNotFound`
    pub fn read_config(
        &self,
        description: &str,
    ) -> Result<AdapterSnapshot> {
        require_adapter(description)?;
        self.provider.read_config(description)?.ok_or_else(
            || {
                IpEditError::AdapterNotFound(
                    description.to_string(),
                )
            },
        )
    }

    /// 读取网卡配置，网卡已消失时返回 `None`
    pub fn try_read_config(
        &self,
        description: &str,
    ) -> Result<Option<AdapterSnapshot>> {
        match self.read_config(description) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) if e.is_not_found() => {
                tracing::info!(
                    "Adapter {:?} disappeared, nothing to show",
                    description
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// 读取网卡配置并转换为表单字段
    pub fn read_fields(
        &self,
        description: &str,
    ) -> Result<Option<ConfigFields>> {
        Ok(self
            .try_read_config(description)?
            .as_ref()
            .map(ConfigFields::from))
    }

    /// 应用表单字段
    ///
    /// - IP和掩码都不为空时才设置静态地址，否则跳过这一步
    /// - 网关、DNS字段不为空时才设置，按逗号拆分
    /// - 任何一步返回非0即停止，后续步骤不再执行
    /// - 全部字段为空时不调用系统接口，直接返回成功
    pub fn apply(
        &self,
        description: &str,
        fields: &ConfigFields,
    ) -> Result<ApplyOutcome> {
        let fields = fields.trimmed();
        if fields.is_empty() {
            tracing::info!("All fields empty, nothing to apply");
            return Ok(ApplyOutcome::NothingToApply);
        }
        require_adapter(description)?;

        let mut steps = Vec::new();

        if !fields.ip.is_empty() && !fields.subnet.is_empty() {
            let code = self.provider.enable_static(
                description,
                &fields.ip,
                &fields.subnet,
            )?;
            check_status(ApplyStep::Address, code)?;
            steps.push(ApplyStep::Address);
        } else if !fields.ip.is_empty()
            || !fields.subnet.is_empty()
        {
            tracing::warn!("IP and subnet mask must both be set, skipping address step");
        }

        if !fields.gateway.is_empty() {
            let gateways = split_list(&fields.gateway);
            let code = self
                .provider
                .set_gateways(description, &gateways)?;
            check_status(ApplyStep::Gateway, code)?;
            steps.push(ApplyStep::Gateway);
        }

        if !fields.dns.is_empty() {
            let servers = split_list(&fields.dns);
            let code = self
                .provider
                .set_dns_servers(description, &servers)?;
            check_status(ApplyStep::Dns, code)?;
            steps.push(ApplyStep::Dns);
        }

        tracing::info!(
            "Applied {:?} to {:?}",
            steps,
            description
        );
        Ok(ApplyOutcome::Applied { steps })
    }

    /// 切换到DHCP，然后总是重新读取网卡当前配置
    ///
    /// 返回码非0时仍然返回新读取的配置，由调用方通过
    /// `DhcpRefresh::check` 报告错误
    pub fn enable_dhcp(
        &self,
        description: &str,
    ) -> Result<DhcpRefresh> {
        require_adapter(description)?;
        let status = self.provider.enable_dhcp(description)?;
        if status == 0 {
            tracing::info!("DHCP enabled on {:?}", description);
        } else {
            tracing::error!(
                "{} failed on {:?}, return code: {}",
                ApplyStep::Dhcp,
                description,
                status
            );
        }
        let snapshot = self.try_read_config(description)?;
        Ok(DhcpRefresh { snapshot, status })
    }
}

fn require_adapter(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(IpEditError::selection_required(
            "Please select an adapter first",
        ));
    }
    Ok(())
}

fn check_status(step: ApplyStep, code: StatusCode) -> Result<()> {
    if code != 0 {
        tracing::error!("{} failed, return code: {}", step, code);
        return Err(IpEditError::Apply { step, code });
    }
    Ok(())
}
