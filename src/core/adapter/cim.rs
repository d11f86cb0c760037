//! 基于 WMI `Win32_NetworkAdapterConfiguration` 的网卡配置实现
//!
//! 通过 PowerShell 的 CIM 命令读取和修改网卡配置，读取结果以 JSON 输出后解析。
//! 每个调用启动一个 PowerShell 进程并阻塞等待其退出。

use serde::Deserialize;
use std::process::Command;

use super::provider::{AdapterConfigProvider, StatusCode};
use super::types::AdapterSnapshot;
use crate::app::error::types::{IpEditError, Result};

/// 启用了IP的网卡查询
const ENABLED_ADAPTERS: &str = "Get-CimInstance -ClassName Win32_NetworkAdapterConfiguration -Filter 'IPEnabled=True'";

/// 读取时需要的属性
const SNAPSHOT_PROPERTIES: &str =
    "Description, IPAddress, IPSubnet, DefaultIPGateway, DNSServerSearchOrder";

/// 网卡已消失时脚本的输出
const MISSING_MARKER: &str = "missing";

/// PowerShell 输出的网卡记录
///
/// 数组属性在只有一个元素时可能被输出为单个字符串，也可能为 null
#[derive(Debug, Deserialize)]
struct CimAdapterRecord {
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "IPAddress", default)]
    ip_address: Option<StringList>,
    #[serde(rename = "IPSubnet", default)]
    ip_subnet: Option<StringList>,
    #[serde(rename = "DefaultIPGateway", default)]
    default_ip_gateway: Option<StringList>,
    #[serde(rename = "DNSServerSearchOrder", default)]
    dns_server_search_order: Option<StringList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringList {
    One(String),
    Many(Vec<Option<String>>),
}

impl StringList {
    fn into_vec(self) -> Vec<String> {
        match self {
            StringList::One(value) => vec![value],
            StringList::Many(values) => {
                values.into_iter().flatten().collect()
            }
        }
    }
}

fn list_of(value: Option<StringList>) -> Vec<String> {
    value
        .map(StringList::into_vec)
        .unwrap_or_default()
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect()
}

impl CimAdapterRecord {
    /// 转换为快照，只取第一个地址和掩码（IPv4 在前）
    fn into_snapshot(self) -> AdapterSnapshot {
        AdapterSnapshot {
            description: self.description.unwrap_or_default(),
            ip: list_of(self.ip_address)
                .into_iter()
                .next()
                .unwrap_or_default(),
            subnet_mask: list_of(self.ip_subnet)
                .into_iter()
                .next()
                .unwrap_or_default(),
            gateways: list_of(self.default_ip_gateway),
            dns_servers: list_of(self.dns_server_search_order),
        }
    }
}

/// 解析 `ConvertTo-Json` 的输出，兼容空输出、单个对象和数组
fn parse_records(output: &str) -> Result<Vec<AdapterSnapshot>> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(output)?;
    let records: Vec<CimAdapterRecord> = match value {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<_, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };

    Ok(records
        .into_iter()
        .map(CimAdapterRecord::into_snapshot)
        .collect())
}

/// 转为 PowerShell 单引号字符串
fn ps_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// 转为 PowerShell 字符串数组
fn ps_string_array(values: &[String]) -> String {
    let items: Vec<String> =
        values.iter().map(|v| ps_quote(v)).collect();
    format!("[string[]]@({})", items.join(","))
}

/// 选出指定描述的网卡并调用其方法，输出返回码
fn method_script(
    description: &str,
    method: &str,
    arguments: Option<String>,
) -> String {
    let arguments = arguments
        .map(|args| format!(" -Arguments @{{ {args} }}"))
        .unwrap_or_default();
    format!(
        "$a = {ENABLED_ADAPTERS} | Where-Object {{ $_.Description -eq {desc} }} | Select-Object -First 1; \
         if ($null -eq $a) {{ '{MISSING_MARKER}' }} else {{ (Invoke-CimMethod -InputObject $a -MethodName {method}{arguments}).ReturnValue }}",
        desc = ps_quote(description),
    )
}

/// 解析方法调用输出的返回码
fn parse_status(
    description: &str,
    output: &str,
) -> Result<StatusCode> {
    let output = output.trim();
    if output == MISSING_MARKER {
        return Err(IpEditError::AdapterNotFound(
            description.to_string(),
        ));
    }
    // EnableDHCP 等方法在部分系统上没有返回值
    if output.is_empty() {
        return Ok(0);
    }
    output.parse().map_err(|_| {
        IpEditError::bridge(format!(
            "Unexpected return value: {output}"
        ))
    })
}

/// 通过 PowerShell CIM 命令访问系统网卡配置
#[derive(Debug, Clone)]
pub struct CimAdapterProvider {
    shell: String,
}

impl Default for CimAdapterProvider {
    fn default() -> Self {
        let shell = if cfg!(windows) {
            "powershell"
        } else {
            "pwsh"
        };
        Self::with_shell(shell)
    }
}

impl CimAdapterProvider {
    /// 使用系统默认的 PowerShell
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定 PowerShell 可执行文件
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// 执行脚本并返回标准输出
    fn run(&self, script: &str) -> Result<String> {
        tracing::debug!("Running CIM script: {}", script);

        let mut command = Command::new(&self.shell);
        command.args([
            "-NoProfile",
            "-NonInteractive",
            "-Command",
            script,
        ]);

        // 不为子进程弹出控制台窗口
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        let output = command.output().map_err(|e| {
            IpEditError::bridge(format!(
                "Failed to run {}: {e}",
                self.shell
            ))
        })?;

        if !output.status.success() {
            let stderr =
                String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                "CIM script exited with {}: {}",
                output.status,
                stderr.trim()
            );
            return Err(IpEditError::bridge(format!(
                "{} exited with {}: {}",
                self.shell,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn query_snapshots(&self) -> Result<Vec<AdapterSnapshot>> {
        let script = format!(
            "ConvertTo-Json -Compress -Depth 3 -InputObject @({ENABLED_ADAPTERS} | Select-Object {SNAPSHOT_PROPERTIES})"
        );
        parse_records(&self.run(&script)?)
    }

    fn invoke(
        &self,
        description: &str,
        method: &str,
        arguments: Option<String>,
    ) -> Result<StatusCode> {
        let script =
            method_script(description, method, arguments);
        let code =
            parse_status(description, &self.run(&script)?)?;
        tracing::debug!(
            "{} on {:?} returned {}",
            method,
            description,
            code
        );
        Ok(code)
    }
}

impl AdapterConfigProvider for CimAdapterProvider {
    fn list_adapters(&self) -> Result<Vec<String>> {
        Ok(self
            .query_snapshots()?
            .into_iter()
            .map(|s| s.description)
            .collect())
    }

    fn read_config(
        &self,
        description: &str,
    ) -> Result<Option<AdapterSnapshot>> {
        Ok(self
            .query_snapshots()?
            .into_iter()
            .find(|s| s.description == description))
    }

    fn enable_static(
        &self,
        description: &str,
        ip: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode> {
        let arguments = format!(
            "IPAddress = {}; SubnetMask = {}",
            ps_string_array(&[ip.to_string()]),
            ps_string_array(&[subnet_mask.to_string()]),
        );
        self.invoke(description, "EnableStatic", Some(arguments))
    }

    fn set_gateways(
        &self,
        description: &str,
        gateways: &[String],
    ) -> Result<StatusCode> {
        let arguments = format!(
            "DefaultIPGateway = {}",
            ps_string_array(gateways)
        );
        self.invoke(description, "SetGateways", Some(arguments))
    }

    fn set_dns_servers(
        &self,
        description: &str,
        servers: &[String],
    ) -> Result<StatusCode> {
        let arguments = format!(
            "DNSServerSearchOrder = {}",
            ps_string_array(servers)
        );
        self.invoke(
            description,
            "SetDNSServerSearchOrder",
            Some(arguments),
        )
    }

    fn enable_dhcp(
        &self,
        description: &str,
    ) -> Result<StatusCode> {
        self.invoke(description, "EnableDHCP", None)
    }
}
