use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use ipedit::core::adapter::ConfigFields;

/// 网卡IP快捷修改工具
#[derive(Parser, Debug)]
#[command(name = "ipedit")]
#[command(about = "查看和修改网卡IPv4配置，管理常用配置收藏夹")]
#[command(version)]
pub struct Args {
    /// 收藏夹文件路径（默认为工作目录下的 ipedit_config.json）
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 不指定子命令时启动图形界面
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 表单字段参数
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FieldArgs {
    /// IP地址
    #[arg(long, value_name = "IP", default_value = "")]
    pub ip: String,

    /// 子网掩码
    #[arg(long, value_name = "MASK", default_value = "")]
    pub subnet: String,

    /// 默认网关，多个用逗号分隔
    #[arg(long, value_name = "LIST", default_value = "")]
    pub gateway: String,

    /// DNS服务器，多个用逗号分隔
    #[arg(long, value_name = "LIST", default_value = "")]
    pub dns: String,
}

impl FieldArgs {
    /// 转为表单字段
    pub fn to_fields(&self) -> ConfigFields {
        ConfigFields::new(
            &self.ip,
            &self.subnet,
            &self.gateway,
            &self.dns,
        )
    }
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出启用了IP的网卡
    List,

    /// 显示网卡当前配置
    Show {
        /// 网卡描述
        adapter: String,
    },

    /// 应用配置：地址 → 网关 → DNS，任何一步失败即停止
    Apply {
        /// 网卡描述
        adapter: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// 切换到DHCP并显示新配置
    Dhcp {
        /// 网卡描述
        adapter: String,
    },

    /// 管理收藏夹
    #[command(subcommand)]
    Favorites(FavoriteCommands),
}

/// 收藏夹子命令
#[derive(Subcommand, Debug)]
pub enum FavoriteCommands {
    /// 列出收藏项
    List,

    /// 添加收藏项
    Add {
        /// 名称（默认取IP地址）
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// 删除收藏项
    Delete {
        /// 收藏项序号（从0开始）
        index: usize,

        /// 确认删除，删除无法撤销
        #[arg(long)]
        yes: bool,
    },

    /// 把收藏项应用到网卡
    Apply {
        /// 收藏项序号（从0开始）
        index: usize,

        /// 网卡描述
        adapter: String,
    },
}
