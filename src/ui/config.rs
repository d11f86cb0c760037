//! GUI表单状态
//!
//! 定义界面上可编辑的字段和当前选择。

use crate::core::adapter::ConfigFields;

/// 表单状态
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// 启用了IP的网卡描述
    pub adapters: Vec<String>,
    /// 当前选中的网卡
    pub selected_adapter: Option<String>,
    /// IP/掩码/网关/DNS 输入框
    pub fields: ConfigFields,
    /// 收藏列表中选中的行
    pub selected_favorite: Option<usize>,
}

impl FormState {
    /// 替换网卡列表并默认选中第一个
    pub fn set_adapters(&mut self, adapters: Vec<String>) {
        self.selected_adapter = adapters.first().cloned();
        self.adapters = adapters;
    }

    /// 当前网卡描述，未选择时为空字符串
    pub fn adapter(&self) -> &str {
        self.selected_adapter.as_deref().unwrap_or_default()
    }
}

/// 状态栏消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// 操作成功
    Info,
    /// 需要用户先做选择
    Warning,
    /// 操作失败
    Error,
}

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// 消息级别
    pub level: StatusLevel,
    /// 显示的文字
    pub text: String,
}

impl StatusMessage {
    /// 创建消息
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}
