use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::adapter::types::ApplyStep;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum IpEditError {
    /// 配置文件读写错误
    #[error("Config file error ({path:?}): {message}")]
    ConfigFile {
        /// 配置文件路径
        path: PathBuf,
        /// 错误描述
        message: String,
    },

    /// 选中的网卡已不存在
    #[error("Adapter not found: {0}")]
    AdapterNotFound(String),

    /// 系统拒绝了某一步设置，携带返回码
    #[error("{step} failed, return code: {code}")]
    Apply {
        /// 失败的步骤
        step: ApplyStep,
        /// 系统返回码
        code: u32,
    },

    /// 操作需要先选中网卡或收藏项
    #[error("Selection required: {0}")]
    SelectionRequired(String),

    /// 收藏项索引越界
    #[error("Favorite index {index} out of range (len {len})")]
    OutOfRange {
        /// 请求的索引
        index: usize,
        /// 收藏项数量
        len: usize,
    },

    /// 无法调用系统网卡配置接口，或其输出无法解析
    #[error("Adapter bridge error: {0}")]
    Bridge(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// GUI 相关错误
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<serde_json::Error> for IpEditError {
    fn from(err: serde_json::Error) -> Self {
        IpEditError::bridge(format!(
            "Unreadable bridge output: {err}"
        ))
    }
}

impl IpEditError {
    /// 创建配置文件错误
    pub fn config_file(
        path: impl AsRef<Path>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::ConfigFile {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// 创建接口调用错误
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge(message.into())
    }

    /// 创建缺少选择的错误
    pub fn selection_required(
        what: impl Into<String>,
    ) -> Self {
        Self::SelectionRequired(what.into())
    }

    /// 是否为可以静默忽略的错误（网卡在枚举和读取之间消失）
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AdapterNotFound(_))
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, IpEditError>;
/// 界面层使用的错误别名
pub type AppError = IpEditError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_error_names_step_and_code() {
        let err = IpEditError::Apply {
            step: ApplyStep::Gateway,
            code: 67,
        };
        assert_eq!(
            err.to_string(),
            "Set gateway failed, return code: 67"
        );
    }

    #[test]
    fn not_found_is_recoverable() {
        assert!(IpEditError::AdapterNotFound("eth".into())
            .is_not_found());
        assert!(!IpEditError::bridge("x").is_not_found());
    }
}
