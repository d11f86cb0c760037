//! 配置路径管理模块
//! 负责处理程序工作目录下的配置文件路径

use crate::app::error::types::{IpEditError, Result};
use std::path::{Path, PathBuf};

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "ipedit_config.json";

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_file: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// # 示例
    /// ```
    /// use ipedit::app::config::paths::ConfigPaths;
    /// let paths = ConfigPaths::new().unwrap();
    /// assert!(paths.config_file().to_string_lossy().contains("ipedit_config.json"));
    /// ```
    pub fn new() -> Result<Self> {
        let config_file = Self::get_root_config_file()?;

        Ok(Self { config_file })
    }

    /// 使用指定的配置文件路径
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: path.into(),
        }
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// 获取工作目录下的配置文件路径
    ///
    /// 工作目录没有配置文件、而可执行文件目录有时，使用后者
    fn get_root_config_file() -> Result<PathBuf> {
        let current_dir =
            std::env::current_dir().map_err(|e| {
                IpEditError::config_file(
                    CONFIG_FILE_NAME,
                    format!(
                        "Failed to get current directory: {e}"
                    ),
                )
            })?;

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if !config_file.exists() {
            if let Ok(exe_path) = std::env::current_exe() {
                if let Some(exe_dir) = exe_path.parent() {
                    let exe_config_file =
                        exe_dir.join(CONFIG_FILE_NAME);
                    if exe_config_file.exists() {
                        tracing::info!("Found config file in executable directory: {:?}", exe_config_file);
                        return Ok(exe_config_file);
                    }
                }
            }
        }

        tracing::debug!(
            "Using config file path: {:?}",
            config_file
        );
        Ok(config_file)
    }
}
