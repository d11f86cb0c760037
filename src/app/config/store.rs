//! 收藏夹存储
//! 负责加载、保存收藏夹文档，以及对文档做增删

use anyhow::Context;
use std::fs;
use std::path::Path;

use super::favorites::{FavoriteEntry, FavoritesDocument};
use super::paths::ConfigPaths;
use crate::app::error::types::{IpEditError, Result};

/// 收藏夹存储，每次修改后整体覆盖写入文件
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    config_paths: ConfigPaths,
}

impl FavoritesStore {
    /// 使用工作目录下的默认配置文件
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_paths: ConfigPaths::new()?,
        })
    }

    /// 使用指定的配置文件
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_paths: ConfigPaths::with_file(
                path.as_ref(),
            ),
        }
    }

    /// 配置文件路径
    pub fn path(&self) -> &Path {
        self.config_paths.config_file()
    }

    /// 加载文档
    ///
    /// 文件不存在、无法读取或解析失败时返回默认文档，不向调用方报错
    pub fn load(&self) -> FavoritesDocument {
        let config_file = self.path();
        if !config_file.exists() {
            tracing::info!(
                "Config file not found, using defaults: {:?}",
                config_file
            );
            return FavoritesDocument::default();
        }

        match Self::read_document(config_file) {
            Ok(doc) => {
                tracing::info!(
                    "Loaded {} favorites from {:?}",
                    doc.favorites.len(),
                    config_file
                );
                doc
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load config, using defaults: {:#}",
                    e
                );
                FavoritesDocument::default()
            }
        }
    }

    fn read_document(
        config_file: &Path,
    ) -> anyhow::Result<FavoritesDocument> {
        let content = fs::read_to_string(config_file)
            .with_context(|| {
                format!(
                    "无法读取配置文件: {:?}",
                    config_file
                )
            })?;
        let doc = serde_json::from_str(&content)
            .with_context(|| {
                format!(
                    "无法解析配置文件: {:?}",
                    config_file
                )
            })?;
        Ok(doc)
    }

    /// 保存文档，整体覆盖原文件，不重试
    pub fn save(&self, doc: &FavoritesDocument) -> Result<()> {
        let config_file = self.path();
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| {
                IpEditError::config_file(config_file, e)
            })?;

        fs::write(config_file, content).map_err(|e| {
            tracing::error!(
                "Failed to write config file {:?}: {}",
                config_file,
                e
            );
            IpEditError::config_file(config_file, e)
        })?;

        tracing::debug!(
            "Config file saved: {:?}",
            config_file
        );
        Ok(())
    }
}

/// 在列表末尾追加收藏项，不去重也不校验
pub fn add_favorite(
    doc: &FavoritesDocument,
    entry: FavoriteEntry,
) -> FavoritesDocument {
    let mut doc = doc.clone();
    doc.favorites.push(entry);
    doc
}

/// 删除指定位置的收藏项，其余项保持顺序
///
/// 调用前应由用户确认，删除无法撤销。索引越界时原文档不变
pub fn delete_favorite(
    doc: &FavoritesDocument,
    index: usize,
) -> Result<FavoritesDocument> {
    let len = doc.favorites.len();
    if index >= len {
        return Err(IpEditError::OutOfRange { index, len });
    }
    let mut doc = doc.clone();
    let removed = doc.favorites.remove(index);
    tracing::debug!(
        "Removed favorite #{} ({})",
        index,
        removed.name
    );
    Ok(doc)
}
