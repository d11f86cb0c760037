//! 收藏夹文档类型
//!
//! 整个持久化状态就是一个 JSON 文档：收藏列表、窗口大小和分隔条位置。

use serde::{Deserialize, Serialize};

use crate::core::adapter::types::ConfigFields;

/// 默认窗口大小
pub const DEFAULT_GEOMETRY: &str = "800x400";
/// 默认分隔条位置
pub const DEFAULT_PANEL_POSITION: i64 = 400;
/// 未填写IP时收藏项的名称
pub const UNNAMED_FAVORITE: &str = "未命名配置";

/// 收藏的一组配置
///
/// 身份由在列表中的位置决定，名称和IP都不要求唯一。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteEntry {
    /// 显示名称
    pub name: String,
    /// IP地址
    pub ip: String,
    /// 子网掩码
    pub subnet: String,
    /// 逗号分隔的网关列表
    pub gateway: String,
    /// 逗号分隔的DNS列表
    pub dns: String,
}

impl FavoriteEntry {
    /// 从表单字段生成收藏项，名称取IP，IP为空时使用默认名称
    pub fn from_fields(fields: &ConfigFields) -> Self {
        let name = if fields.ip.is_empty() {
            UNNAMED_FAVORITE.to_string()
        } else {
            fields.ip.clone()
        };
        Self::named(name, fields)
    }

    /// 使用指定名称生成收藏项
    pub fn named(
        name: impl Into<String>,
        fields: &ConfigFields,
    ) -> Self {
        Self {
            name: name.into(),
            ip: fields.ip.clone(),
            subnet: fields.subnet.clone(),
            gateway: fields.gateway.clone(),
            dns: fields.dns.clone(),
        }
    }

    /// 还原为表单字段，内容原样保留
    pub fn to_fields(&self) -> ConfigFields {
        ConfigFields {
            ip: self.ip.clone(),
            subnet: self.subnet.clone(),
            gateway: self.gateway.clone(),
            dns: self.dns.clone(),
        }
    }
}

/// 窗口布局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowLayout {
    /// `WIDTHxHEIGHT`
    pub geometry: String,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            geometry: DEFAULT_GEOMETRY.to_string(),
        }
    }
}

impl WindowLayout {
    /// 由窗口尺寸生成布局
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            geometry: format!(
                "{}x{}",
                width.round() as i64,
                height.round() as i64
            ),
        }
    }

    /// 解析 `WIDTHxHEIGHT`，忽略可能附带的 `+X+Y` 位置部分
    pub fn parse_size(&self) -> Option<(f32, f32)> {
        let size = self
            .geometry
            .split('+')
            .next()
            .unwrap_or_default();
        let (w, h) = size.trim().split_once('x')?;
        let width: f32 = w.trim().parse().ok()?;
        let height: f32 = h.trim().parse().ok()?;
        if width > 0.0 && height > 0.0 {
            Some((width, height))
        } else {
            None
        }
    }
}

/// 分隔条布局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    /// 左侧面板宽度，单位为像素
    pub position: i64,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            position: DEFAULT_PANEL_POSITION,
        }
    }
}

/// 持久化文档
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesDocument {
    /// 按添加顺序排列的收藏项
    pub favorites: Vec<FavoriteEntry>,
    /// 窗口大小
    pub window: WindowLayout,
    /// 分隔条位置
    pub panel: PanelLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_matches_first_run_layout() {
        let doc = FavoritesDocument::default();
        assert!(doc.favorites.is_empty());
        assert_eq!(doc.window.geometry, "800x400");
        assert_eq!(doc.panel.position, 400);
    }

    #[test]
    fn geometry_parsing() {
        let layout = WindowLayout {
            geometry: "1024x768+10+20".into(),
        };
        assert_eq!(layout.parse_size(), Some((1024.0, 768.0)));

        let bad = WindowLayout {
            geometry: "wide".into(),
        };
        assert_eq!(bad.parse_size(), None);

        let zero = WindowLayout {
            geometry: "0x300".into(),
        };
        assert_eq!(zero.parse_size(), None);
    }

    #[test]
    fn geometry_from_size_rounds() {
        assert_eq!(
            WindowLayout::from_size(799.6, 400.2).geometry,
            "800x400"
        );
    }

    #[test]
    fn favorite_name_falls_back_when_ip_empty() {
        let fields = ConfigFields::new("", "255.0.0.0", "", "");
        assert_eq!(
            FavoriteEntry::from_fields(&fields).name,
            UNNAMED_FAVORITE
        );

        let fields =
            ConfigFields::new(" 10.1.1.1 ", "", "", "");
        assert_eq!(
            FavoriteEntry::from_fields(&fields).name,
            "10.1.1.1"
        );
    }

    #[test]
    fn partial_document_fills_defaults() {
        let doc: FavoritesDocument = serde_json::from_str(
            r#"{"favorites":[{"name":"a","ip":"1.2.3.4"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.favorites[0].subnet, "");
        assert_eq!(doc.window.geometry, "800x400");
        assert_eq!(doc.panel.position, 400);
    }
}
