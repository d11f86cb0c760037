//! 应用渲染器模块
//!
//! 负责渲染网卡配置和收藏夹两个面板

use eframe::egui;

use crate::app::config::favorites::FavoriteEntry;
use crate::ui::config::{FormState, StatusLevel, StatusMessage};

/// 用户动作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// 无动作
    None,
    /// 切换了网卡
    SelectAdapter,
    /// 切换到DHCP
    FetchDhcp,
    /// 重新读取当前网卡
    Refresh,
    /// 应用表单
    Apply,
    /// 收藏当前表单
    AddFavorite,
    /// 载入选中的收藏
    LoadFavorite,
    /// 删除选中的收藏
    DeleteFavorite,
}

/// 应用渲染器
pub struct AppRenderer;

impl AppRenderer {
    /// 渲染网卡配置面板，返回用户动作
    pub fn render_adapter_panel(
        ui: &mut egui::Ui,
        form: &mut FormState,
        status: Option<&StatusMessage>,
    ) -> UserAction {
        let mut action = UserAction::None;

        ui.heading("网卡配置");
        ui.separator();
        ui.add_space(8.0);

        if crate::ui::components::render_adapter_form(ui, form) {
            action = UserAction::SelectAdapter;
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("获取DHCP").clicked() {
                action = UserAction::FetchDhcp;
            }
            if ui.button("刷新").clicked() {
                action = UserAction::Refresh;
            }
            if ui.button("应用配置").clicked() {
                action = UserAction::Apply;
            }
        });

        if let Some(status) = status {
            ui.add_space(8.0);
            let color = match status.level {
                StatusLevel::Info => egui::Color32::GRAY,
                StatusLevel::Warning => egui::Color32::YELLOW,
                StatusLevel::Error => egui::Color32::RED,
            };
            ui.colored_label(color, &status.text);
        }

        action
    }

    /// 渲染收藏夹面板，返回用户动作
    pub fn render_favorites_panel(
        ui: &mut egui::Ui,
        favorites: &[FavoriteEntry],
        selected: &mut Option<usize>,
    ) -> UserAction {
        let mut action = UserAction::None;

        ui.heading("配置收藏夹");
        ui.separator();

        if ui.button("添加到收藏夹").clicked() {
            action = UserAction::AddFavorite;
        }
        ui.add_space(4.0);

        crate::ui::components::render_favorites_list(
            ui, favorites, selected,
        );

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("← 加载配置").clicked() {
                action = UserAction::LoadFavorite;
            }
            if ui.button("删除选中").clicked() {
                action = UserAction::DeleteFavorite;
            }
        });

        action
    }
}
