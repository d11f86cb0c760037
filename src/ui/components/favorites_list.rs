//! 收藏夹列表组件

use eframe::egui;

use crate::app::config::favorites::FavoriteEntry;

/// 渲染收藏列表，点击行时更新选中项
pub fn render_favorites_list(
    ui: &mut egui::Ui,
    favorites: &[FavoriteEntry],
    selected: &mut Option<usize>,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 40.0).max(0.0))
        .show(ui, |ui| {
            if favorites.is_empty() {
                ui.weak("暂无收藏");
            }
            for (index, favorite) in favorites.iter().enumerate() {
                let is_selected = *selected == Some(index);
                let response = ui
                    .selectable_label(is_selected, &favorite.name)
                    .on_hover_text(format!(
                        "IP: {}\n子网掩码: {}\n网关: {}\nDNS: {}",
                        favorite.ip,
                        favorite.subnet,
                        favorite.gateway,
                        favorite.dns
                    ));
                if response.clicked() {
                    *selected = Some(index);
                }
            }
        });
}
