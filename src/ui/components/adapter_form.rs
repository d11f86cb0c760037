//! 网卡配置表单组件

use eframe::egui;

use crate::ui::config::FormState;

/// 渲染网卡选择组合框，选择变化时返回 true
fn render_adapter_combo(
    ui: &mut egui::Ui,
    form: &mut FormState,
) -> bool {
    let before = form.selected_adapter.clone();
    let selected_text = form.adapter().to_string();

    egui::ComboBox::from_id_salt("adapter_combo")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for adapter in &form.adapters {
                ui.selectable_value(
                    &mut form.selected_adapter,
                    Some(adapter.clone()),
                    adapter,
                );
            }
        });

    form.selected_adapter != before
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}

/// 渲染网卡配置区域，返回网卡选择是否变化
pub fn render_adapter_form(
    ui: &mut egui::Ui,
    form: &mut FormState,
) -> bool {
    let mut adapter_changed = false;

    egui::Grid::new("adapter_form")
        .num_columns(2)
        .min_col_width(80.0) // 标题列固定最小宽度
        .spacing([20.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("网卡名称:");
            adapter_changed = render_adapter_combo(ui, form);
            ui.end_row();

            field_row(ui, "IP地址:", &mut form.fields.ip);
            field_row(ui, "子网掩码:", &mut form.fields.subnet);
            field_row(ui, "默认网关:", &mut form.fields.gateway);
            field_row(ui, "DNS服务器:", &mut form.fields.dns);
        });

    adapter_changed
}
