//! 字体设置模块 - 处理跨平台中文字体支持

use egui::{FontDefinitions, FontFamily};

/// 各平台的中文字体候选路径，按优先级排列
#[cfg(target_os = "windows")]
const FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simsun.ttc",
];

#[cfg(target_os = "linux")]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

#[cfg(target_os = "macos")]
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
];

#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "macos"
)))]
const FONT_CANDIDATES: &[&str] = &[];

/// 设置跨平台的中文字体支持
pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    let Some((path, font_data)) = FONT_CANDIDATES
        .iter()
        .find_map(|path| {
            std::fs::read(path).ok().map(|data| (path, data))
        })
    else {
        tracing::warn!(
            "No CJK system font found, labels may not render"
        );
        return;
    };

    fonts.font_data.insert(
        "system_cjk".to_owned(),
        egui::FontData::from_owned(font_data),
    );
    for family in
        [FontFamily::Proportional, FontFamily::Monospace]
    {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "system_cjk".to_owned());
    }

    ctx.set_fonts(fonts);
    tracing::info!("Loaded CJK font from {}", path);
}
