//! GUI主应用程序模块

use eframe::egui;

use crate::app::config::favorites::{
    FavoriteEntry, FavoritesDocument, WindowLayout,
};
use crate::app::config::store::{
    add_favorite, delete_favorite, FavoritesStore,
};
use crate::app::error::types::{AppError, IpEditError, Result};
use crate::core::adapter::{
    AdapterConfigProvider, ApplyOutcome, CimAdapterProvider,
};
use crate::core::services::ConfigService;

use super::components::{AppRenderer, UserAction};
use super::config::{FormState, StatusLevel, StatusMessage};
use super::dialogs;
use super::fonts::loader;

/// 窗口最小尺寸
const MIN_WINDOW_SIZE: [f32; 2] = [50.0, 50.0];

/// GUI 应用程序
pub struct IpEditApp<P> {
    service: ConfigService<P>,
    store: FavoritesStore,
    document: FavoritesDocument,
    form: FormState,
    status: Option<StatusMessage>,
}

impl<P: AdapterConfigProvider> IpEditApp<P> {
    /// 由已加载的文档创建应用，不访问网卡
    pub fn with_parts(
        service: ConfigService<P>,
        store: FavoritesStore,
        document: FavoritesDocument,
    ) -> Self {
        Self {
            service,
            store,
            document,
            form: FormState::default(),
            status: None,
        }
    }

    /// 当前文档
    pub fn document(&self) -> &FavoritesDocument {
        &self.document
    }

    /// 当前表单
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// 可编辑的表单
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// 重新枚举网卡，默认选中第一个并加载其配置
    pub fn refresh_adapters(&mut self) -> Result<()> {
        let adapters = self.service.list_adapters()?;
        self.form.set_adapters(adapters);
        self.load_adapter_config()
    }

    /// 读取选中网卡的配置填入表单，未选择或网卡已消失时不做任何事
    pub fn load_adapter_config(&mut self) -> Result<()> {
        let adapter = self.form.adapter().to_string();
        if adapter.is_empty() {
            return Ok(());
        }
        if let Some(fields) = self.service.read_fields(&adapter)? {
            self.form.fields = fields;
        }
        Ok(())
    }

    /// 把表单应用到选中的网卡
    pub fn apply_config(&mut self) -> Result<ApplyOutcome> {
        let adapter = self.require_adapter()?;
        self.service.apply(&adapter, &self.form.fields)
    }

    /// 切换到DHCP并刷新表单
    ///
    /// 系统返回失败码时表单仍然刷新为网卡的实际配置
    pub fn fetch_dhcp(&mut self) -> Result<()> {
        let adapter = self.require_adapter()?;
        let refresh = self.service.enable_dhcp(&adapter)?;
        if let Some(snapshot) = &refresh.snapshot {
            self.form.fields = snapshot.into();
        }
        refresh.check()
    }

    /// 把当前表单保存为收藏项
    ///
    /// 写文件失败时内存中的收藏仍然保留
    pub fn add_current_to_favorites(&mut self) -> Result<()> {
        let entry =
            FavoriteEntry::from_fields(&self.form.fields.trimmed());
        self.document = add_favorite(&self.document, entry);
        self.store.save(&self.document)
    }

    /// 把选中的收藏项载入表单
    pub fn load_selected_favorite(&mut self) -> Result<()> {
        let index = self.require_favorite("请先选择一个收藏项")?;
        let len = self.document.favorites.len();
        let entry = self
            .document
            .favorites
            .get(index)
            .ok_or(IpEditError::OutOfRange { index, len })?;
        self.form.fields = entry.to_fields();
        Ok(())
    }

    /// 删除选中的收藏项，`confirm` 返回 false 时放弃
    pub fn delete_selected_favorite(
        &mut self,
        confirm: impl FnOnce() -> bool,
    ) -> Result<bool> {
        let index =
            self.require_favorite("请先选择要删除的收藏项")?;
        if !confirm() {
            return Ok(false);
        }
        self.document = delete_favorite(&self.document, index)?;
        self.form.selected_favorite = None;
        self.store.save(&self.document)?;
        Ok(true)
    }

    /// 窗口大小或分隔条位置变化时保存文档，返回是否有变化
    pub fn track_layout(
        &mut self,
        window: Option<WindowLayout>,
        panel_position: i64,
    ) -> Result<bool> {
        let mut changed = false;
        if let Some(window) = window {
            if window != self.document.window {
                self.document.window = window;
                changed = true;
            }
        }
        if panel_position != self.document.panel.position {
            self.document.panel.position = panel_position;
            changed = true;
        }
        if changed {
            self.store.save(&self.document)?;
        }
        Ok(changed)
    }

    fn require_adapter(&self) -> Result<String> {
        match self.form.selected_adapter.as_deref() {
            Some(adapter) if !adapter.is_empty() => {
                Ok(adapter.to_string())
            }
            _ => Err(IpEditError::selection_required(
                "请先选择网卡",
            )),
        }
    }

    fn require_favorite(&self, message: &str) -> Result<usize> {
        self.form
            .selected_favorite
            .ok_or_else(|| IpEditError::selection_required(message))
    }

    /// 把操作结果转换为状态栏消息并弹出对话框
    fn report<T>(
        &mut self,
        result: Result<T>,
        success: Option<&str>,
        failure: &str,
    ) {
        let message = status_for(result, success, failure);
        if let Some(message) = &message {
            dialogs::show_status(message);
        }
        self.status = message;
    }

    /// 处理用户动作
    fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::None => {}
            UserAction::SelectAdapter | UserAction::Refresh => {
                let result = self.load_adapter_config();
                self.report(result, None, "加载网卡配置失败");
            }
            UserAction::Apply => {
                let result = self.apply_config();
                self.report(result, Some("配置已应用"), "应用配置失败");
            }
            UserAction::FetchDhcp => {
                let result = self.fetch_dhcp();
                self.report(result, Some("已获取DHCP配置"), "获取DHCP失败");
            }
            UserAction::AddFavorite => {
                let result = self.add_current_to_favorites();
                self.report(result, None, "保存配置失败");
            }
            UserAction::LoadFavorite => {
                let result = self.load_selected_favorite();
                self.report(result, None, "加载收藏失败");
            }
            UserAction::DeleteFavorite => {
                let result = self.delete_selected_favorite(|| {
                    dialogs::confirm(
                        "确认删除",
                        "确定要删除这个收藏项吗？",
                    )
                });
                self.report(result, None, "删除收藏失败");
            }
        }
    }
}

/// 操作结果对应的状态消息
///
/// 无需提示的成功和操作期间网卡消失都返回 `None`
fn status_for<T>(
    result: Result<T>,
    success: Option<&str>,
    failure: &str,
) -> Option<StatusMessage> {
    match result {
        Ok(_) => success
            .map(|text| StatusMessage::new(StatusLevel::Info, text)),
        Err(IpEditError::SelectionRequired(text)) => {
            Some(StatusMessage::new(StatusLevel::Warning, text))
        }
        Err(e) if e.is_not_found() => {
            tracing::info!("{}: {}, ignored", failure, e);
            None
        }
        Err(e) => {
            tracing::error!("{}: {}", failure, e);
            Some(StatusMessage::new(
                StatusLevel::Error,
                format!("{failure}: {e}"),
            ))
        }
    }
}

impl IpEditApp<CimAdapterProvider> {
    /// 创建连接系统网卡的应用
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: FavoritesStore,
        document: FavoritesDocument,
    ) -> Self {
        // 配置跨平台的中文字体支持
        loader::setup_fonts(&cc.egui_ctx);

        let service =
            ConfigService::new(CimAdapterProvider::new());
        let mut app = Self::with_parts(service, store, document);
        let result = app.refresh_adapters();
        app.report(result, None, "获取网卡信息失败");
        app
    }
}

impl<P: AdapterConfigProvider> eframe::App for IpEditApp<P> {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        let mut action = UserAction::None;

        // 左侧：网卡配置，宽度即分隔条位置
        let panel = egui::SidePanel::left("adapter_panel")
            .resizable(true)
            .default_width(self.document.panel.position as f32)
            .width_range(MIN_WINDOW_SIZE[0]..=f32::INFINITY)
            .show(ctx, |ui| {
                AppRenderer::render_adapter_panel(
                    ui,
                    &mut self.form,
                    self.status.as_ref(),
                )
            });
        if panel.inner != UserAction::None {
            action = panel.inner;
        }

        // 右侧：收藏夹
        egui::CentralPanel::default().show(ctx, |ui| {
            let favorites_action =
                AppRenderer::render_favorites_panel(
                    ui,
                    &self.document.favorites,
                    &mut self.form.selected_favorite,
                );
            if favorites_action != UserAction::None {
                action = favorites_action;
            }
        });

        self.handle_action(action);

        let window = ctx.input(|i| {
            i.viewport()
                .inner_rect
                .map(|r| WindowLayout::from_size(r.width(), r.height()))
        });
        let panel_position =
            panel.response.rect.width().round() as i64;
        if let Err(e) = self.track_layout(window, panel_position) {
            tracing::error!("Failed to save layout: {}", e);
            self.status = Some(StatusMessage::new(
                StatusLevel::Error,
                format!("保存配置失败: {e}"),
            ));
        }
    }

    fn on_exit(
        &mut self,
        _gl: Option<&eframe::glow::Context>,
    ) {
        // 应用退出时保存配置
        if let Err(e) = self.store.save(&self.document) {
            tracing::error!(
                "Failed to save config file: {}",
                e
            );
        }
    }
}

/// 启动 GUI 应用程序
pub fn run_gui(store: FavoritesStore) -> Result<()> {
    let document = store.load();
    let (width, height) = document
        .window
        .parse_size()
        .unwrap_or_else(|| {
            tracing::warn!(
                "Invalid window geometry {:?}, using default",
                document.window.geometry
            );
            WindowLayout::default()
                .parse_size()
                .unwrap_or((800.0, 400.0))
        });

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([width, height])
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_resizable(true)
        .with_title("网卡IP快捷修改工具");

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        "ipedit",
        options,
        Box::new(move |cc| {
            Ok(Box::new(IpEditApp::new(cc, store, document)))
        }),
    )
    .map_err(|e| {
        tracing::error!("GUI startup failed: {}", e);
        AppError::Gui(e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adapter::{
        AdapterSnapshot, ApplyStep, ConfigFields,
        MemoryAdapterProvider,
    };
    use tempfile::TempDir;

    fn snapshot(description: &str) -> AdapterSnapshot {
        AdapterSnapshot {
            description: description.into(),
            ip: "192.168.1.20".into(),
            subnet_mask: "255.255.255.0".into(),
            gateways: vec!["192.168.1.1".into()],
            dns_servers: vec!["8.8.8.8".into(), "8.8.4.4".into()],
        }
    }

    fn app_with(
        provider: MemoryAdapterProvider,
        dir: &TempDir,
    ) -> IpEditApp<MemoryAdapterProvider> {
        let store =
            FavoritesStore::with_file(dir.path().join("cfg.json"));
        let document = store.load();
        IpEditApp::with_parts(
            ConfigService::new(provider),
            store,
            document,
        )
    }

    #[test]
    fn refresh_selects_first_adapter_and_fills_form() {
        let dir = TempDir::new().unwrap();
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"))
            .with_adapter(snapshot("wlan0"));
        let mut app = app_with(provider, &dir);

        app.refresh_adapters().unwrap();

        assert_eq!(app.form().adapter(), "eth0");
        assert_eq!(app.form().fields.dns, "8.8.8.8,8.8.4.4");
    }

    #[test]
    fn no_adapters_leaves_form_empty() {
        let dir = TempDir::new().unwrap();
        let mut app =
            app_with(MemoryAdapterProvider::new(), &dir);

        app.refresh_adapters().unwrap();

        assert!(app.form().selected_adapter.is_none());
        assert_eq!(app.form().fields, ConfigFields::default());
    }

    #[test]
    fn apply_without_adapter_needs_selection() {
        let dir = TempDir::new().unwrap();
        let mut app =
            app_with(MemoryAdapterProvider::new(), &dir);
        app.form_mut().fields =
            ConfigFields::new("10.0.0.2", "255.0.0.0", "", "");

        assert!(matches!(
            app.apply_config(),
            Err(IpEditError::SelectionRequired(_))
        ));
    }

    #[test]
    fn fetch_dhcp_refreshes_form() {
        let dir = TempDir::new().unwrap();
        let leased = AdapterSnapshot {
            ip: "172.16.0.9".into(),
            subnet_mask: "255.255.0.0".into(),
            ..AdapterSnapshot::default()
        };
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"))
            .with_dhcp_snapshot(leased);
        let mut app = app_with(provider, &dir);
        app.refresh_adapters().unwrap();

        app.fetch_dhcp().unwrap();

        assert_eq!(app.form().fields.ip, "172.16.0.9");
        assert_eq!(app.form().fields.gateway, "");
    }

    #[test]
    fn fetch_dhcp_failure_still_refreshes_form() {
        let dir = TempDir::new().unwrap();
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"))
            .with_status(ApplyStep::Dhcp, 1);
        let mut app = app_with(provider, &dir);
        app.refresh_adapters().unwrap();
        app.form_mut().fields = ConfigFields::default();

        let result = app.fetch_dhcp();

        assert!(matches!(
            result,
            Err(IpEditError::Apply {
                step: ApplyStep::Dhcp,
                code: 1
            })
        ));
        assert_eq!(app.form().fields.ip, "192.168.1.20");
    }

    #[test]
    fn vanished_adapter_is_silent() {
        let dir = TempDir::new().unwrap();
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"))
            .with_adapter(snapshot("wlan0"));
        let mut app = app_with(provider, &dir);
        app.refresh_adapters().unwrap();
        app.service.provider().remove_adapter("eth0");

        let applied = app.apply_config();
        assert!(applied.as_ref().is_err_and(|e| e.is_not_found()));
        assert!(status_for(applied, Some("ok"), "apply").is_none());

        let dhcp = app.fetch_dhcp();
        assert!(dhcp.as_ref().is_err_and(|e| e.is_not_found()));
        assert!(status_for(dhcp, Some("ok"), "dhcp").is_none());
    }

    #[test]
    fn status_for_maps_levels() {
        let info = status_for(Ok(()), Some("done"), "x").unwrap();
        assert_eq!(info.level, StatusLevel::Info);
        assert!(status_for(Ok(()), None, "x").is_none());

        let warning = status_for::<()>(
            Err(IpEditError::selection_required("pick one")),
            None,
            "x",
        )
        .unwrap();
        assert_eq!(warning.level, StatusLevel::Warning);

        let error = status_for::<()>(
            Err(IpEditError::Apply {
                step: ApplyStep::Gateway,
                code: 66,
            }),
            None,
            "应用配置失败",
        )
        .unwrap();
        assert_eq!(error.level, StatusLevel::Error);
        assert!(error.text.starts_with("应用配置失败"));
    }

    #[test]
    fn favorites_add_load_and_delete() {
        let dir = TempDir::new().unwrap();
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"));
        let mut app = app_with(provider, &dir);
        app.refresh_adapters().unwrap();

        app.add_current_to_favorites().unwrap();
        assert_eq!(app.document().favorites[0].name, "192.168.1.20");

        app.form_mut().fields = ConfigFields::default();
        app.form_mut().selected_favorite = Some(0);
        app.load_selected_favorite().unwrap();
        assert_eq!(app.form().fields.gateway, "192.168.1.1");

        // 用户取消时不删除
        assert!(!app.delete_selected_favorite(|| false).unwrap());
        assert_eq!(app.document().favorites.len(), 1);

        assert!(app.delete_selected_favorite(|| true).unwrap());
        assert!(app.document().favorites.is_empty());
        assert!(app.form().selected_favorite.is_none());

        let reloaded = FavoritesStore::with_file(
            dir.path().join("cfg.json"),
        )
        .load();
        assert!(reloaded.favorites.is_empty());
    }

    #[test]
    fn delete_without_selection_warns() {
        let dir = TempDir::new().unwrap();
        let mut app =
            app_with(MemoryAdapterProvider::new(), &dir);
        assert!(matches!(
            app.delete_selected_favorite(|| true),
            Err(IpEditError::SelectionRequired(_))
        ));
    }

    #[test]
    fn layout_changes_are_persisted_once() {
        let dir = TempDir::new().unwrap();
        let mut app =
            app_with(MemoryAdapterProvider::new(), &dir);

        let window = Some(WindowLayout::from_size(1024.0, 600.0));
        assert!(app.track_layout(window.clone(), 420).unwrap());
        assert!(!app.track_layout(window, 420).unwrap());

        let reloaded = FavoritesStore::with_file(
            dir.path().join("cfg.json"),
        )
        .load();
        assert_eq!(reloaded.window.geometry, "1024x600");
        assert_eq!(reloaded.panel.position, 420);
    }

    #[test]
    fn apply_reports_steps() {
        let dir = TempDir::new().unwrap();
        let provider = MemoryAdapterProvider::new()
            .with_adapter(snapshot("eth0"));
        let mut app = app_with(provider, &dir);
        app.refresh_adapters().unwrap();

        let outcome = app.apply_config().unwrap();
        assert_eq!(
            outcome.steps(),
            &[ApplyStep::Address, ApplyStep::Gateway, ApplyStep::Dns]
        );
    }
}
