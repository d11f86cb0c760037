//! 系统消息对话框
//!
//! 所有对话框都是模态的，会阻塞界面线程直到用户关闭。

use rfd::{
    MessageButtons, MessageDialog, MessageDialogResult,
    MessageLevel,
};

use super::config::{StatusLevel, StatusMessage};

fn show(level: MessageLevel, title: &str, text: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// 按消息级别弹出对话框
pub fn show_status(message: &StatusMessage) {
    match message.level {
        StatusLevel::Info => {
            show(MessageLevel::Info, "成功", &message.text)
        }
        StatusLevel::Warning => {
            show(MessageLevel::Warning, "警告", &message.text)
        }
        StatusLevel::Error => {
            show(MessageLevel::Error, "错误", &message.text)
        }
    }
}

/// 询问用户是否继续
pub fn confirm(title: &str, text: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(result, MessageDialogResult::Yes)
}
