//! 字体加载

pub mod loader;
