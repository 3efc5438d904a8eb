//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the flash resolver,
//! including catalog file discovery and loading, logging setup, and the
//! i18n support of the command-line interface itself.
//!
//! 此模块为 flash 解析器提供基础设施服务，
//! 包括目录文件的发现与加载、日志设置以及命令行界面自身的国际化支持。

pub mod fs;
pub mod loader;
pub mod logger;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
