//! # Flash Resolver Library / Flash Resolver 库
//!
//! This library resolves flash messages from the structural location they are
//! raised in: a namespaced component path, an action and an outcome status.
//! It derives an ordered chain of candidate keys, resolves the first one
//! present in a message catalog and interpolates named placeholders.
//!
//! 此库根据 flash 消息产生的结构化位置（命名空间组件路径、操作和结果状态）解析消息。
//! 它推导出有序的候选键链，解析消息目录中存在的第一个键，并插入命名占位符。
//!
//! ## Modules / 模块
//!
//! - `core` - Key generation, catalog, fallback resolution and interpolation
//! - `infra` - Catalog loading from disk, logging and CLI i18n
//! - `reporting` - Console output of results and failures
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 键生成、目录、回退解析和插值
//! - `infra` - 从磁盘加载目录、日志和 CLI 国际化
//! - `reporting` - 结果和失败的控制台输出
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```
//! use std::sync::Arc;
//! use flash_resolver::{EngineConfig, FlashEngine, MessageCatalog, ResolutionContext, ResolveOptions, Status};
//!
//! let catalog = MessageCatalog::new()
//!     .with("flash.products.create.success", "%{resourceName} created!")
//!     .with("activerecord.models.products", "Product");
//! let engine = FlashEngine::new(Arc::new(catalog), EngineConfig::default());
//!
//! let ctx = ResolutionContext::new(["admin", "products"], "create", Status::Success).unwrap();
//! let result = engine.resolve(&ctx, &ResolveOptions::new()).unwrap();
//! assert_eq!(result.rendered, "Product created!");
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config::EngineConfig;
pub use crate::core::catalog::{Catalog, MessageCatalog, SharedCatalog};
pub use crate::core::engine::FlashEngine;
pub use crate::core::error::{CatalogError, ResolveError};
pub use crate::core::models::{
    FlashMessage, KeyPath, ResolutionContext, ResolutionResult, ResolveOptions, Status,
    SubstitutionSet, Timing,
};

/// Picks the language of the command-line output.
///
/// It attempts to match the requested locale (or the system locale when none
/// is requested) in full (e.g., "zh-CN"), then just the language code (e.g.,
/// "en"), and finally falls back to the default language ("en").
pub fn select_locale(requested: Option<&str>) -> &'static str {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if let Some(exact) = available_locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(&locale))
    {
        return *exact;
    }

    let lang_code = locale.split(['-', '_']).next().unwrap_or_default();
    available_locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(lang_code))
        .copied()
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
