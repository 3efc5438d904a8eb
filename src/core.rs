//! # Core Module / 核心模块
//!
//! This module contains the resolution pipeline of the flash resolver:
//! candidate key generation, catalog lookup with fallback, and interpolation.
//!
//! 此模块包含 flash 解析器的解析流程：
//! 候选键生成、带回退的目录查找以及插值。

pub mod candidates;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod interpolation;
pub mod models;
pub mod resolver;

// Re-exports
pub use candidates::generate_candidates;
pub use catalog::{Catalog, MessageCatalog, SharedCatalog};
pub use config::EngineConfig;
pub use engine::FlashEngine;
pub use error::{CatalogError, ResolveError};
pub use interpolation::interpolate;
pub use models::{KeyPath, ResolutionContext, ResolutionResult, ResolveOptions, Status, SubstitutionSet};
