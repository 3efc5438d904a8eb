//! # Flash Engine / Flash 引擎
//!
//! The caller-facing entry point tying the pipeline together:
//! context → candidate keys → resolved template + merged values → rendered text.
//!
//! 将整个流程串联起来的调用方入口：
//! 上下文 → 候选键 → 解析出的模板 + 合并后的值 → 渲染文本。

use std::sync::Arc;
use tracing::debug;

use crate::core::candidates::generate_candidates_under;
use crate::core::catalog::{Catalog, MessageCatalog, SharedCatalog};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::interpolation::interpolate;
use crate::core::models::{
    FlashMessage, KeyPath, ResolutionContext, ResolutionResult, ResolveOptions, Status,
    SubstitutionSet, Timing,
};
use crate::core::resolver;

/// Resolves flash messages against an immutable catalog snapshot.
///
/// The engine holds no mutable state; calls from many threads may share one
/// instance. To pick up a reloaded catalog, build a new engine from the new
/// snapshot with [`FlashEngine::with_catalog`].
///
/// 针对不可变目录快照解析 flash 消息。
/// 引擎不持有可变状态；多个线程可以共享同一实例。
/// 要使用重新加载的目录，请通过 [`FlashEngine::with_catalog`] 以新快照构建新引擎。
#[derive(Debug)]
pub struct FlashEngine<C: Catalog = MessageCatalog> {
    catalog: Arc<C>,
    config: EngineConfig,
    /// `config.label_scopes`, parsed once.
    label_scopes: Vec<KeyPath>,
}

impl<C: Catalog> Clone for FlashEngine<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
            label_scopes: self.label_scopes.clone(),
        }
    }
}

impl<C: Catalog> FlashEngine<C> {
    /// Builds an engine over `catalog`. Resource labels are looked up under
    /// `config.label_scopes`, whatever scopes the catalog was built with.
    ///
    /// 基于 `catalog` 构建引擎。资源标签在 `config.label_scopes` 下查找，与目录构建时的作用域无关。
    pub fn new(catalog: Arc<C>, config: EngineConfig) -> Self {
        let label_scopes = config.label_scopes.iter().map(|s| KeyPath::parse(s)).collect();
        Self {
            catalog,
            config,
            label_scopes,
        }
    }

    /// Builds an engine over the snapshot currently published by `shared`.
    pub fn from_shared(shared: &SharedCatalog<C>, config: EngineConfig) -> Self {
        Self::new(shared.snapshot(), config)
    }

    /// Returns an engine with the same configuration over another catalog.
    pub fn with_catalog(&self, catalog: Arc<C>) -> Self {
        Self::new(catalog, self.config.clone())
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The candidate chain for `context` reporting `status`, under the configured root.
    pub fn candidates(&self, context: &ResolutionContext, status: Status) -> Vec<KeyPath> {
        generate_candidates_under(&self.config.root, context, status)
    }

    /// Resolves the message for the outcome recorded on `context`.
    pub fn resolve(
        &self,
        context: &ResolutionContext,
        options: &ResolveOptions,
    ) -> Result<ResolutionResult> {
        self.resolve_as(context, context.status, options)
    }

    /// Resolves and renders the message for `context` reporting `status`.
    ///
    /// The primary key is `options.key`, else the most specific candidate. The
    /// fallback chain is `options.fallback_keys`, else the generated candidates.
    /// Placeholders are filled from caller values first, then the derived
    /// resource label, then the matched entry's defaults.
    ///
    /// 解析并渲染 `context` 报告 `status` 时的消息。
    /// 主键为 `options.key`，否则为最具体的候选键。回退链为 `options.fallback_keys`，
    /// 否则为生成的候选键。占位符依次从调用方的值、派生的资源标签、匹配条目的默认值中填充。
    pub fn resolve_as(
        &self,
        context: &ResolutionContext,
        status: Status,
        options: &ResolveOptions,
    ) -> Result<ResolutionResult> {
        let candidates = self.candidates(context, status);
        let primary = match &options.key {
            Some(key) => key.clone(),
            None => candidates.first().cloned().unwrap_or_else(KeyPath::empty),
        };
        let fallbacks = options.fallback_keys.as_deref().unwrap_or(&candidates);

        let resolved = resolver::resolve(
            self.catalog.as_ref(),
            &primary,
            fallbacks,
            options.default.as_deref(),
        )?;

        let substitutions = SubstitutionSet::layered(
            &options.substitutions,
            &self.derived_substitutions(context),
            &resolved.defaults,
        );
        let rendered = interpolate(&resolved.template, &substitutions)
            .map_err(|e| e.at_key(&resolved.key))?;

        debug!(
            key = %resolved.key,
            status = %status,
            literal_default = resolved.key.is_empty(),
            "rendered flash message"
        );

        Ok(ResolutionResult {
            key: resolved.key,
            template: resolved.template,
            rendered,
            attempted: resolved.attempted,
        })
    }

    /// Resolves the message for `context` and wraps it for the flash slot its
    /// status maps to.
    ///
    /// 为 `context` 解析消息，并将其包装到其状态对应的 flash 槽位中。
    pub fn flash(
        &self,
        context: &ResolutionContext,
        timing: Timing,
        options: &ResolveOptions,
    ) -> Result<FlashMessage> {
        let result = self.resolve(context, options)?;
        Ok(FlashMessage {
            slot: context.status.flash_slot(),
            timing,
            text: result.rendered,
        })
    }

    /// Values derived from the context: the resource label under the
    /// configured placeholder name, falling back to the raw resource name.
    fn derived_substitutions(&self, context: &ResolutionContext) -> SubstitutionSet {
        let mut derived = SubstitutionSet::new();
        if let Some(resource) = context.resource_name() {
            let label = self
                .catalog
                .model_label_in(resource, &self.label_scopes)
                .unwrap_or(resource);
            derived.insert(self.config.resource_placeholder.clone(), label);
        }
        derived
    }
}
