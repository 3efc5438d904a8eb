//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the resolver:
//! the structural context a message is requested from, key paths, substitution
//! sets, caller options and the results handed back to callers.
//!
//! 此模块定义了整个解析器中使用的核心数据结构：
//! 请求消息的结构化上下文、键路径、替换值集合、调用方选项以及返回给调用方的结果。

use crate::core::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The outcome of the action a message is reported for.
/// 消息所报告的操作结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The action completed. / 操作成功完成。
    Success,
    /// The action did not complete. / 操作未能完成。
    Failure,
}

impl Status {
    /// Returns the key segment used for this status.
    /// 返回此状态使用的键段。
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }

    /// Returns the flash slot a message with this status is stored under.
    /// 返回此状态的消息所存放的 flash 槽位。
    pub fn flash_slot(&self) -> &'static str {
        match self {
            Status::Success => "notice",
            Status::Failure => "alert",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Status::Success),
            "failure" => Ok(Status::Failure),
            other => Err(ResolveError::InvalidContext {
                reason: format!("unknown status '{}', expected 'success' or 'failure'", other),
            }),
        }
    }
}

/// An ordered sequence of segments identifying one catalog entry.
/// Displayed dot-joined, e.g. `flash.products.create.success`.
///
/// 标识一个目录条目的有序段序列。
/// 以点号连接显示，例如 `flash.products.create.success`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Creates a key path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The marker path carried by results rendered from a literal default.
    /// 由字面默认模板渲染的结果所携带的标记路径。
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Splits a dotted key such as `flash.create.success` into a path.
    /// Empty segments (`a..b`, leading or trailing dots) are dropped.
    pub fn parse(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<KeyPath> for String {
    fn from(key: KeyPath) -> Self {
        key.to_string()
    }
}

impl From<String> for KeyPath {
    fn from(dotted: String) -> Self {
        KeyPath::parse(&dotted)
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        KeyPath::parse(dotted)
    }
}

/// The structural location a message is requested from.
///
/// 请求消息时所处的结构化位置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
    /// Lowercase namespace segments of the component, e.g. `["admin", "products"]`.
    /// May be empty for a top-level component.
    /// 组件的小写命名空间段，例如 `["admin", "products"]`。顶层组件可为空。
    pub component_path: Vec<String>,
    /// The action name, e.g. `create`. / 操作名称，例如 `create`。
    pub action: String,
    /// The outcome being reported. / 所报告的结果。
    pub status: Status,
    /// Explicit resource name used for the label lookup. When `None`, the last
    /// component segment is used.
    /// 用于标签查找的显式资源名称。为 `None` 时使用最后一个组件段。
    #[serde(default)]
    pub resource: Option<String>,
}

impl ResolutionContext {
    /// Builds a validated context. Segments and the action must be non-empty
    /// and free of `.`, since each one becomes exactly one key segment.
    /// Segments must also be lowercase; use [`ResolutionContext::from_component`]
    /// to normalise a namespaced identifier.
    ///
    /// 构建经过校验的上下文。各段和操作名必须非空且不含 `.`，因为每个都恰好成为一个键段。
    /// 各段还必须为小写；如需规范化命名空间标识符，请使用 [`ResolutionContext::from_component`]。
    pub fn new<I, S>(
        component_path: I,
        action: impl Into<String>,
        status: Status,
    ) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let component_path: Vec<String> = component_path.into_iter().map(Into::into).collect();
        let action = action.into();

        if let Some(pos) = component_path.iter().position(|s| s.trim().is_empty()) {
            return Err(ResolveError::InvalidContext {
                reason: format!("component path segment {} is empty", pos),
            });
        }
        if let Some(pos) = component_path.iter().position(|s| s.contains('.')) {
            return Err(ResolveError::InvalidContext {
                reason: format!("component path segment {} contains '.'", pos),
            });
        }
        if let Some(pos) = component_path
            .iter()
            .position(|s| s.chars().any(char::is_uppercase))
        {
            return Err(ResolveError::InvalidContext {
                reason: format!("component path segment {} is not lowercase", pos),
            });
        }
        if action.trim().is_empty() {
            return Err(ResolveError::InvalidContext {
                reason: "action must not be empty".to_string(),
            });
        }
        if action.contains('.') {
            return Err(ResolveError::InvalidContext {
                reason: "action must not contain '.'".to_string(),
            });
        }

        Ok(Self {
            component_path,
            action,
            status,
            resource: None,
        })
    }

    /// Builds a context from a namespaced component identifier such as
    /// `Admin::ProductCategories` or `admin/products`. Segments are converted
    /// to snake_case, a trailing `Controller` suffix is dropped.
    ///
    /// 从命名空间组件标识符（例如 `Admin::ProductCategories` 或 `admin/products`）
    /// 构建上下文。各段被转换为 snake_case，并去掉末尾的 `Controller` 后缀。
    pub fn from_component(
        identifier: &str,
        action: impl Into<String>,
        status: Status,
    ) -> Result<Self, ResolveError> {
        let trimmed = identifier.trim();
        let trimmed = trimmed.strip_suffix("Controller").unwrap_or(trimmed);
        let segments: Vec<String> = trimmed
            .split("::")
            .flat_map(|part| part.split(['/', '.']))
            .filter(|part| !part.is_empty())
            .map(to_snake_case)
            .collect();
        Self::new(segments, action, status)
    }

    /// Sets the resource name used for the label lookup.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Returns the same context reporting a different outcome.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// The resource the label lookup is performed for: the explicit resource,
    /// else the last component segment.
    pub fn resource_name(&self) -> Option<&str> {
        self.resource
            .as_deref()
            .or_else(|| self.component_path.last().map(String::as_str))
    }
}

/// Converts `ProductCategories` into `product_categories`.
fn to_snake_case(s: &str) -> String {
    let mut snake = String::with_capacity(s.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if c == '-' {
            snake.push('_');
            prev_lower_or_digit = false;
        } else {
            snake.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    snake
}

/// Placeholder name → rendered value.
///
/// 占位符名称 → 渲染值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionSet(BTreeMap<String, String>);

impl SubstitutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(name.into(), value.to_string());
        self
    }

    /// Builder form of [`SubstitutionSet::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fills in every name from `lower` that `self` does not already bind.
    /// Values already present in `self` always win.
    ///
    /// 用 `lower` 中 `self` 尚未绑定的名称进行补充。`self` 中已有的值始终优先。
    pub fn merge_under(&mut self, lower: &SubstitutionSet) {
        for (name, value) in &lower.0 {
            self.0
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Builds the merged set: caller values override derived values, which
    /// override catalog defaults.
    ///
    /// 构建合并后的集合：调用方的值覆盖派生值，派生值覆盖目录默认值。
    pub fn layered(
        caller: &SubstitutionSet,
        derived: &SubstitutionSet,
        catalog_defaults: &SubstitutionSet,
    ) -> SubstitutionSet {
        let mut merged = caller.clone();
        merged.merge_under(derived);
        merged.merge_under(catalog_defaults);
        merged
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for SubstitutionSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Options a caller may pass alongside a context.
///
/// 调用方可随上下文一起传入的选项。
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Overrides the primary key (by default the most specific candidate).
    /// 覆盖主键（默认是最具体的候选键）。
    pub key: Option<KeyPath>,
    /// Replaces the generated fallback chain.
    /// 替换生成的回退链。
    pub fallback_keys: Option<Vec<KeyPath>>,
    /// A literal template used when no key matches.
    /// 没有键匹配时使用的字面模板。
    pub default: Option<String>,
    /// Values supplied by the caller; they take precedence over everything else.
    /// 调用方提供的值，优先级最高。
    pub substitutions: SubstitutionSet,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<KeyPath>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn fallback_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        self.fallback_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_text(mut self, text: impl Into<String>) -> Self {
        self.default = Some(text.into());
        self
    }

    pub fn var(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.substitutions.insert(name, value);
        self
    }
}

/// The outcome of one resolution call. Created fresh per call.
///
/// 一次解析调用的结果。每次调用都会新建。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    /// The matched key, or [`KeyPath::empty`] when the literal default was used.
    /// 匹配的键；使用字面默认值时为 [`KeyPath::empty`]。
    pub key: KeyPath,
    /// The raw template before interpolation. / 插值前的原始模板。
    pub template: String,
    /// The rendered text. / 渲染后的文本。
    pub rendered: String,
    /// Every key looked up, in order, up to and including the match.
    /// 按顺序查找过的所有键，直到并包括匹配的键。
    pub attempted: Vec<KeyPath>,
}

impl ResolutionResult {
    /// `true` when the text came from the caller's literal default.
    pub fn used_literal_default(&self) -> bool {
        self.key.is_empty()
    }
}

/// When a flash message should be shown.
/// flash 消息应在何时显示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// On the next request, after a redirect. / 在重定向后的下一次请求中。
    #[default]
    NextRequest,
    /// On the current response. / 在当前响应中。
    Now,
}

/// A rendered message placed into a flash slot.
/// 放入 flash 槽位的已渲染消息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub slot: &'static str,
    pub timing: Timing,
    pub text: String,
}
