//! # Error Types / 错误类型
//!
//! Failures surfaced by the resolution core and by catalog construction.
//! 解析核心和目录构建所产生的失败。

use crate::core::models::KeyPath;
use thiserror::Error;

/// Joins attempted keys for the error message.
fn join_keys(keys: &[KeyPath]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `key` for an error message, naming the literal default when empty.
fn describe_key(key: &Option<KeyPath>) -> String {
    match key {
        Some(k) if !k.is_empty() => format!(" in '{}'", k),
        Some(_) => " in the literal default".to_string(),
        None => String::new(),
    }
}

/// Errors returned by candidate generation, resolution and interpolation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No candidate key matched and no literal default was supplied.
    /// 没有候选键匹配，也没有提供字面默认值。
    #[error("no translation found, tried: [{}]", join_keys(.attempted))]
    KeyNotFound { attempted: Vec<KeyPath> },

    /// The template references a name nothing binds.
    /// 模板引用了一个没有任何值绑定的名称。
    #[error("missing value for placeholder '%{{{name}}}'{}", describe_key(.key))]
    MissingPlaceholder { name: String, key: Option<KeyPath> },

    /// The template is not well formed.
    /// 模板格式不正确。
    #[error("malformed template at byte {offset}{}: {reason}", describe_key(.key))]
    MalformedTemplate {
        offset: usize,
        reason: String,
        key: Option<KeyPath>,
    },

    /// The context could not be built.
    /// 无法构建上下文。
    #[error("invalid resolution context: {reason}")]
    InvalidContext { reason: String },
}

impl ResolveError {
    /// Attaches the matched key to template-level errors.
    pub(crate) fn at_key(self, at: &KeyPath) -> Self {
        match self {
            ResolveError::MissingPlaceholder { name, key: None } => {
                ResolveError::MissingPlaceholder {
                    name,
                    key: Some(at.clone()),
                }
            }
            ResolveError::MalformedTemplate {
                offset,
                reason,
                key: None,
            } => ResolveError::MalformedTemplate {
                offset,
                reason,
                key: Some(at.clone()),
            },
            other => other,
        }
    }
}

/// Errors raised while building a catalog from structured data.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that is neither a string, an entry table nor a scope.
    #[error("unsupported {kind} value at '{path}', expected a string or a table")]
    InvalidValue { path: String, kind: &'static str },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
