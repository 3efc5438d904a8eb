//! # Fallback Resolver / 回退解析器
//!
//! Walks the primary key and then the fallback chain against a catalog and
//! returns the first template found.
//!
//! 依次针对目录尝试主键和回退链，并返回找到的第一个模板。

use crate::core::catalog::{Catalog, CatalogEntry, Lookup};
use crate::core::error::ResolveError;
use crate::core::models::{KeyPath, SubstitutionSet};
use tracing::{debug, trace};

/// A template selected by [`resolve`], before interpolation.
/// 由 [`resolve`] 选出的模板（插值之前）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The matched key, empty when the literal default was used.
    pub key: KeyPath,
    pub template: String,
    /// Interpolation defaults declared next to the matched entry.
    pub defaults: SubstitutionSet,
    /// Keys looked up, in order, up to and including the match.
    pub attempted: Vec<KeyPath>,
}

impl Resolved {
    fn from_entry(key: KeyPath, entry: &CatalogEntry, attempted: Vec<KeyPath>) -> Self {
        Self {
            key,
            template: entry.template.clone(),
            defaults: entry.defaults.clone(),
            attempted,
        }
    }
}

/// Resolves the first key present in `catalog`.
///
/// `primary` is tried first, then `fallbacks` in order, skipping any key
/// already tried. A key reaching a nested scope is a miss. When every key
/// misses, `explicit_default` is used as the template with an empty key;
/// without it the call fails with `KeyNotFound` listing every attempted key.
///
/// 在 `catalog` 中解析第一个存在的键。
///
/// 先尝试 `primary`，然后按顺序尝试 `fallbacks`，跳过已尝试过的键。到达嵌套作用域的键视为未命中。
/// 所有键都未命中时，以 `explicit_default` 作为模板并使用空键；
/// 若未提供，则返回列出所有已尝试键的 `KeyNotFound`。
pub fn resolve<C: Catalog + ?Sized>(
    catalog: &C,
    primary: &KeyPath,
    fallbacks: &[KeyPath],
    explicit_default: Option<&str>,
) -> Result<Resolved, ResolveError> {
    let mut attempted: Vec<KeyPath> = Vec::with_capacity(fallbacks.len() + 1);

    for key in std::iter::once(primary).chain(fallbacks) {
        if attempted.contains(key) {
            continue;
        }
        attempted.push(key.clone());

        match catalog.lookup(key) {
            Lookup::Entry(entry) => {
                debug!(key = %key, attempts = attempted.len(), "resolved flash message");
                return Ok(Resolved::from_entry(key.clone(), entry, attempted));
            }
            Lookup::Scope => trace!(key = %key, "key names a scope, falling through"),
            Lookup::Missing => trace!(key = %key, "key missing, falling through"),
        }
    }

    match explicit_default {
        Some(template) => {
            debug!(attempts = attempted.len(), "no key matched, using literal default");
            Ok(Resolved {
                key: KeyPath::empty(),
                template: template.to_string(),
                defaults: SubstitutionSet::new(),
                attempted,
            })
        }
        None => Err(ResolveError::KeyNotFound { attempted }),
    }
}
