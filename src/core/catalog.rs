//! # Message Catalog Module / 消息目录模块
//!
//! The read-only, nested key → template store the resolver queries, together
//! with the hot-reload handle used to publish new snapshots.
//!
//! 解析器所查询的只读嵌套“键 → 模板”存储，以及用于发布新快照的热重载句柄。
//!
//! ## Data shape / 数据形态
//!
//! A string value is a template. A table holding a string `_template` key is an
//! entry with per-key interpolation defaults under `_defaults`. Any other table
//! is a scope.
//!
//! ```toml
//! [flash.products.create]
//! success = "%{resourceName} created!"
//!
//! [flash.update.success]
//! _template = "%{resourceName} saved by %{actor}."
//! _defaults = { actor = "the system" }
//!
//! [activerecord.models]
//! products = "Product"
//! ```

use crate::core::error::CatalogError;
use crate::core::models::{KeyPath, SubstitutionSet};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Key marking a table as an entry rather than a scope.
pub const TEMPLATE_KEY: &str = "_template";
/// Key holding an entry's interpolation defaults.
pub const DEFAULTS_KEY: &str = "_defaults";

/// Scopes model labels are looked up under, in order.
pub const DEFAULT_LABEL_SCOPES: [&str; 3] = ["activerecord.models", "activemodel.models", "models"];

/// A template together with the interpolation defaults declared next to it.
/// 模板以及与其一同声明的插值默认值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub template: String,
    pub defaults: SubstitutionSet,
}

impl CatalogEntry {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            defaults: SubstitutionSet::new(),
        }
    }

    pub fn with_defaults(template: impl Into<String>, defaults: SubstitutionSet) -> Self {
        Self {
            template: template.into(),
            defaults,
        }
    }
}

/// One node of the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    Entry(CatalogEntry),
    Scope(BTreeMap<String, CatalogNode>),
}

/// What a key path reaches.
/// 键路径所到达的内容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A leaf template. / 叶子模板。
    Entry(&'a CatalogEntry),
    /// A nested scope; treated as a miss by the resolver.
    /// 嵌套作用域；解析器将其视为未命中。
    Scope,
    /// Nothing at that path. / 该路径下没有内容。
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn entry(self) -> Option<&'a CatalogEntry> {
        match self {
            Lookup::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Read-only access the resolver needs from a catalog.
///
/// Implementations must not change while shared; publish a new value instead
/// (see [`SharedCatalog`]).
///
/// 解析器对目录所需的只读访问接口。
/// 实现在共享期间不得改变；应改为发布新值（参见 [`SharedCatalog`]）。
pub trait Catalog: Send + Sync {
    /// Looks up a fully qualified key.
    fn lookup(&self, key: &KeyPath) -> Lookup<'_>;

    /// Returns the human-readable label of a model or component, if any.
    fn model_label(&self, resource: &str) -> Option<&str>;

    /// Like [`Catalog::model_label`], but searching the given scopes in order.
    /// Implementations without scoped labels fall back to `model_label`.
    fn model_label_in(&self, resource: &str, _scopes: &[KeyPath]) -> Option<&str> {
        self.model_label(resource)
    }
}

/// The in-memory catalog implementation.
///
/// 内存中的目录实现。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    root: BTreeMap<String, CatalogNode>,
    label_scopes: Vec<KeyPath>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            root: BTreeMap::new(),
            label_scopes: DEFAULT_LABEL_SCOPES.iter().map(|s| KeyPath::parse(s)).collect(),
        }
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scopes model labels are looked up under.
    pub fn with_label_scopes<I, K>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        self.label_scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn label_scopes(&self) -> &[KeyPath] {
        &self.label_scopes
    }

    /// Parses a TOML document into a catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let value: Value = toml::from_str(content)?;
        Self::from_value(&value)
    }

    /// Parses a JSON document into a catalog.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Builds a catalog from an already parsed document. The top level must be a table.
    ///
    /// 从已解析的文档构建目录。顶层必须是一个表。
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        match convert_node(value, &KeyPath::empty())? {
            CatalogNode::Scope(root) => Ok(Self {
                root,
                ..Self::default()
            }),
            CatalogNode::Entry(_) => Err(CatalogError::InvalidValue {
                path: "<root>".to_string(),
                kind: "entry",
            }),
        }
    }

    /// Inserts a template at `key`, creating scopes on the way. An entry sitting
    /// where a scope is needed is replaced.
    pub fn insert(&mut self, key: impl Into<KeyPath>, template: impl Into<String>) -> &mut Self {
        self.insert_entry(key, CatalogEntry::new(template))
    }

    /// Inserts a full entry at `key`. An empty key is ignored.
    pub fn insert_entry(&mut self, key: impl Into<KeyPath>, entry: CatalogEntry) -> &mut Self {
        let key = key.into();
        if let Some((last, parents)) = key.segments().split_last() {
            insert_at(&mut self.root, parents, last, entry);
        }
        self
    }

    /// Builder form of [`MessageCatalog::insert`].
    pub fn with(mut self, key: impl Into<KeyPath>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Deep-merges `other` into `self`; values from `other` win.
    ///
    /// 将 `other` 深度合并到 `self` 中；`other` 中的值优先。
    pub fn merge(&mut self, other: MessageCatalog) {
        merge_scopes(&mut self.root, other.root);
    }

    /// Number of entries (leaf templates) in the catalog.
    pub fn len(&self) -> usize {
        count_entries(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn node(&self, key: &KeyPath) -> Option<&CatalogNode> {
        let (first, rest) = key.segments().split_first()?;
        let mut node = self.root.get(first)?;
        for segment in rest {
            match node {
                CatalogNode::Scope(children) => node = children.get(segment)?,
                CatalogNode::Entry(_) => return None,
            }
        }
        Some(node)
    }
}

impl Catalog for MessageCatalog {
    fn lookup(&self, key: &KeyPath) -> Lookup<'_> {
        match self.node(key) {
            Some(CatalogNode::Entry(entry)) => Lookup::Entry(entry),
            Some(CatalogNode::Scope(_)) => Lookup::Scope,
            None => Lookup::Missing,
        }
    }

    fn model_label(&self, resource: &str) -> Option<&str> {
        self.model_label_in(resource, &self.label_scopes)
    }

    fn model_label_in(&self, resource: &str, scopes: &[KeyPath]) -> Option<&str> {
        let singular = singularize(resource);
        let mut names = vec![resource];
        if singular != resource {
            names.push(singular.as_str());
        }

        for scope in scopes {
            for name in &names {
                match self.node(&scope.child(*name)) {
                    Some(CatalogNode::Entry(entry)) => return Some(&entry.template),
                    // Pluralized labels: `{ one = "Product", other = "Products" }`.
                    Some(CatalogNode::Scope(forms)) => {
                        if let Some(CatalogNode::Entry(entry)) = forms.get("one") {
                            return Some(&entry.template);
                        }
                    }
                    None => {}
                }
            }
        }
        None
    }
}

/// Naive English singular used only as a second label lookup.
fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn convert_node(value: &Value, path: &KeyPath) -> Result<CatalogNode, CatalogError> {
    match value {
        Value::String(template) => Ok(CatalogNode::Entry(CatalogEntry::new(template.clone()))),
        Value::Object(map) => {
            if let Some(Value::String(template)) = map.get(TEMPLATE_KEY) {
                let defaults = match map.get(DEFAULTS_KEY) {
                    Some(Value::Object(defaults)) => {
                        let mut set = SubstitutionSet::new();
                        for (name, v) in defaults {
                            let at = path.child(DEFAULTS_KEY).child(name.clone());
                            set.insert(name.clone(), scalar_to_string(v, &at)?);
                        }
                        set
                    }
                    Some(other) => {
                        return Err(CatalogError::InvalidValue {
                            path: path.child(DEFAULTS_KEY).to_string(),
                            kind: kind_of(other),
                        });
                    }
                    None => SubstitutionSet::new(),
                };
                return Ok(CatalogNode::Entry(CatalogEntry::with_defaults(
                    template.clone(),
                    defaults,
                )));
            }

            let mut children = BTreeMap::new();
            for (name, child) in map {
                children.insert(name.clone(), convert_node(child, &path.child(name.clone()))?);
            }
            Ok(CatalogNode::Scope(children))
        }
        other => Err(CatalogError::InvalidValue {
            path: path.to_string(),
            kind: kind_of(other),
        }),
    }
}

/// Interpolation defaults may be written as numbers or booleans.
fn scalar_to_string(value: &Value, path: &KeyPath) -> Result<String, CatalogError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CatalogError::InvalidValue {
            path: path.to_string(),
            kind: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

fn insert_at(
    scope: &mut BTreeMap<String, CatalogNode>,
    parents: &[String],
    last: &str,
    entry: CatalogEntry,
) {
    match parents.split_first() {
        None => {
            scope.insert(last.to_string(), CatalogNode::Entry(entry));
        }
        Some((first, rest)) => {
            let node = scope
                .entry(first.clone())
                .or_insert_with(|| CatalogNode::Scope(BTreeMap::new()));
            if matches!(node, CatalogNode::Entry(_)) {
                *node = CatalogNode::Scope(BTreeMap::new());
            }
            if let CatalogNode::Scope(children) = node {
                insert_at(children, rest, last, entry);
            }
        }
    }
}

fn merge_scopes(into: &mut BTreeMap<String, CatalogNode>, from: BTreeMap<String, CatalogNode>) {
    for (name, incoming) in from {
        match (into.get_mut(&name), incoming) {
            (Some(CatalogNode::Scope(existing)), CatalogNode::Scope(children)) => {
                merge_scopes(existing, children);
            }
            (_, incoming) => {
                into.insert(name, incoming);
            }
        }
    }
}

fn count_entries(scope: &BTreeMap<String, CatalogNode>) -> usize {
    scope
        .values()
        .map(|node| match node {
            CatalogNode::Entry(_) => 1,
            CatalogNode::Scope(children) => count_entries(children),
        })
        .sum()
}

/// A catalog reference that can be swapped atomically.
///
/// Readers take a [`SharedCatalog::snapshot`] and keep using it for the whole
/// call; [`SharedCatalog::replace`] publishes a new snapshot without touching
/// the old one.
///
/// 可原子替换的目录引用。
/// 读取方获取一个快照并在整个调用期间使用它；`replace` 发布新快照而不改动旧快照。
#[derive(Debug)]
pub struct SharedCatalog<C = MessageCatalog> {
    current: RwLock<Arc<C>>,
}

impl<C> SharedCatalog<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Returns the catalog currently published.
    pub fn snapshot(&self) -> Arc<C> {
        // Only an Arc is ever written under the lock, so a poisoned guard still holds a valid value.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Publishes `catalog` and returns the snapshot it replaced.
    pub fn replace(&self, catalog: C) -> Arc<C> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

impl<C: Default> Default for SharedCatalog<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
