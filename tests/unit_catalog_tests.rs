//! # Catalog Unit Tests / 目录单元测试
//!
//! Tests for building catalogs from TOML and JSON, nested lookups, model
//! labels, merging and snapshot swapping.
//!
//! 测试从 TOML 和 JSON 构建目录、嵌套查找、模型标签、合并以及快照替换。

mod common;

use flash_resolver::core::catalog::{CatalogEntry, Lookup};
use flash_resolver::{Catalog, CatalogError, KeyPath, MessageCatalog, SharedCatalog};

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_leaf_is_an_entry() {
        let catalog = common::sample_catalog();
        let lookup = catalog.lookup(&KeyPath::parse("flash.products.create.success"));
        assert_eq!(lookup.entry().map(|e| e.template.as_str()), Some("%{resourceName} created!"));
    }

    #[test]
    fn test_scope_is_not_an_entry() {
        let catalog = common::sample_catalog();
        assert_eq!(catalog.lookup(&KeyPath::parse("flash.products")), Lookup::Scope);
        assert_eq!(catalog.lookup(&KeyPath::parse("flash")), Lookup::Scope);
    }

    #[test]
    fn test_missing_and_overlong_paths() {
        let catalog = common::sample_catalog();
        assert_eq!(catalog.lookup(&KeyPath::parse("flash.nope")), Lookup::Missing);
        // Walking past a leaf is a miss, not an error.
        assert_eq!(catalog.lookup(&KeyPath::parse("flash.success.more")), Lookup::Missing);
        assert_eq!(catalog.lookup(&KeyPath::empty()), Lookup::Missing);
    }

    #[test]
    fn test_entry_with_defaults() {
        let catalog = common::sample_catalog();
        let entry = catalog
            .lookup(&KeyPath::parse("flash.update.success"))
            .entry()
            .cloned()
            .unwrap();
        assert_eq!(entry.template, "%{resourceName} saved by %{actor}.");
        assert_eq!(entry.defaults.get("actor"), Some("the system"));
    }

    #[test]
    fn test_insert_builds_scopes_and_replaces_leaves() {
        let mut catalog = MessageCatalog::new();
        catalog.insert("flash.success", "OK");
        catalog.insert("flash.success.extra", "Deeper");

        assert_eq!(catalog.lookup(&KeyPath::parse("flash.success")), Lookup::Scope);
        assert_eq!(
            catalog.lookup(&KeyPath::parse("flash.success.extra")).entry(),
            Some(&CatalogEntry::new("Deeper"))
        );
        assert_eq!(catalog.len(), 1);
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_json_and_toml_build_the_same_catalog() {
        let toml = MessageCatalog::from_toml_str(
            r#"
            [flash.create]
            success = "Created."
            "#,
        )
        .unwrap();
        let json = MessageCatalog::from_json_str(r#"{"flash":{"create":{"success":"Created."}}}"#).unwrap();
        assert_eq!(toml, json);
    }

    #[test]
    fn test_numeric_defaults_are_stringified() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
            [flash.success]
            _template = "%{count} items"
            _defaults = { count = 3 }
            "#,
        )
        .unwrap();
        let entry = catalog.lookup(&KeyPath::parse("flash.success")).entry().unwrap();
        assert_eq!(entry.defaults.get("count"), Some("3"));
    }

    #[test]
    fn test_non_string_leaf_is_rejected() {
        let err = MessageCatalog::from_toml_str("[flash]\nsuccess = 42\n").unwrap_err();
        match err {
            CatalogError::InvalidValue { path, kind } => {
                assert_eq!(path, "flash.success");
                assert_eq!(kind, "number");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_array_leaf_is_rejected() {
        assert!(matches!(
            MessageCatalog::from_json_str(r#"{"flash":{"success":["a","b"]}}"#),
            Err(CatalogError::InvalidValue { kind: "array", .. })
        ));
    }

    #[test]
    fn test_top_level_must_be_a_table() {
        assert!(MessageCatalog::from_json_str(r#""just a string""#).is_err());
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        assert!(matches!(
            MessageCatalog::from_toml_str("[flash"),
            Err(CatalogError::Toml(_))
        ));
        assert!(matches!(
            MessageCatalog::from_json_str("{"),
            Err(CatalogError::Json(_))
        ));
    }
}

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn test_label_by_exact_name() {
        let catalog = common::sample_catalog();
        assert_eq!(catalog.model_label("products"), Some("Product"));
    }

    #[test]
    fn test_label_by_singular_name() {
        let catalog = common::sample_catalog();
        assert_eq!(catalog.model_label("users"), Some("User"));
    }

    #[test]
    fn test_missing_label() {
        let catalog = common::sample_catalog();
        assert_eq!(catalog.model_label("orders"), None);
    }

    #[test]
    fn test_label_scopes_are_searched_in_order() {
        let catalog = MessageCatalog::new()
            .with("activemodel.models.session", "Session (model)")
            .with("models.session", "Session (plain)");
        assert_eq!(catalog.model_label("session"), Some("Session (model)"));

        let reordered = catalog.with_label_scopes(["models", "activemodel.models"]);
        assert_eq!(reordered.model_label("session"), Some("Session (plain)"));
    }

    #[test]
    fn test_pluralized_label_uses_singular_form() {
        let catalog = MessageCatalog::new()
            .with("activerecord.models.category.one", "Category")
            .with("activerecord.models.category.other", "Categories");
        assert_eq!(catalog.model_label("categories"), Some("Category"));
    }
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn test_later_values_win_and_scopes_combine() {
        let mut base = MessageCatalog::new()
            .with("flash.success", "OK")
            .with("flash.create.success", "Created.");
        let overlay = MessageCatalog::new()
            .with("flash.success", "All good.")
            .with("flash.update.success", "Updated.");

        base.merge(overlay);

        let template = |key: &str| {
            base.lookup(&KeyPath::parse(key))
                .entry()
                .map(|e| e.template.clone())
        };
        assert_eq!(template("flash.success").as_deref(), Some("All good."));
        assert_eq!(template("flash.create.success").as_deref(), Some("Created."));
        assert_eq!(template("flash.update.success").as_deref(), Some("Updated."));
        assert_eq!(base.len(), 3);
    }
}

#[cfg(test)]
mod shared_catalog_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_replace_keeps_old_snapshots_intact() {
        let shared = SharedCatalog::new(MessageCatalog::new().with("flash.success", "v1"));
        let before = shared.snapshot();

        let replaced = shared.replace(MessageCatalog::new().with("flash.success", "v2"));
        let after = shared.snapshot();

        assert!(Arc::ptr_eq(&before, &replaced));
        let key = KeyPath::parse("flash.success");
        assert_eq!(before.lookup(&key).entry().unwrap().template, "v1");
        assert_eq!(after.lookup(&key).entry().unwrap().template, "v2");
    }
}
