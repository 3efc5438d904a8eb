//! # Models Unit Tests / 数据模型单元测试
//!
//! Tests for contexts, key paths, statuses and options.
//! 测试上下文、键路径、状态和选项。

use flash_resolver::{KeyPath, ResolutionContext, ResolveError, ResolveOptions, Status};

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("success".parse::<Status>().unwrap(), Status::Success);
        assert_eq!(" FAILURE ".parse::<Status>().unwrap(), Status::Failure);
        assert!(matches!(
            "maybe".parse::<Status>(),
            Err(ResolveError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_status_slots() {
        assert_eq!(Status::Success.flash_slot(), "notice");
        assert_eq!(Status::Failure.flash_slot(), "alert");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Failure).unwrap(), "\"failure\"");
    }
}

#[cfg(test)]
mod key_path_tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        let key = KeyPath::parse("flash.products.create.success");
        assert_eq!(key.len(), 4);
        assert_eq!(key.to_string(), "flash.products.create.success");
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        assert_eq!(KeyPath::parse(".flash..success."), KeyPath::new(["flash", "success"]));
        assert!(KeyPath::parse("").is_empty());
    }

    #[test]
    fn test_key_path_serializes_as_dotted_string() {
        let key = KeyPath::parse("flash.success");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"flash.success\"");
        let back: KeyPath = serde_json::from_str("\"flash.success\"").unwrap();
        assert_eq!(back, key);
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn test_empty_segment_is_rejected() {
        let err = ResolutionContext::new(["admin", ""], "create", Status::Success).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidContext { .. }));
    }

    #[test]
    fn test_empty_action_is_rejected() {
        assert!(ResolutionContext::new(["admin"], " ", Status::Success).is_err());
    }

    #[test]
    fn test_dotted_segment_is_rejected() {
        // One segment per key level: "admin.products" would display like two
        // levels but could never be found in the catalog.
        let err = ResolutionContext::new(["admin.products"], "create", Status::Success).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid resolution context: component path segment 0 contains '.'"
        );
    }

    #[test]
    fn test_dotted_action_is_rejected() {
        let err = ResolutionContext::new(["admin"], "bulk.create", Status::Success).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidContext { .. }));
        assert!(err.to_string().contains("action must not contain '.'"));
    }

    #[test]
    fn test_uppercase_segment_is_rejected() {
        let err = ResolutionContext::new(["admin", "Products"], "create", Status::Success).unwrap_err();
        assert!(err.to_string().contains("segment 1 is not lowercase"));
    }

    #[test]
    fn test_from_component_normalises_what_new_rejects() {
        let ctx =
            ResolutionContext::from_component("Admin.Products", "create", Status::Success).unwrap();
        assert_eq!(ctx.component_path, vec!["admin", "products"]);
    }

    #[test]
    fn test_from_namespaced_component() {
        let ctx = ResolutionContext::from_component(
            "Admin::ProductCategoriesController",
            "create",
            Status::Success,
        )
        .unwrap();
        assert_eq!(ctx.component_path, vec!["admin", "product_categories"]);
    }

    #[test]
    fn test_from_slash_component() {
        let ctx = ResolutionContext::from_component("admin/products", "update", Status::Failure).unwrap();
        assert_eq!(ctx.component_path, vec!["admin", "products"]);
        assert_eq!(ctx.status, Status::Failure);
    }

    #[test]
    fn test_from_empty_component() {
        let ctx = ResolutionContext::from_component("", "create", Status::Success).unwrap();
        assert!(ctx.component_path.is_empty());
        assert_eq!(ctx.resource_name(), None);
    }

    #[test]
    fn test_resource_name_defaults_to_last_segment() {
        let ctx = ResolutionContext::new(["admin", "products"], "create", Status::Success).unwrap();
        assert_eq!(ctx.resource_name(), Some("products"));
        let ctx = ctx.with_resource("product");
        assert_eq!(ctx.resource_name(), Some("product"));
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ResolveOptions::new()
            .key("flash.custom")
            .fallback_keys(["flash.a", "flash.b"])
            .default_text("Fallback")
            .var("actor", "Jane");

        assert_eq!(options.key, Some(KeyPath::parse("flash.custom")));
        assert_eq!(options.fallback_keys.as_ref().map(Vec::len), Some(2));
        assert_eq!(options.default.as_deref(), Some("Fallback"));
        assert_eq!(options.substitutions.get("actor"), Some("Jane"));
    }
}
