//! # Candidate Generator Unit Tests / 候选键生成器单元测试
//!
//! Tests for the ordering, deduplication and degradation rules of the key
//! candidate chain.
//!
//! 测试候选键链的排序、去重和降级规则。

use flash_resolver::core::candidates::{generate_candidates, generate_candidates_under};
use flash_resolver::{KeyPath, ResolutionContext, Status};

fn keys(candidates: &[KeyPath]) -> Vec<String> {
    candidates.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_nested_component_produces_four_candidates() {
        let ctx = ResolutionContext::new(["admin", "products"], "create", Status::Success).unwrap();
        let candidates = generate_candidates(&ctx, Status::Success);

        assert_eq!(
            keys(&candidates),
            vec![
                "flash.admin.products.create.success",
                "flash.products.create.success",
                "flash.create.success",
                "flash.success",
            ]
        );
    }

    #[test]
    fn test_status_argument_selects_the_outcome() {
        let ctx = ResolutionContext::new(["admin", "products"], "create", Status::Success).unwrap();
        let candidates = generate_candidates(&ctx, Status::Failure);

        assert!(candidates.iter().all(|k| k.segments().last().map(String::as_str) == Some("failure")));
        assert_eq!(candidates.last().unwrap().to_string(), "flash.failure");
    }

    #[test]
    fn test_deep_namespace_keeps_only_last_segment_in_second_candidate() {
        let ctx =
            ResolutionContext::new(["api", "v2", "admin", "orders"], "update", Status::Failure).unwrap();
        let candidates = generate_candidates(&ctx, Status::Failure);

        assert_eq!(
            keys(&candidates),
            vec![
                "flash.api.v2.admin.orders.update.failure",
                "flash.orders.update.failure",
                "flash.update.failure",
                "flash.failure",
            ]
        );
    }

    #[test]
    fn test_candidates_are_deterministic() {
        let ctx = ResolutionContext::new(["admin", "users"], "destroy", Status::Success).unwrap();
        assert_eq!(
            generate_candidates(&ctx, Status::Success),
            generate_candidates(&ctx, Status::Success)
        );
    }
}

#[cfg(test)]
mod degradation_tests {
    use super::*;

    #[test]
    fn test_empty_component_path_yields_two_candidates() {
        let ctx = ResolutionContext::new(Vec::<String>::new(), "create", Status::Success).unwrap();
        let candidates = generate_candidates(&ctx, Status::Success);

        assert_eq!(keys(&candidates), vec!["flash.create.success", "flash.success"]);
    }

    #[test]
    fn test_single_segment_yields_three_candidates() {
        let ctx = ResolutionContext::new(["products"], "create", Status::Success).unwrap();
        assert_eq!(generate_candidates(&ctx, Status::Success).len(), 3);
    }

    #[test]
    fn test_length_bounds_and_uniqueness_hold_for_many_shapes() {
        let paths: Vec<Vec<&str>> = vec![
            vec!["a"],
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["same", "same"],
            vec!["create"],
        ];

        for path in paths {
            for status in [Status::Success, Status::Failure] {
                let ctx = ResolutionContext::new(path.clone(), "create", status).unwrap();
                let candidates = generate_candidates(&ctx, status);

                assert!((2..=4).contains(&candidates.len()), "path {:?}", path);
                for (i, key) in candidates.iter().enumerate() {
                    assert!(!candidates[i + 1..].contains(key), "duplicate {} for {:?}", key, path);
                }
                // Each candidate is strictly shorter than the one before it.
                for pair in candidates.windows(2) {
                    assert!(pair[0].len() > pair[1].len(), "order broken for {:?}", path);
                }
            }
        }
    }

    #[test]
    fn test_repeated_segment_is_kept_in_full_path() {
        let ctx = ResolutionContext::new(["same", "same"], "show", Status::Success).unwrap();
        assert_eq!(
            keys(&generate_candidates(&ctx, Status::Success)),
            vec![
                "flash.same.same.show.success",
                "flash.same.show.success",
                "flash.show.success",
                "flash.success",
            ]
        );
    }

    #[test]
    fn test_custom_root() {
        let ctx = ResolutionContext::new(Vec::<String>::new(), "login", Status::Failure).unwrap();
        assert_eq!(
            keys(&generate_candidates_under("notices", &ctx, Status::Failure)),
            vec!["notices.login.failure", "notices.failure"]
        );
    }
}
