//! # Key Candidate Generator / 候选键生成器
//!
//! Derives the ordered lookup keys for a context, from most specific to least
//! specific. For `admin/products#create` reporting success the chain is:
//!
//! 为上下文推导有序的查找键，从最具体到最通用。对于报告成功的
//! `admin/products#create`，候选链如下：
//!
//! ```text
//! flash.admin.products.create.success
//! flash.products.create.success
//! flash.create.success
//! flash.success
//! ```

use crate::core::models::{KeyPath, ResolutionContext, Status};

/// The root segment every generated key starts with.
pub const DEFAULT_ROOT: &str = "flash";

/// Generates the candidate chain under the default `flash` root.
///
/// The result is never empty and never contains duplicates. An empty component
/// path degrades to `[flash.<action>.<status>, flash.<status>]`.
pub fn generate_candidates(context: &ResolutionContext, status: Status) -> Vec<KeyPath> {
    generate_candidates_under(DEFAULT_ROOT, context, status)
}

/// Generates the candidate chain under a custom root segment.
///
/// 在自定义根段下生成候选链。
pub fn generate_candidates_under(
    root: &str,
    context: &ResolutionContext,
    status: Status,
) -> Vec<KeyPath> {
    let status = status.as_str();
    let action = context.action.as_str();

    let full = keyed(root, context.component_path.iter().map(String::as_str), action, status);
    let last_only = keyed(root, context.component_path.last().map(String::as_str), action, status);
    let action_only = keyed(root, None::<&str>, action, status);
    let status_only = KeyPath::new([root, status]);

    let mut candidates: Vec<KeyPath> = Vec::with_capacity(4);
    for key in [full, last_only, action_only, status_only] {
        // First occurrence wins; the chain is at most four long.
        if !candidates.contains(&key) {
            candidates.push(key);
        }
    }
    candidates
}

/// `root.<component segments>.action.status`
fn keyed<'a>(
    root: &str,
    component: impl IntoIterator<Item = &'a str>,
    action: &str,
    status: &str,
) -> KeyPath {
    let mut segments = vec![root.to_string()];
    segments.extend(component.into_iter().map(str::to_string));
    segments.push(action.to_string());
    segments.push(status.to_string());
    KeyPath::new(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_collapses_last_only_candidate() {
        let ctx = ResolutionContext::new(["products"], "create", Status::Success).unwrap();
        let keys: Vec<String> = generate_candidates(&ctx, Status::Success)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            keys,
            vec![
                "flash.products.create.success",
                "flash.create.success",
                "flash.success"
            ]
        );
    }

    #[test]
    fn custom_root_is_used_for_every_candidate() {
        let ctx = ResolutionContext::new(["admin", "users"], "destroy", Status::Failure).unwrap();
        let keys = generate_candidates_under("messages", &ctx, Status::Failure);
        assert!(keys.iter().all(|k| k.segments()[0] == "messages"));
        assert_eq!(keys.last().unwrap().to_string(), "messages.failure");
    }
}
