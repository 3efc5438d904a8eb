//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints resolution results, candidate chains and failures to
//! the console, using color to tell matched keys from misses.
//!
//! 此模块将解析结果、候选链和失败信息打印到控制台，使用颜色区分匹配键与未命中的键。

use colored::*;

use crate::core::error::ResolveError;
use crate::core::models::{KeyPath, ResolutionResult};
use crate::infra::t;

/// Builds the `--explain` trace of a resolution: every attempted key, with
/// the matched key highlighted.
///
/// 构建解析过程的 `--explain` 跟踪：列出所有尝试过的键，并高亮匹配的键。
///
/// # Output Format / 输出格式
/// ```text
/// --- Lookup Trace ---
///   1. miss     flash.admin.products.create.success
///   2. miss     flash.products.create.success
///   3. match    flash.create.success
/// ```
pub fn format_explanation(result: &ResolutionResult, locale: &str) -> String {
    let mut lines = vec![t!("report.trace_banner", locale = locale).bold().to_string()];

    for (i, key) in result.attempted.iter().enumerate() {
        let matched = !result.key.is_empty() && *key == result.key;
        let (label, key_str) = if matched {
            (
                t!("report.match", locale = locale).green().bold(),
                key.to_string().green(),
            )
        } else {
            (
                t!("report.miss", locale = locale).dimmed(),
                key.to_string().dimmed(),
            )
        };
        lines.push(format!("  {}. {:<8} {}", i + 1, label, key_str));
    }

    if result.used_literal_default() {
        lines.push(format!(
            "  -  {}",
            t!("report.literal_default", locale = locale).yellow()
        ));
    }
    lines.join("\n")
}

/// Prints the rendered text of a resolution, preceded by the lookup trace
/// when `explain` is set.
///
/// 打印解析的渲染文本；设置 `explain` 时先打印查找跟踪。
pub fn print_result(result: &ResolutionResult, explain: bool, locale: &str) {
    if explain {
        println!("{}", format_explanation(result, locale));
        println!(
            "{} {}",
            t!("report.template_label", locale = locale).cyan(),
            result.template
        );
    }
    println!("{}", result.rendered);
}

/// Prints a candidate chain, most specific first.
pub fn print_candidates(candidates: &[KeyPath], locale: &str) {
    println!("{}", t!("report.candidates_banner", locale = locale).bold());
    for (i, key) in candidates.iter().enumerate() {
        println!("  {}. {}", i + 1, key);
    }
}

/// Prints a resolution failure to stderr with the diagnostics it carries.
///
/// 将解析失败及其携带的诊断信息打印到 stderr。
pub fn print_error(error: &ResolveError, locale: &str) {
    eprintln!("{} {}", t!("report.error_label", locale = locale).red().bold(), error);

    if let ResolveError::KeyNotFound { attempted } = error {
        eprintln!("{}", t!("report.attempted_keys", locale = locale).yellow());
        for key in attempted {
            eprintln!("  - {}", key);
        }
        eprintln!("{}", t!("report.hint_default", locale = locale).dimmed());
    }
}
