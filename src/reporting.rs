//! # Reporting Module / 报告模块
//!
//! This module handles printing resolution results to the console, with
//! colored output and internationalized labels.
//!
//! 此模块处理将解析结果打印到控制台，支持彩色输出和国际化标签。

pub mod console;

// Re-export common reporting functions
pub use console::{format_explanation, print_candidates, print_error, print_result};
