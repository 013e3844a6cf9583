//! # 数据模型模块
//!
//! 定义语言映射与打包配置数据模型。
//!
//! ## 依赖关系
//! - 被 `selector.rs`、`writer.rs` 和 `commands/` 使用
//! - 子模块: config, language

pub mod config;
pub mod language;

pub use config::{BundleConfig, SortMode};
pub use language::Language;
