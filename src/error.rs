//! # 统一错误处理模块
//!
//! 定义 cbundle 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cbundle 统一错误类型
#[derive(Error, Debug)]
pub enum BundleError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to walk directory: {path}")]
    WalkError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 交互输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read from standard input")]
    InputError {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BundleError>;
