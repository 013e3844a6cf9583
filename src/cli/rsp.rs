//! # create-rsp 子命令 CLI 定义
//!
//! 交互式生成可复用的响应文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rsp.rs`

use clap::Args;
use std::path::PathBuf;

/// create-rsp 子命令参数
#[derive(Args, Debug)]
pub struct CreateRspArgs {
    /// Destination file for the generated bundle invocation
    #[arg(default_value = "default.rsp")]
    pub file: PathBuf,
}
