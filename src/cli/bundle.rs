//! # bundle 子命令 CLI 定义
//!
//! 打包源码文件到单个输出文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bundle.rs`

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// bundle 子命令参数
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Programming languages to include (or 'all'), repeatable or comma separated
    #[arg(long, required = true, value_delimiter = ',', num_args = 1..)]
    pub language: Vec<String>,

    /// Filename for the bundled output file
    #[arg(long, default_value = "bundled_code.txt")]
    pub output: PathBuf,

    /// Prefix each file's content with a comment naming its source path
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub note: bool,

    /// Copy order of the bundled files: 'name' or 'type' (anything else falls back to 'name')
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Drop lines that are empty or whitespace-only
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub remove_empty_lines: bool,

    /// Author name written into the bundle header
    #[arg(long, default_value = "Unknown Author")]
    pub author: String,

    /// Print every enumerated file before filtering
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
