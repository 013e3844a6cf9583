//! # bundle 命令实现
//!
//! 选择、排序并打包源码文件。
//!
//! ## 功能
//! - 解析语言 token 并归并为单个打包配置
//! - 枚举工作目录下的候选文件
//! - 排序后串接写入输出文件
//!
//! ## 依赖关系
//! - 使用 `cli/bundle.rs` 定义的参数
//! - 使用 `models/`, `selector.rs`, `writer.rs`
//! - 使用 `utils/output.rs`

use crate::cli::bundle::BundleArgs;
use crate::error::{BundleError, Result};
use crate::models::{BundleConfig, Language, SortMode};
use crate::selector;
use crate::utils::output;
use crate::writer;

/// 执行 bundle 命令
pub fn execute(args: BundleArgs) -> Result<()> {
    output::print_header("Bundling Source Files");

    let config = build_config(args)?;

    let files = selector::select(&config)?;
    output::print_info(&format!("Found {} file(s) to bundle", files.len()));

    if files.is_empty() {
        output::print_warning("No files matched the requested languages; writing an empty bundle");
    }

    let ordered = writer::sort_files(files, config.sort);
    writer::write_bundle(&ordered, &config)?;

    output::print_separator();
    output::print_done(&format!(
        "Bundled {} file(s) into '{}'",
        ordered.len(),
        config.output.display()
    ));

    Ok(())
}

/// 把 CLI 参数归并为单个打包配置
fn build_config(args: BundleArgs) -> Result<BundleConfig> {
    let root = std::env::current_dir().map_err(|_| BundleError::DirectoryNotFound {
        path: ".".to_string(),
    })?;

    let languages: Vec<Language> = args
        .language
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(Language::parse)
        .collect();

    if languages.is_empty() {
        return Err(BundleError::InvalidArgument(
            "at least one language token is required".to_string(),
        ));
    }

    Ok(BundleConfig {
        root,
        languages,
        output: args.output,
        note: args.note,
        sort: SortMode::parse(&args.sort),
        remove_empty_lines: args.remove_empty_lines,
        author: args.author,
        verbose: args.verbose,
    })
}
