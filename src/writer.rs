//! # 打包写入器
//!
//! 对选中的文件排序，并把内容串接写入单个输出文件。
//!
//! ## 功能
//! - 按路径名或扩展名稳定排序
//! - 写入作者头、起止标记和文件间空行分隔
//! - 可选来源注释与空行删除
//! - 任一文件读写失败即整体中止，不做部分成功报告
//!
//! ## 依赖关系
//! - 被 `commands/bundle.rs` 使用
//! - 使用 `models/`, `error.rs`
//! - 使用 `utils/progress.rs`

use crate::error::{BundleError, Result};
use crate::models::{BundleConfig, SortMode};
use crate::utils::progress;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 按配置的排序方式整理文件顺序
pub fn sort_files(mut files: Vec<PathBuf>, mode: SortMode) -> Vec<PathBuf> {
    match mode {
        // 稳定排序：扩展名相同的文件保持原有相对顺序
        SortMode::Type => files.sort_by_key(|p| extension_key(p)),
        SortMode::Name => files.sort_by_key(|p| p.display().to_string()),
    }
    files
}

/// 小写扩展名（带点）排序键；无扩展名的文件排最前
fn extension_key(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// 把排序后的文件串接写入目标文件
pub fn write_bundle(files: &[PathBuf], config: &BundleConfig) -> Result<()> {
    let file = File::create(&config.output).map_err(|e| BundleError::FileWriteError {
        path: config.output.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    write_line(
        &mut writer,
        &format!("// Author: {}", config.author),
        &config.output,
    )?;
    write_line(&mut writer, "// Bundled Code Starts Here", &config.output)?;
    write_line(&mut writer, "", &config.output)?;

    let pb = progress::create_progress_bar(files.len() as u64, "Bundling");

    for path in files {
        if config.note {
            let rel = relative_to_root(path, &config.root);
            write_line(&mut writer, &format!("// File: {}", rel), &config.output)?;
        }

        let content = fs::read_to_string(path).map_err(|e| BundleError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        for line in content.lines() {
            // 删除空行是整行过滤，保留行原样写出
            if config.remove_empty_lines && line.trim().is_empty() {
                continue;
            }
            write_line(&mut writer, line, &config.output)?;
        }

        // 文件之间固定一个空行分隔
        write_line(&mut writer, "", &config.output)?;
        pb.inc(1);
    }

    pb.finish_and_clear();

    write_line(&mut writer, "// Bundled Code Ends Here", &config.output)?;

    writer.flush().map_err(|e| BundleError::FileWriteError {
        path: config.output.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 相对根目录的展示路径；不在其下时原样返回
fn relative_to_root(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn write_line<W: Write>(writer: &mut W, line: &str, output: &Path) -> Result<()> {
    writeln!(writer, "{}", line).map_err(|e| BundleError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })
}
