//! # create-rsp 命令实现
//!
//! 交互式收集打包选项，并把等价的 bundle 命令行写入响应文件。
//!
//! ## 功能
//! - 逐项提示读取六个选项（空输入回落到默认值）
//! - 宽松解析布尔输入（无法解析时视为 false）
//! - 生成单行 bundle 调用并写入文件
//!
//! ## 依赖关系
//! - 使用 `cli/rsp.rs` 定义的参数
//! - 使用 `utils/output.rs`
//! - 与选择器/写入器无数据依赖

use crate::cli::rsp::CreateRspArgs;
use crate::error::{BundleError, Result};
use crate::utils::output;

use std::fs;
use std::io::{self, BufRead, Write};

const DEFAULT_LANGUAGES: &str = "all";
const DEFAULT_OUTPUT: &str = "bundled_code.txt";
const DEFAULT_SORT: &str = "name";
const DEFAULT_AUTHOR: &str = "Unknown Author";

/// 交互式收集到的应答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RspAnswers {
    pub languages: String,
    pub output: String,
    pub note: bool,
    pub sort: String,
    pub remove_empty_lines: bool,
    pub author: String,
}

/// 执行 create-rsp 命令
pub fn execute(args: CreateRspArgs) -> Result<()> {
    output::print_header("Create Response File");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let answers = collect_answers(&mut reader)?;

    let line = build_command_line(&answers);

    fs::write(&args.file, format!("{}\n", line)).map_err(|e| BundleError::FileWriteError {
        path: args.file.display().to_string(),
        source: e,
    })?;

    output::print_done(&format!(
        "Response file written to '{}'",
        args.file.display()
    ));

    Ok(())
}

/// 逐项提示并读取应答
fn collect_answers<R: BufRead>(reader: &mut R) -> Result<RspAnswers> {
    let languages = prompt(
        reader,
        "Languages (comma separated, or 'all')",
        DEFAULT_LANGUAGES,
    )?;
    let output = prompt(reader, "Output file name", DEFAULT_OUTPUT)?;
    let note = parse_bool(&prompt(
        reader,
        "Write source path comments (true/false)",
        "false",
    )?);
    let sort = prompt(reader, "Sort order (name/type)", DEFAULT_SORT)?;
    let remove_empty_lines = parse_bool(&prompt(
        reader,
        "Remove empty lines (true/false)",
        "false",
    )?);
    let author = prompt(reader, "Author name", DEFAULT_AUTHOR)?;

    Ok(RspAnswers {
        languages,
        output,
        note,
        sort,
        remove_empty_lines,
        author,
    })
}

/// 打印提示并读取一行；空输入回落到默认值
fn prompt<R: BufRead>(reader: &mut R, label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout()
        .flush()
        .map_err(|e| BundleError::InputError { source: e })?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| BundleError::InputError { source: e })?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// 宽松布尔解析：无法解析的输入一律视为 false
fn parse_bool(token: &str) -> bool {
    matches!(
        token.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// 组装与 bundle 子命令等价的单行调用
fn build_command_line(answers: &RspAnswers) -> String {
    format!(
        "bundle --language {} --output {} --note {} --sort {} --remove-empty-lines {} --author \"{}\"",
        answers.languages,
        answers.output,
        answers.note,
        answers.sort,
        answers.remove_empty_lines,
        answers.author
    )
}
