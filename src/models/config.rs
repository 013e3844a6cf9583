//! # 打包配置
//!
//! 单次运行的完整选项集合，整条流水线只消费这一个结构。
//!
//! ## 依赖关系
//! - 被 `selector.rs`、`writer.rs` 和 `commands/bundle.rs` 使用
//! - 使用 `models/language.rs`

use crate::models::Language;
use std::path::PathBuf;

/// 文件排序方式
///
/// 无法识别的 token 不报错，显式回落到按路径名排序。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// 按完整路径名升序
    Name,
    /// 按扩展名升序
    Type,
}

impl SortMode {
    /// 解析排序 token（大小写不敏感）
    pub fn parse(token: &str) -> SortMode {
        match token.trim().to_lowercase().as_str() {
            "type" => SortMode::Type,
            // 空串和无效值一律按路径名排序
            _ => SortMode::Name,
        }
    }
}

/// 单次打包运行的完整配置
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// 工作目录，也是文件枚举的根
    pub root: PathBuf,
    /// 语言 token 集合，非空
    pub languages: Vec<Language>,
    /// 输出文件路径
    pub output: PathBuf,
    /// 是否在每个文件前写来源注释
    pub note: bool,
    /// 文件排序方式
    pub sort: SortMode,
    /// 是否删除空行
    pub remove_empty_lines: bool,
    /// 写入文件头的作者名
    pub author: String,
    /// 是否输出过滤前的文件清单
    pub verbose: bool,
}
