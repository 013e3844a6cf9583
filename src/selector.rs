//! # 文件选择器
//!
//! 递归枚举根目录下的文件，剔除常规忽略目录，并按语言扩展名过滤。
//!
//! ## 功能
//! - 递归遍历（含隐藏文件，无深度限制）
//! - 按完整路径段剔除 bin/obj/.git/node_modules
//! - 通配符 "all" 跳过扩展名过滤
//! - `--verbose` 时输出过滤前的文件清单
//!
//! ## 依赖关系
//! - 被 `commands/bundle.rs` 使用
//! - 使用 `models/`, `error.rs`, `utils/output.rs`
//! - 使用 `walkdir` 遍历目录

use crate::error::{BundleError, Result};
use crate::models::{BundleConfig, Language};
use crate::utils::output;

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 永不参与打包的目录名（按完整路径段匹配，不做子串匹配）
pub const EXCLUDED_DIRS: [&str; 4] = ["bin", "obj", ".git", "node_modules"];

/// 选择待打包文件；返回顺序未定义，由写入器排序
pub fn select(config: &BundleConfig) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(BundleError::DirectoryNotFound {
            path: config.root.display().to_string(),
        });
    }

    // 输出文件自身不参与打包，保证重复运行结果一致
    let output_path = config.root.join(&config.output);

    let mut candidates = Vec::new();
    let walker = WalkDir::new(&config.root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e));

    for entry in walker {
        let entry = entry.map_err(|e| BundleError::WalkError {
            path: config.root.display().to_string(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path() == output_path {
            continue;
        }

        candidates.push(entry.path().to_path_buf());
    }

    if config.verbose {
        output::print_info(&format!(
            "Enumerated {} file(s) under '{}'",
            candidates.len(),
            config.root.display()
        ));
        for path in &candidates {
            output::print_listing(&path.display().to_string());
        }
    }

    // 通配符：返回全部未剔除文件
    if config.languages.iter().any(Language::is_wildcard) {
        return Ok(candidates);
    }

    let extensions: Vec<&str> = config
        .languages
        .iter()
        .filter_map(Language::extension)
        .collect();

    candidates.retain(|path| matches_extension(path, &extensions));
    Ok(candidates)
}

/// 目录名是否在剔除清单中（根目录自身不剔除）
fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

/// 小写扩展名（带点）是否命中映射集合；无扩展名的文件永不命中
fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .map(|ext| extensions.iter().any(|e| *e == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;
    use std::fs;

    fn test_config(root: &Path, tokens: &[&str]) -> BundleConfig {
        BundleConfig {
            root: root.to_path_buf(),
            languages: tokens.iter().map(|t| Language::parse(t)).collect(),
            output: PathBuf::from("bundled_code.txt"),
            note: false,
            sort: SortMode::Name,
            remove_empty_lines: false,
            author: "Unknown Author".to_string(),
            verbose: false,
        }
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_filters_by_language_extension() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("a.py"), "print(1)\n").unwrap();
        fs::write(root.join("b.cs"), "// c\n").unwrap();
        fs::write(root.join("c.rs"), "fn main() {}\n").unwrap();

        let selected = select(&test_config(root, &["python"])).unwrap();
        assert_eq!(file_names(&selected), vec!["a.py"]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("UPPER.PY"), "print(1)\n").unwrap();

        let selected = select(&test_config(root, &["python"])).unwrap();
        assert_eq!(file_names(&selected), vec!["UPPER.PY"]);
    }

    #[test]
    fn test_excludes_conventional_directories() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        for dir in ["bin", "obj", ".git", "node_modules"] {
            fs::create_dir(root.join(dir)).unwrap();
            fs::write(root.join(dir).join("ignored.py"), "print(0)\n").unwrap();
        }
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src").join("kept.py"), "print(1)\n").unwrap();

        let selected = select(&test_config(root, &["python"])).unwrap();
        assert_eq!(file_names(&selected), vec!["kept.py"]);
    }

    #[test]
    fn test_exclusion_matches_whole_segments_only() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        // 目录名只是前缀相同，不应剔除
        fs::create_dir(root.join("binary")).unwrap();
        fs::write(root.join("binary").join("a.py"), "print(1)\n").unwrap();
        fs::create_dir(root.join("objects")).unwrap();
        fs::write(root.join("objects").join("b.py"), "print(2)\n").unwrap();
        // 叫 bin 的普通文件也不剔除
        fs::write(root.join("bin"), "not a directory\n").unwrap();

        let selected = select(&test_config(root, &["all"])).unwrap();
        assert_eq!(file_names(&selected), vec!["a.py", "b.py", "bin"]);
    }

    #[test]
    fn test_wildcard_keeps_every_extension() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("a.py"), "").unwrap();
        fs::write(root.join("b.cs"), "").unwrap();
        fs::write(root.join("noext"), "").unwrap();

        let selected = select(&test_config(root, &["all"])).unwrap();
        assert_eq!(file_names(&selected), vec!["a.py", "b.cs", "noext"]);
    }

    #[test]
    fn test_hidden_files_are_enumerated() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join(".hidden.py"), "print(1)\n").unwrap();

        let selected = select(&test_config(root, &["python"])).unwrap();
        assert_eq!(file_names(&selected), vec![".hidden.py"]);
    }

    #[test]
    fn test_custom_token_matches_guessed_extension() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("lib.rs"), "fn f() {}\n").unwrap();
        fs::write(root.join("a.py"), "print(1)\n").unwrap();

        let selected = select(&test_config(root, &["rs"])).unwrap();
        assert_eq!(file_names(&selected), vec!["lib.rs"]);
    }

    #[test]
    fn test_output_file_is_skipped() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("a.txt"), "keep\n").unwrap();
        fs::write(root.join("bundled_code.txt"), "previous run\n").unwrap();

        let selected = select(&test_config(root, &["txt"])).unwrap();
        assert_eq!(file_names(&selected), vec!["a.txt"]);
    }

    #[test]
    fn test_missing_root_directory_errors() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("no_such_dir");

        let result = select(&test_config(&missing, &["all"]));
        assert!(matches!(
            result,
            Err(BundleError::DirectoryNotFound { .. })
        ));
    }
}
