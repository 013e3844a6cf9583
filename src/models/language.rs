//! # 语言与扩展名映射
//!
//! 把用户输入的语言 token 映射到文件扩展名。
//!
//! ## 依赖关系
//! - 被 `selector.rs` 和 `commands/bundle.rs` 使用
//! - 无外部模块依赖

/// 语言 token 解析结果
///
/// 映射表之外的 token 不报错，显式落入 [`Language::Custom`] 分支，
/// 直接把小写 token 当作扩展名猜测使用，不验证其是否有意义。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    /// 通配符 "all"：不按扩展名过滤
    All,
    /// 映射表中的已知语言
    Known(&'static str),
    /// 未知 token：按 ".token" 猜测扩展名
    Custom(String),
}

impl Language {
    /// 解析语言 token（大小写不敏感）
    pub fn parse(token: &str) -> Language {
        let lower = token.trim().to_lowercase();
        match lower.as_str() {
            "all" => Language::All,
            "csharp" => Language::Known(".cs"),
            "python" => Language::Known(".py"),
            "javascript" => Language::Known(".js"),
            "java" => Language::Known(".java"),
            "cpp" => Language::Known(".cpp"),
            "html" => Language::Known(".html"),
            "txt" => Language::Known(".txt"),
            "word" => Language::Known(".docs"),
            _ => Language::Custom(format!(".{}", lower)),
        }
    }

    /// 对应的文件扩展名（带点）；通配符没有扩展名
    pub fn extension(&self) -> Option<&str> {
        match self {
            Language::All => None,
            Language::Known(ext) => Some(ext),
            Language::Custom(ext) => Some(ext),
        }
    }

    /// 是否为通配符
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Language::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(Language::parse("csharp"), Language::Known(".cs"));
        assert_eq!(Language::parse("python"), Language::Known(".py"));
        assert_eq!(Language::parse("javascript"), Language::Known(".js"));
        assert_eq!(Language::parse("java"), Language::Known(".java"));
        assert_eq!(Language::parse("cpp"), Language::Known(".cpp"));
        assert_eq!(Language::parse("html"), Language::Known(".html"));
        assert_eq!(Language::parse("txt"), Language::Known(".txt"));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Language::parse("Python"), Language::Known(".py"));
        assert_eq!(Language::parse("CSHARP"), Language::Known(".cs"));
        assert!(Language::parse("All").is_wildcard());
        assert!(Language::parse("ALL").is_wildcard());
    }

    #[test]
    fn test_parse_unknown_token_guesses_extension() {
        assert_eq!(
            Language::parse("rust"),
            Language::Custom(".rust".to_string())
        );
        assert_eq!(Language::parse("GO"), Language::Custom(".go".to_string()));
        assert_eq!(Language::parse(" rb "), Language::Custom(".rb".to_string()));
    }

    #[test]
    fn test_extension_accessor() {
        assert_eq!(Language::parse("python").extension(), Some(".py"));
        assert_eq!(Language::parse("rust").extension(), Some(".rust"));
        assert_eq!(Language::parse("all").extension(), None);
    }
}
