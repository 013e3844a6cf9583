//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `selector.rs`, `writer.rs`, `utils/`
//! - 子模块: bundle, rsp

pub mod bundle;
pub mod rsp;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Bundle(args) => bundle::execute(args),
        Commands::CreateRsp(args) => rsp::execute(args),
    }
}
