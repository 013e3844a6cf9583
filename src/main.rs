//! # cbundle - 源码文件打包工具
//!
//! 把目录树中按语言选出的源码文件串接成单个输出文件，
//! 并可交互式生成可复用的响应文件。
//!
//! ## 子命令
//! - `bundle` - 选择、排序并打包源码文件
//! - `create-rsp` - 交互式生成响应文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── models/     (语言映射与打包配置)
//!   ├── selector.rs (文件枚举与过滤)
//!   ├── writer.rs   (排序与串接写入)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod selector;
mod utils;
mod writer;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
