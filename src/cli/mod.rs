//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `bundle`: 选择、排序并打包源码文件
//! - `create-rsp`: 交互式生成响应文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: bundle, rsp

pub mod bundle;
pub mod rsp;

use clap::{Parser, Subcommand};

/// cbundle - 源码文件打包工具
#[derive(Parser)]
#[command(name = "cbundle")]
#[command(version)]
#[command(about = "Bundle source code files into a single annotated file", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Bundle selected source files into one output file
    Bundle(bundle::BundleArgs),

    /// Interactively create a reusable response file
    CreateRsp(rsp::CreateRspArgs),
}
