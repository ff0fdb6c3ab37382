//! 命令定义和实现

use std::path::Path;

use anyhow::{Context, Result};
use lift_sdk::{InferenceEngine, ProfileConfig};

pub mod gate;
pub mod infer;
pub mod settle;

pub use gate::GateCommand;
pub use infer::InferCommand;
pub use settle::SettleCommand;

/// 根据命令行参数构建推理引擎
///
/// `--profile-file` 优先于 `--profile`：给定文件时从 TOML 加载，
/// 否则按名称选择内置配置（signed / magnitude）。
pub(crate) fn build_engine(name: &str, file: Option<&Path>) -> Result<InferenceEngine> {
    let config = match file {
        Some(path) => ProfileConfig::from_path(path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))?,

        None => ProfileConfig::named(name)
            .with_context(|| format!("未知的内置配置: {} (可选: signed, magnitude)", name))?,
    };

    config.build().context("构建推理引擎失败")
}
