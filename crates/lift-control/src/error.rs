//! 控制层错误类型定义
//!
//! 运行期（`settle` / `decide` / `handle`）不产生错误：仿真和门控都是
//! 全函数。错误只出现在配置装载阶段 —— 读取 / 解析 TOML 配置，
//! 或下层推理引擎拒绝构建。

use lift_fuzzy::FuzzyError;
use thiserror::Error;

/// 控制层错误类型
#[derive(Error, Debug)]
pub enum ControlError {
    /// 推理引擎配置错误
    #[error("Fuzzy configuration error: {0}")]
    Fuzzy(#[from] FuzzyError),

    /// 配置文件读取失败
    #[error("Profile file error: {path}: {source}")]
    ProfileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] toml::de::Error),

    /// 模糊集顶点数量非法（3 = 三角形，4 = 梯形）
    #[error(
        "Term '{variable}.{label}' needs 3 (triangular) or 4 (trapezoidal) points, got {count}"
    )]
    BadTermPoints {
        variable: String,
        label: String,
        count: usize,
    },
}

/// 控制层 Result 别名
pub type Result<T> = std::result::Result<T, ControlError>;
