//! Lift SDK - 模糊电梯控制 Rust SDK
//!
//! 基于 Mamdani 模糊推理的电梯位置控制仿真套件。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **推理层** (`lift-fuzzy`): 隶属函数、语言变量、规则库、Mamdani 推理引擎
//! - **控制层** (`lift-control`): 被控对象模型、两阶段整定仿真、
//!   员工楼层门禁、请求编排、观测钩子
//! - **SDK 层** (本 crate): 统一再导出、prelude、日志初始化
//!
//! # 快速开始
//!
//! 大多数用户应该使用 prelude 导入常用类型：
//!
//! ```rust
//! use lift_sdk::prelude::*;
//!
//! let engine = profile::signed().unwrap();
//! let controller = LiftController::new(PositionSimulator::new(engine));
//!
//! let response = controller.handle(&ControlRequest {
//!     current_position: 0.0,
//!     desired_position: 8.0,
//!     previous_error: 0.0,
//!     access: None,
//! });
//! assert!((response.position - 8.0).abs() < 3.0);
//! ```
//!
//! 需要直接组装语言变量与规则的用户可以使用推理层：
//!
//! ```rust
//! use lift_sdk::{InferenceEngine, LinguisticVariable, MembershipFunction, Universe};
//! ```

// Prelude 模块
pub mod prelude;

// --- 用户以此为界 ---
// 以下是通过 Facade Pattern 提供的公共 API

// 推理层常用类型
pub use lift_fuzzy::{
    FuzzifiedInputs, FuzzyError, InferenceEngine, LinguisticVariable, MembershipFunction, Rule,
    RuleBase, TermDegree, Universe,
};

// 控制层（推荐的入口点）
pub use lift_control::{
    AccessState, ControlError, ControlRequest, ControlResponse, DetourAction, DetourEntry,
    FloorAccessGate, GateDecision, HookDispatcher, InferenceHooks, LiftController, PlantModel,
    PositionSimulator, ProfileConfig, SettleTrace, Settlement, StepRecord, TraceRecorder,
};

// 配置预设（`profile::signed()` / `profile::magnitude()` / TOML 加载）
pub use lift_control::profile;

/// 初始化全局日志
///
/// 安装 `log` → `tracing` 桥接（`tracing-log`），并用
/// `tracing-subscriber` 按 `RUST_LOG` 环境变量过滤输出，
/// 各 crate 默认 `info` 级别。重复调用是无害的空操作。
pub fn init_logging() {
    // 桥接失败说明全局 logger 已就位，初始化早已完成
    if tracing_log::LogTracer::init().is_err() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("lift_fuzzy=info".parse().unwrap())
        .add_directive("lift_control=info".parse().unwrap())
        .add_directive("lift_sdk=info".parse().unwrap());
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
