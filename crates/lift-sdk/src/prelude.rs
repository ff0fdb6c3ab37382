//! Prelude - 常用类型的便捷导入
//!
//! 大多数用户应该使用这个模块来导入常用类型：
//!
//! ```rust
//! use lift_sdk::prelude::*;
//! ```

// 控制层（推荐使用）
pub use lift_control::{ControlRequest, ControlResponse, LiftController};
pub use lift_control::{PlantModel, PositionSimulator, Settlement, StepRecord};

// 门禁状态机
pub use lift_control::{AccessState, FloorAccessGate, GateDecision};

// 观测与轨迹
pub use lift_control::{InferenceHooks, SettleTrace, TraceRecorder};

// 配置档（`profile::signed()` / `profile::magnitude()` / TOML 加载）
pub use lift_control::ProfileConfig;
pub use lift_control::profile;

// 推理层（直接组装引擎的高级用户使用）
pub use lift_fuzzy::{InferenceEngine, LinguisticVariable, MembershipFunction, Universe};

// 错误类型
pub use lift_control::ControlError;
pub use lift_fuzzy::FuzzyError;
