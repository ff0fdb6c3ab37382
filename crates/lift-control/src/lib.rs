//! # lift-control
//!
//! 电梯控制核心层：把 `lift-fuzzy` 的推理引擎接入闭环，提供位置
//! 整定仿真、员工楼层门禁、请求编排与观测设施。
//!
//! # 模块
//!
//! - [`plant`] - 被控对象模型（衰减/增益等标定参数）
//! - [`simulator`] - 两阶段位置整定仿真器
//! - [`gate`] - 员工楼层门禁状态机
//! - [`controller`] - 请求级编排（门禁 → 快速路径 → 仿真）
//! - [`hooks`] - 推理观测钩子与分发器
//! - [`trace`] - 整定轨迹录制
//! - [`profile`] - 内置配置预设与 TOML 配置档
//! - [`error`] - 错误类型
//!
//! # 分层
//!
//! ```text
//! LiftController
//!     ├── FloorAccessGate          （门禁裁决）
//!     └── PositionSimulator        （整定仿真）
//!             ├── PlantModel       （物理参数）
//!             ├── HookDispatcher   （观测回调）
//!             └── InferenceEngine  （lift-fuzzy）
//! ```
//!
//! # 示例
//!
//! ```rust
//! use lift_control::{ControlRequest, LiftController, PositionSimulator, profile};
//!
//! let engine = profile::signed().unwrap();
//! let controller = LiftController::new(PositionSimulator::new(engine));
//!
//! let response = controller.handle(&ControlRequest {
//!     current_position: 0.0,
//!     desired_position: 32.0,
//!     previous_error: 0.0,
//!     access: None,
//! });
//! assert!((response.position - 32.0).abs() < 3.0);
//! ```

pub mod controller;
pub mod error;
pub mod gate;
pub mod hooks;
pub mod plant;
pub mod profile;
pub mod simulator;
pub mod trace;

pub use controller::{ControlRequest, ControlResponse, LiftController};
pub use error::{ControlError, Result};
pub use gate::{AccessState, DetourAction, DetourEntry, FloorAccessGate, GateDecision};
pub use hooks::{HookDispatcher, InferenceHooks};
pub use plant::PlantModel;
pub use profile::ProfileConfig;
pub use simulator::{PositionSimulator, Settlement, StepRecord};
pub use trace::{SettleTrace, TraceRecorder};
