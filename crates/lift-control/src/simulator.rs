//! 位置整定仿真器
//!
//! 把模糊推理引擎接入闭环，仿真电梯车厢从当前位置向目标位置的
//! 整定轨迹，返回最终停靠位置。
//!
//! # 算法
//!
//! 仿真分两个阶段，总步数固定，不做收敛提前退出：
//!
//! ```text
//! 快速路径: error == 0 且 delta_error == 0 → 原位返回，不运动
//!
//! 阶段 A（启动斜坡，30 子步，t = 0.1 … 3.0）:
//!   power    = t * 0.315 / 3        （线性爬升到功率上限）
//!   position = position * 0.996 * sign(入口误差) + power * 0.00951
//!   （子步间累积；sign 取入口误差符号，整个斜坡不变）
//!
//! 阶段 B（闭环整定，397 步，k = 3 … 399）:
//!   e           = desired - position
//!   error       = |e|
//!   delta_error = 上一步 error - 本步 error   （接近速率，带符号）
//!   power       = engine.infer(error, delta_error)
//!   position    = | position * 0.996 * sign(e) + power * 0.00951 |
//! ```
//!
//! 阶段 B 每步重新取误差符号，位置取绝对值，因此车厢在目标两侧
//! 往复反射，最终停在目标附近的窄带内。
//!
//! # 示例
//!
//! ```rust
//! use lift_control::profile;
//! use lift_control::simulator::PositionSimulator;
//!
//! let engine = profile::signed().unwrap();
//! let sim = PositionSimulator::new(engine);
//!
//! // 已在目标位置：快速路径直接返回，不跑任何阶段
//! let settlement = sim.settle(10.0, 10.0, 0.0, 0.0);
//! assert_eq!(settlement.position, 10.0);
//! assert_eq!(settlement.steps, 0);
//! ```

use crate::hooks::{HookDispatcher, InferenceHooks};
use crate::plant::PlantModel;
use lift_fuzzy::InferenceEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// 单步观测快照
///
/// 钩子回调收到的载荷：步号、推理输入、功率命令、更新后的位置。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 闭环步号（阶段 B 从 3 开始计数）
    pub step: u32,
    /// 本步绝对误差
    pub error: f64,
    /// 相邻两步绝对误差之差（正 = 正在接近目标）
    pub delta_error: f64,
    /// 推理得到的功率命令
    pub power: f64,
    /// 驱动更新后的位置
    pub position: f64,
}

/// 整定结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// 最终停靠位置
    pub position: f64,
    /// 回传给调用方的误差状态（下次请求的 previous_error）
    pub previous_error: f64,
    /// 实际执行的闭环步数（快速路径为 0）
    pub steps: u32,
}

/// 位置整定仿真器
///
/// 持有推理引擎、被控对象参数和钩子分发器。构建完成后不可变，
/// `settle` 只读共享状态，可跨线程并发调用。
pub struct PositionSimulator {
    engine: InferenceEngine,
    plant: PlantModel,
    hooks: HookDispatcher,
}

impl PositionSimulator {
    /// 用标定的被控对象参数创建仿真器
    #[must_use]
    pub fn new(engine: InferenceEngine) -> Self {
        PositionSimulator {
            engine,
            plant: PlantModel::default(),
            hooks: HookDispatcher::new(),
        }
    }

    /// 替换被控对象参数（用于测试和仿真实验）
    #[must_use]
    pub fn with_plant(mut self, plant: PlantModel) -> Self {
        self.plant = plant;
        self
    }

    /// 注册观测钩子
    ///
    /// 无钩子注册时，仿真循环跳过快照构造，不付观测开销。
    pub fn register_hook(&mut self, hook: Arc<dyn InferenceHooks>) {
        self.hooks.register(hook);
    }

    /// 推理引擎引用
    #[must_use]
    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// 被控对象参数引用
    #[must_use]
    pub fn plant(&self) -> &PlantModel {
        &self.plant
    }

    /// 执行整定仿真
    ///
    /// # 参数
    ///
    /// - `current_position`: 车厢当前位置
    /// - `desired_position`: 目标位置
    /// - `error`: 调用方计算的带符号误差（desired - current）
    /// - `delta_error`: 误差变化（error - 上次 previous_error）
    ///
    /// # 返回
    ///
    /// [`Settlement`]：最终位置、回传误差状态、执行步数。
    /// 入口误差与误差变化均恰为 0 时走快速路径，原位返回。
    pub fn settle(
        &self,
        current_position: f64,
        desired_position: f64,
        error: f64,
        delta_error: f64,
    ) -> Settlement {
        // 快速路径：已停在目标位置，previous_error 按调用方的
        // delta 定义反解（error - delta_error），保持往返不变
        if error == 0.0 && delta_error == 0.0 {
            debug!(position = current_position, "already settled, skipping simulation");
            let settlement = Settlement {
                position: current_position,
                previous_error: error - delta_error,
                steps: 0,
            };
            self.hooks.notify_settled(&settlement);
            return settlement;
        }

        // 阶段 A：启动斜坡
        let mut position = self.ramp(current_position, error);
        let mut previous_error = desired_position - position;
        debug!(
            seed_position = position,
            seed_error = previous_error,
            "ramp complete, entering closed loop"
        );

        // 阶段 B：闭环整定，固定时域
        let observed = !self.hooks.is_empty();
        for step in self.plant.settle_start..self.plant.settle_end() {
            let e = desired_position - position;
            let current_error = e.abs();
            let current_delta_error = previous_error - current_error;

            if observed {
                let inputs = self.engine.fuzzify(current_error, current_delta_error);
                self.hooks.notify_fuzzified(step, &inputs);
            }

            let power = self.engine.infer(current_error, current_delta_error);
            let sign = if e >= 0.0 { 1.0 } else { -1.0 };
            position = self.plant.drive(position, sign, power).abs();
            previous_error = current_error;

            trace!(
                step,
                error = current_error,
                delta_error = current_delta_error,
                power,
                position,
                "settle step"
            );
            if observed {
                self.hooks.notify_step(&StepRecord {
                    step,
                    error: current_error,
                    delta_error: current_delta_error,
                    power,
                    position,
                });
            }
        }

        let settlement = Settlement {
            position,
            previous_error,
            steps: self.plant.settle_steps,
        };
        debug!(
            position = settlement.position,
            residual_error = settlement.previous_error,
            "settle complete"
        );
        self.hooks.notify_settled(&settlement);
        settlement
    }

    /// 阶段 A：固定时长的启动斜坡
    ///
    /// 功率从近零线性爬升到上限，位置按子步累积；误差符号在
    /// 入口处取定，整个斜坡保持不变。
    fn ramp(&self, entry_position: f64, entry_error: f64) -> f64 {
        let sign = if entry_error >= 0.0 { 1.0 } else { -1.0 };
        let mut position = entry_position;
        for i in 1..=self.plant.ramp_steps {
            let t = i as f64 * self.plant.ramp_dt;
            let power = self.plant.ramp_power(t);
            position = self.plant.drive(position, sign, power);
        }
        position
    }
}
