//! 推理钩子系统
//!
//! 在整定循环的关键时刻触发自定义回调：每步结束、模糊化完成、
//! 整定收尾。回调以 trait object 注册，可跨线程共享。
//!
//! # 设计原则
//!
//! - **旁路观测**: 回调只读快照，不能改变闭环计算
//! - **轻量**: 回调在仿真线程内同步执行，实现应避免重 I/O
//! - **可选方法**: 只有 [`InferenceHooks::on_step`] 是必须实现的，
//!   其余方法默认空操作
//!
//! # 使用示例
//!
//! ```rust
//! use lift_control::hooks::{HookDispatcher, InferenceHooks};
//! use lift_control::simulator::StepRecord;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct StepCounter {
//!     count: AtomicU64,
//! }
//!
//! impl InferenceHooks for StepCounter {
//!     fn on_step(&self, record: &StepRecord) {
//!         let _ = record;
//!         self.count.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let mut hooks = HookDispatcher::new();
//! let counter = Arc::new(StepCounter { count: AtomicU64::new(0) });
//! hooks.register(counter.clone());
//!
//! let record = StepRecord {
//!     step: 3,
//!     error: 5.0,
//!     delta_error: 0.0,
//!     power: 42.0,
//!     position: 27.0,
//! };
//! hooks.notify_step(&record);
//! assert_eq!(counter.count.load(Ordering::Relaxed), 1);
//! ```

use crate::simulator::{Settlement, StepRecord};
use lift_fuzzy::FuzzifiedInputs;
use std::sync::Arc;

/// 推理钩子 Trait
///
/// 定义整定循环的观测接口。实现必须是 `Send + Sync`，
/// 因为分发器以 `Arc<dyn InferenceHooks>` 持有回调。
pub trait InferenceHooks: Send + Sync {
    /// 每个闭环步完成后调用
    ///
    /// # 参数
    ///
    /// - `record`: 本步的完整快照（步号、误差、误差变化、功率、更新后位置）
    fn on_step(&self, record: &StepRecord);

    /// 模糊化完成后、规则触发前调用（可选）
    ///
    /// # 默认实现
    ///
    /// 默认为空操作，仅需在调试隶属度时实现。
    fn on_fuzzified(&self, step: u32, inputs: &FuzzifiedInputs) {
        let _ = step;
        let _ = inputs;
        // 默认：不处理模糊化快照
    }

    /// 整定循环结束后调用一次（可选）
    ///
    /// # 时机
    ///
    /// 快速路径（零误差提前返回）也会触发，此时 `settlement.steps == 0`。
    fn on_settled(&self, settlement: &Settlement) {
        let _ = settlement;
        // 默认：不处理整定结果
    }
}

/// 钩子分发器
///
/// 管理已注册回调的列表，按注册顺序逐个触发。
///
/// # 线程安全
///
/// 回调通过 `Arc` 跨线程共享；列表本身的增删需要外部同步。
#[derive(Default)]
pub struct HookDispatcher {
    /// 回调列表
    hooks: Vec<Arc<dyn InferenceHooks>>,
}

impl HookDispatcher {
    /// 创建空分发器
    #[must_use]
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// 注册回调
    pub fn register(&mut self, hook: Arc<dyn InferenceHooks>) {
        self.hooks.push(hook);
    }

    /// 移除所有回调
    ///
    /// 主要用于测试或清理场景。
    pub fn clear(&mut self) {
        self.hooks.clear();
    }

    /// 触发所有回调的 `on_step`
    pub fn notify_step(&self, record: &StepRecord) {
        for hook in self.hooks.iter() {
            hook.on_step(record);
        }
    }

    /// 触发所有回调的 `on_fuzzified`
    pub fn notify_fuzzified(&self, step: u32, inputs: &FuzzifiedInputs) {
        for hook in self.hooks.iter() {
            hook.on_fuzzified(step, inputs);
        }
    }

    /// 触发所有回调的 `on_settled`
    pub fn notify_settled(&self, settlement: &Settlement) {
        for hook in self.hooks.iter() {
            hook.on_settled(settlement);
        }
    }

    /// 获取回调数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// 检查是否为空
    ///
    /// 仿真循环用它跳过快照构造，无回调时不付观测开销。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
