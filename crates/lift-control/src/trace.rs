//! 整定轨迹录制
//!
//! [`TraceRecorder`] 是自带的 [`InferenceHooks`] 实现：收集每步的
//! [`StepRecord`] 与最终 [`Settlement`]，产出可序列化的
//! [`SettleTrace`]。内部用 `parking_lot::Mutex` 保护，录制器可以
//! 安全地在仿真线程与读取线程之间共享。

use crate::hooks::InferenceHooks;
use crate::simulator::{Settlement, StepRecord};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// 一次整定的完整轨迹
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettleTrace {
    /// 按步序排列的观测快照
    pub steps: Vec<StepRecord>,
    /// 最终整定结果（整定完成后填充）
    pub settlement: Option<Settlement>,
}

impl SettleTrace {
    /// 记录的步数
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// 是否尚无记录
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// 轨迹录制器
///
/// # 示例
///
/// ```rust
/// use lift_control::profile;
/// use lift_control::simulator::PositionSimulator;
/// use lift_control::trace::TraceRecorder;
/// use std::sync::Arc;
///
/// let mut sim = PositionSimulator::new(profile::signed().unwrap());
/// let recorder = Arc::new(TraceRecorder::new());
/// sim.register_hook(recorder.clone());
///
/// sim.settle(0.0, 32.0, 32.0, 32.0);
/// let trace = recorder.take();
/// assert_eq!(trace.len(), 397);
/// ```
#[derive(Default)]
pub struct TraceRecorder {
    inner: Mutex<SettleTrace>,
}

impl TraceRecorder {
    /// 创建空录制器
    #[must_use]
    pub fn new() -> Self {
        TraceRecorder {
            inner: Mutex::new(SettleTrace::default()),
        }
    }

    /// 克隆当前轨迹（不清空）
    #[must_use]
    pub fn snapshot(&self) -> SettleTrace {
        self.inner.lock().clone()
    }

    /// 取走当前轨迹并清空，供下一次整定复用
    #[must_use]
    pub fn take(&self) -> SettleTrace {
        std::mem::take(&mut *self.inner.lock())
    }
}

impl InferenceHooks for TraceRecorder {
    fn on_step(&self, record: &StepRecord) {
        self.inner.lock().steps.push(*record);
    }

    fn on_settled(&self, settlement: &Settlement) {
        self.inner.lock().settlement = Some(*settlement);
    }
}
