//! 员工楼层门禁状态机
//!
//! 在运动仿真之前拦截请求：普通乘客按正常流程运动；知道暗号
//! 序列的员工可以经由一串特殊请求到达受限楼层。
//!
//! # 状态图
//!
//! ```text
//!                  desired ∈ {0, 32}（武装楼层，吸收请求）
//!   ┌─────────┐ ─────────────────────────────────────▶ ┌────────────┐
//!   │ Normal  │                                        │ StaffArmed │──┐
//!   └─────────┘ ◀───────────────────────────────────── └────────────┘  │
//!        ▲         表外请求 / 改道命中（解除武装，运动）        │        │
//!        │                                                    └────────┘
//!        │                                          表内吸收项（保持武装）
//!        └── 其他请求：正常运动
//! ```
//!
//! 暗号表默认编码两条序列：
//!
//! ```text
//! 0 → 8 → 20   改道至 0 层（员工专用底层）
//! 32 → 23 → 4  改道至 32 层（员工专用顶层）
//! ```
//!
//! 状态机是 `(状态, 请求)` 的纯函数；暗号表是数据（[`DetourEntry`]
//! 数组）而非控制流，测试可以注入自定义表。

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 门禁状态（随请求/响应在调用方往返）
///
/// `is_staff` 为真表示状态机处于武装态，`last_digit` 是最近一次
/// 实际使用的目的楼层，作为暗号表的查找键。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessState {
    /// 是否处于武装态
    pub is_staff: bool,
    /// 最近一次实际使用的目的楼层
    pub last_digit: f64,
}

/// 暗号表动作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetourAction {
    /// 吸收请求：不运动，保持武装态
    Absorb,
    /// 改道：解除武装，向指定楼层运动
    Redirect(f64),
}

/// 暗号表条目：武装态下 `(last_digit, 请求楼层)` 命中即触发动作
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetourEntry {
    /// 命中所需的 last_digit
    pub armed_digit: f64,
    /// 命中所需的请求楼层
    pub requested: f64,
    /// 命中后的动作
    pub action: DetourAction,
}

/// 触发武装的楼层
pub const ARMING_FLOORS: [f64; 2] = [0.0, 32.0];

/// 默认暗号表：编码 `0→8→20` 与 `32→23→4` 两条序列
pub const DEFAULT_DETOURS: [DetourEntry; 4] = [
    DetourEntry {
        armed_digit: 0.0,
        requested: 8.0,
        action: DetourAction::Absorb,
    },
    DetourEntry {
        armed_digit: 32.0,
        requested: 23.0,
        action: DetourAction::Absorb,
    },
    DetourEntry {
        armed_digit: 23.0,
        requested: 4.0,
        action: DetourAction::Redirect(32.0),
    },
    DetourEntry {
        armed_digit: 8.0,
        requested: 20.0,
        action: DetourAction::Redirect(0.0),
    },
];

/// 门禁裁决
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    /// 实际使用的目的楼层（改道时为覆盖值）
    pub destination: f64,
    /// 更新后的门禁状态
    pub next: AccessState,
    /// 是否执行运动仿真
    pub run_motion: bool,
}

/// 员工楼层门禁状态机
///
/// 默认实例使用部署的武装楼层与暗号表；自定义表用于测试。
#[derive(Debug, Clone)]
pub struct FloorAccessGate {
    arming_floors: Vec<f64>,
    detours: Vec<DetourEntry>,
}

impl Default for FloorAccessGate {
    fn default() -> Self {
        FloorAccessGate {
            arming_floors: ARMING_FLOORS.to_vec(),
            detours: DEFAULT_DETOURS.to_vec(),
        }
    }
}

impl FloorAccessGate {
    /// 用自定义武装楼层与暗号表构建
    #[must_use]
    pub fn new(arming_floors: Vec<f64>, detours: Vec<DetourEntry>) -> Self {
        FloorAccessGate {
            arming_floors,
            detours,
        }
    }

    /// 对一次请求做门禁裁决
    ///
    /// 纯函数：相同 `(state, desired)` 永远得到相同裁决。楼层比较
    /// 使用精确相等（楼层号是小整数，f64 表示精确）。
    ///
    /// # 返回
    ///
    /// [`GateDecision`]，其中 `next.last_digit` 总是更新为实际
    /// 使用的目的楼层。
    #[must_use]
    pub fn decide(&self, state: AccessState, desired: f64) -> GateDecision {
        if !state.is_staff {
            if self.is_arming_floor(desired) {
                debug!(floor = desired, "arming floor requested, absorbing");
                return GateDecision {
                    destination: desired,
                    next: AccessState {
                        is_staff: true,
                        last_digit: desired,
                    },
                    run_motion: false,
                };
            }
            return GateDecision {
                destination: desired,
                next: AccessState {
                    is_staff: false,
                    last_digit: desired,
                },
                run_motion: true,
            };
        }

        // 武装态：先查暗号表
        if let Some(entry) = self.lookup(state.last_digit, desired) {
            return match entry.action {
                DetourAction::Absorb => {
                    debug!(floor = desired, "sequence floor absorbed, staying armed");
                    GateDecision {
                        destination: desired,
                        next: AccessState {
                            is_staff: true,
                            last_digit: desired,
                        },
                        run_motion: false,
                    }
                }
                DetourAction::Redirect(target) => {
                    debug!(
                        requested = desired,
                        target, "sequence complete, redirecting"
                    );
                    GateDecision {
                        destination: target,
                        next: AccessState {
                            is_staff: false,
                            last_digit: target,
                        },
                        run_motion: true,
                    }
                }
            };
        }

        // 表外请求：解除武装，按原目标运动
        debug!(floor = desired, "off-sequence request, disarming");
        GateDecision {
            destination: desired,
            next: AccessState {
                is_staff: false,
                last_digit: desired,
            },
            run_motion: true,
        }
    }

    fn is_arming_floor(&self, floor: f64) -> bool {
        self.arming_floors.iter().any(|&f| f == floor)
    }

    fn lookup(&self, last_digit: f64, desired: f64) -> Option<&DetourEntry> {
        self.detours
            .iter()
            .find(|entry| entry.armed_digit == last_digit && entry.requested == desired)
    }
}
