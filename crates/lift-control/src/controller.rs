//! 请求编排层
//!
//! 把门禁状态机与整定仿真器串成一次完整的请求处理：
//!
//! ```text
//! ControlRequest
//!     │
//!     ▼
//! FloorAccessGate ──吸收──▶ 原位返回（位置/误差不变，状态更新）
//!     │
//!     ▼ 运动（目的楼层可能被改道覆盖）
//! PositionSimulator.settle
//!     │
//!     ▼
//! ControlResponse
//! ```
//!
//! 控制器不持久化任何调用方状态：位置、误差、门禁状态都随
//! 请求/响应往返。请求与响应均可序列化，任何传输外壳（HTTP、
//! 消息队列、CLI）都能直接包装。
//!
//! # 示例
//!
//! ```rust
//! use lift_control::controller::{ControlRequest, LiftController};
//! use lift_control::profile;
//! use lift_control::simulator::PositionSimulator;
//!
//! let sim = PositionSimulator::new(profile::signed().unwrap());
//! let controller = LiftController::new(sim);
//!
//! let request = ControlRequest {
//!     current_position: 10.0,
//!     desired_position: 10.0,
//!     previous_error: 0.0,
//!     access: None,
//! };
//! let response = controller.handle(&request);
//! assert_eq!(response.position, 10.0);
//! ```

use crate::gate::{AccessState, FloorAccessGate};
use crate::simulator::PositionSimulator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 一次控制请求
///
/// `previous_error` 是上次响应回传的误差状态；首次请求传 0。
/// `access` 缺省时跳过门禁，直接运动。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlRequest {
    /// 车厢当前位置
    pub current_position: f64,
    /// 请求的目的楼层
    pub desired_position: f64,
    /// 上次调用回传的误差状态
    pub previous_error: f64,
    /// 门禁状态（可选；缺省则不做门禁裁决）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessState>,
}

/// 一次控制响应
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlResponse {
    /// 整定后的位置（吸收请求时为原位置）
    pub position: f64,
    /// 下次请求应回传的误差状态
    pub previous_error: f64,
    /// 更新后的门禁状态（请求携带时必有）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessState>,
}

/// 电梯控制器：门禁 + 整定仿真的请求级封装
///
/// 构建完成后不可变，可跨线程共享。
pub struct LiftController {
    simulator: PositionSimulator,
    gate: FloorAccessGate,
}

impl LiftController {
    /// 用默认门禁表创建控制器
    #[must_use]
    pub fn new(simulator: PositionSimulator) -> Self {
        LiftController {
            simulator,
            gate: FloorAccessGate::default(),
        }
    }

    /// 替换门禁状态机（自定义武装楼层/暗号表）
    #[must_use]
    pub fn with_gate(mut self, gate: FloorAccessGate) -> Self {
        self.gate = gate;
        self
    }

    /// 仿真器引用
    #[must_use]
    pub fn simulator(&self) -> &PositionSimulator {
        &self.simulator
    }

    /// 处理一次控制请求
    ///
    /// 1. 请求携带门禁状态时先做门禁裁决；被吸收的请求原位返回。
    /// 2. 按传输约定计算 `error = destination - current`、
    ///    `delta_error = error - previous_error`。
    /// 3. 交给 [`PositionSimulator::settle`] 仿真（快速路径在其内部）。
    pub fn handle(&self, request: &ControlRequest) -> ControlResponse {
        let (destination, access) = match request.access {
            Some(state) => {
                let decision = self.gate.decide(state, request.desired_position);
                if !decision.run_motion {
                    debug!(
                        floor = request.desired_position,
                        "request absorbed by access gate"
                    );
                    return ControlResponse {
                        position: request.current_position,
                        previous_error: request.previous_error,
                        access: Some(decision.next),
                    };
                }
                (decision.destination, Some(decision.next))
            }
            None => (request.desired_position, None),
        };

        let error = destination - request.current_position;
        let delta_error = error - request.previous_error;
        let settlement =
            self.simulator
                .settle(request.current_position, destination, error, delta_error);

        ControlResponse {
            position: settlement.position,
            previous_error: settlement.previous_error,
            access,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    fn controller() -> LiftController {
        LiftController::new(PositionSimulator::new(profile::signed().unwrap()))
    }

    #[test]
    fn test_handle_without_access_runs_motion() {
        let ctl = controller();
        let response = ctl.handle(&ControlRequest {
            current_position: 0.0,
            desired_position: 32.0,
            previous_error: 0.0,
            access: None,
        });

        assert!(response.access.is_none());
        assert!((response.position - 32.0).abs() < 3.0);
        assert!(response.previous_error >= 0.0);
    }

    #[test]
    fn test_fast_path_returns_position_unchanged() {
        let ctl = controller();
        let response = ctl.handle(&ControlRequest {
            current_position: 10.0,
            desired_position: 10.0,
            previous_error: 0.0,
            access: None,
        });

        assert_eq!(response.position, 10.0);
        assert_eq!(response.previous_error, 0.0);
    }

    #[test]
    fn test_absorbed_request_keeps_position() {
        let ctl = controller();
        let response = ctl.handle(&ControlRequest {
            current_position: 12.0,
            desired_position: 0.0,
            previous_error: 0.3,
            access: Some(AccessState::default()),
        });

        // 武装楼层被吸收：车厢不动，误差状态原样回传
        assert_eq!(response.position, 12.0);
        assert_eq!(response.previous_error, 0.3);
        let access = response.access.unwrap();
        assert!(access.is_staff);
        assert_eq!(access.last_digit, 0.0);
    }

    #[test]
    fn test_redirect_overrides_destination() {
        let ctl = controller();
        let response = ctl.handle(&ControlRequest {
            current_position: 0.0,
            desired_position: 4.0,
            previous_error: 0.0,
            access: Some(AccessState {
                is_staff: true,
                last_digit: 23.0,
            }),
        });

        // 暗号末步：目的地被改道为 32，门禁解除
        assert!((response.position - 32.0).abs() < 3.0);
        let access = response.access.unwrap();
        assert!(!access.is_staff);
        assert_eq!(access.last_digit, 32.0);
    }

    #[test]
    fn test_off_sequence_moves_to_requested_floor() {
        let ctl = controller();
        let response = ctl.handle(&ControlRequest {
            current_position: 0.0,
            desired_position: 10.0,
            previous_error: 0.0,
            access: Some(AccessState {
                is_staff: true,
                last_digit: 5.0,
            }),
        });

        assert!((response.position - 10.0).abs() < 3.0);
        let access = response.access.unwrap();
        assert!(!access.is_staff);
        assert_eq!(access.last_digit, 10.0);
    }

    #[test]
    fn test_request_serde_omits_missing_access() {
        let request = ControlRequest {
            current_position: 1.0,
            desired_position: 2.0,
            previous_error: 0.0,
            access: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("access"));

        let back: ControlRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_response_serde_round_trip() {
        let response = ControlResponse {
            position: 31.9,
            previous_error: 0.2,
            access: Some(AccessState {
                is_staff: false,
                last_digit: 32.0,
            }),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: ControlResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
