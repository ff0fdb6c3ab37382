//! 整定演示示例
//!
//! 展示完整的控制流程：加载配置预设、注册轨迹录制、执行一次员工
//! 暗号序列和一次普通整定，并打印轨迹摘要。
//!
//! # 使用说明
//!
//! ```bash
//! cargo run -p lift-sdk --example settle_demo
//! ```

use lift_sdk::prelude::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    lift_sdk::init_logging();

    println!("════════════════════════════════════════");
    println!("        模糊电梯整定演示");
    println!("════════════════════════════════════════");
    println!();

    // === 1. 构建控制器（signed 预设 + 轨迹录制）===

    let mut simulator = PositionSimulator::new(profile::signed()?);
    let recorder = Arc::new(TraceRecorder::new());
    simulator.register_hook(recorder.clone());
    let controller = LiftController::new(simulator);

    // === 2. 普通乘客：0 层 → 12 层 ===

    println!("⏳ 普通请求：0 层 → 12 层");
    let response = controller.handle(&ControlRequest {
        current_position: 0.0,
        desired_position: 12.0,
        previous_error: 0.0,
        access: None,
    });
    let trace = recorder.take();
    println!("✅ 停靠位置: {:.3}（{} 步）", response.position, trace.len());
    println!();

    // === 3. 员工暗号序列：32 → 23 → 4，最终抵达 32 层 ===

    println!("🔐 员工序列：32 → 23 → 4");
    let mut position = response.position;
    let mut previous_error = response.previous_error;
    let mut access = Some(AccessState::default());

    for floor in [32.0, 23.0, 4.0] {
        let response = controller.handle(&ControlRequest {
            current_position: position,
            desired_position: floor,
            previous_error,
            access,
        });
        let moved = recorder.take();
        let state = response.access.expect("access state must round-trip");
        println!(
            "   请求 {floor:>4.0} → 位置 {:.3}，armed = {}，运动 {} 步",
            response.position,
            state.is_staff,
            moved.len()
        );
        position = response.position;
        previous_error = response.previous_error;
        access = response.access;
    }
    println!();

    // === 4. 轨迹摘要 ===

    println!("════════════════════════════════════════");
    println!("           最终状态");
    println!("════════════════════════════════════════");
    println!("📍 位置: {position:.3}");
    println!("📉 残余误差: {previous_error:.4}");
    if let Some(state) = access {
        println!("🔓 门禁: is_staff = {}, last_digit = {}", state.is_staff, state.last_digit);
    }

    Ok(())
}
