//! 两阶段定位仿真命令

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use lift_sdk::{AccessState, ControlRequest, LiftController, PositionSimulator, TraceRecorder};

/// 定位仿真命令参数
#[derive(Args, Debug)]
pub struct SettleCommand {
    /// 当前轿厢位置
    #[arg(short, long, allow_hyphen_values = true)]
    pub current: f64,

    /// 期望楼层
    #[arg(short, long, allow_hyphen_values = true)]
    pub desired: f64,

    /// 上一周期的误差（用于计算误差变化量）
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub previous_error: f64,

    /// 标记请求来自员工（启用门禁裁决）
    #[arg(long)]
    pub staff: bool,

    /// 门禁状态中记录的上一目标楼层
    #[arg(long, allow_hyphen_values = true)]
    pub last_digit: Option<f64>,

    /// 内置配置名称（signed / magnitude）
    #[arg(short, long, default_value = "signed")]
    pub profile: String,

    /// 从 TOML 文件加载配置（优先于 --profile）
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// 记录并输出逐步轨迹
    #[arg(short, long)]
    pub trace: bool,

    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

impl SettleCommand {
    /// 执行完整的两阶段仿真
    pub fn execute(&self) -> Result<()> {
        let engine = super::build_engine(&self.profile, self.profile_file.as_deref())?;

        let mut simulator = PositionSimulator::new(engine);
        let recorder = if self.trace {
            let recorder = Arc::new(TraceRecorder::new());
            simulator.register_hook(recorder.clone());
            Some(recorder)
        } else {
            None
        };

        let controller = LiftController::new(simulator);

        // 任一门禁参数出现即携带门禁状态，否则走普通请求
        let access = if self.staff || self.last_digit.is_some() {
            Some(AccessState {
                is_staff: self.staff,
                last_digit: self.last_digit.unwrap_or(0.0),
            })
        } else {
            None
        };

        let request = ControlRequest {
            current_position: self.current,
            desired_position: self.desired,
            previous_error: self.previous_error,
            access,
        };

        if !self.json {
            println!("⏳ 仿真开始: {:.2} -> {:.2}", self.current, self.desired);
        }

        let response = controller.handle(&request);

        if self.json {
            match recorder {
                Some(recorder) => {
                    let trace = recorder.take();
                    let output = serde_json::json!({
                        "response": response,
                        "trace": trace,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                },

                None => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                },
            }
            return Ok(());
        }

        if let Some(recorder) = recorder {
            let trace = recorder.take();
            println!("📈 轨迹: {} 步", trace.len());

            for record in &trace.steps {
                println!(
                    "  step {:>3}: error={:>8.4} delta={:>8.4} power={:>8.4} position={:>8.4}",
                    record.step, record.error, record.delta_error, record.power, record.position
                );
            }
        }

        println!("✅ 仿真完成:");
        println!("  最终位置:   {:.4}", response.position);
        println!("  上一次误差: {:.4}", response.previous_error);

        if let Some(state) = response.access {
            println!(
                "🔐 门禁状态: staff={} last_digit={:.1}",
                state.is_staff, state.last_digit
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_command_creation() {
        let cmd = SettleCommand {
            current: 0.0,
            desired: 32.0,
            previous_error: 0.0,
            staff: false,
            last_digit: None,
            profile: "signed".to_string(),
            profile_file: None,
            trace: false,
            json: false,
        };

        assert_eq!(cmd.desired, 32.0);
        assert!(!cmd.staff);
    }

    #[test]
    fn test_settle_command_executes_fast_path() {
        // error == 0 且 delta_error == 0：快速路径，不进入仿真循环
        let cmd = SettleCommand {
            current: 10.0,
            desired: 10.0,
            previous_error: 0.0,
            staff: false,
            last_digit: None,
            profile: "signed".to_string(),
            profile_file: None,
            trace: false,
            json: true,
        };

        cmd.execute().unwrap();
    }
}
