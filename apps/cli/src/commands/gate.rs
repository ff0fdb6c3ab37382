//! 楼层门禁裁决命令

use anyhow::Result;
use clap::Args;
use lift_sdk::{AccessState, FloorAccessGate};

/// 门禁裁决命令参数
#[derive(Args, Debug)]
pub struct GateCommand {
    /// 请求者是否为员工
    #[arg(long)]
    pub staff: bool,

    /// 门禁状态中记录的上一目标楼层
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub last_digit: f64,

    /// 请求的目标楼层
    #[arg(short, long, allow_hyphen_values = true)]
    pub desired: f64,

    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

impl GateCommand {
    /// 执行一次门禁裁决（不触发电机仿真）
    pub fn execute(&self) -> Result<()> {
        let gate = FloorAccessGate::default();
        let state = AccessState {
            is_staff: self.staff,
            last_digit: self.last_digit,
        };

        let decision = gate.decide(state, self.desired);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&decision)?);
            return Ok(());
        }

        println!("🔐 门禁裁决:");
        println!("  请求楼层:   {:.1}", self.desired);
        println!("  执行目标:   {:.1}", decision.destination);
        println!(
            "  是否移动:   {}",
            if decision.run_motion { "是" } else { "否（原地吸收）" }
        );
        println!(
            "  新状态:     staff={} last_digit={:.1}",
            decision.next.is_staff, decision.next.last_digit
        );

        Ok(())
    }
}
