//! # Lift CLI
//!
//! Command-line interface for fuzzy lift position control.
//!
//! ## 使用方式
//!
//! ```bash
//! # 单次推理：给定误差和误差变化量，输出电机功率
//! lift-cli infer --error 5.0 --delta-error 0.5
//!
//! # 完整两阶段仿真：从 0 楼移动到 32 楼
//! lift-cli settle --current 0.0 --desired 32.0
//!
//! # 带逐步轨迹输出（JSON）
//! lift-cli settle --current 0.0 --desired 32.0 --trace --json
//!
//! # 门禁状态机：查询一次请求的裁决结果
//! lift-cli gate --staff --last-digit 0.0 --desired 8.0
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{GateCommand, InferCommand, SettleCommand};

/// Lift CLI - 模糊推理电梯控制命令行工具
#[derive(Parser, Debug)]
#[command(name = "lift-cli")]
#[command(about = "Command-line interface for fuzzy lift position control", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 单次模糊推理（误差 + 误差变化量 -> 电机功率）
    Infer {
        #[command(flatten)]
        args: InferCommand,
    },

    /// 两阶段定位仿真（启动斜坡 + 闭环收敛）
    Settle {
        #[command(flatten)]
        args: SettleCommand,
    },

    /// 楼层门禁裁决（员工专用楼层序列）
    Gate {
        #[command(flatten)]
        args: GateCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lift_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Infer { args } => {
            // One-shot 模式：单次推理
            args.execute()
        },

        Commands::Settle { args } => {
            // One-shot 模式：完整仿真
            args.execute()
        },

        Commands::Gate { args } => {
            // One-shot 模式：门禁裁决
            args.execute()
        },
    }
}
