//! 单次推理命令

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// 单次推理命令参数
#[derive(Args, Debug)]
pub struct InferCommand {
    /// 位置误差（期望楼层 - 当前位置）
    #[arg(short, long, allow_hyphen_values = true)]
    pub error: f64,

    /// 误差变化量（上一次误差 - 本次误差）
    #[arg(short, long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub delta_error: f64,

    /// 内置配置名称（signed / magnitude）
    #[arg(short, long, default_value = "signed")]
    pub profile: String,

    /// 从 TOML 文件加载配置（优先于 --profile）
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// 以 JSON 格式输出（含模糊化细节）
    #[arg(long)]
    pub json: bool,
}

impl InferCommand {
    /// 执行单次推理
    pub fn execute(&self) -> Result<()> {
        let engine = super::build_engine(&self.profile, self.profile_file.as_deref())?;
        let power = engine.infer(self.error, self.delta_error);

        if self.json {
            let fuzzified = engine.fuzzify(self.error, self.delta_error);
            let output = serde_json::json!({
                "error": self.error,
                "delta_error": self.delta_error,
                "power": power,
                "fuzzified": fuzzified,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("📊 模糊推理:");
        println!("  误差:       {:.4}", self.error);
        println!("  误差变化量: {:.4}", self.delta_error);

        let fuzzified = engine.fuzzify(self.error, self.delta_error);
        println!("  模糊化 (误差):");
        for term in &fuzzified.error {
            println!("    {:<10} {:.4}", term.label, term.degree);
        }
        println!("  模糊化 (误差变化量):");
        for term in &fuzzified.delta_error {
            println!("    {:<10} {:.4}", term.label, term.degree);
        }

        println!("✅ 电机功率: {:.4}", power);

        Ok(())
    }
}
