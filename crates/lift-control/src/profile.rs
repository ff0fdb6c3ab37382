//! 控制配置档 - 内置预设与 TOML 加载
//!
//! 配置档描述一个完整的推理配置：三个语言变量（误差、误差变化率、
//! 电机功率）的论域与模糊集，加上规则表。[`ProfileConfig`] 是纯数据
//! （serde），[`ProfileConfig::build`] 把它送进正常的引擎构建与
//! 校验路径。
//!
//! 内置两个部署过的预设：
//!
//! - **signed** —— 原始部署：误差/误差变化率论域 `[-10, 10]`，
//!   功率 `[0, 100]`；
//! - **magnitude** —— 绝对误差部署：误差 `[0, 25]`，误差变化率
//!   `[-50, 50]`，功率 `[0, 90]`。
//!
//! 两者共用同一张九条规则表：后件只取决于误差变化率
//! （negative→low、zero→medium、positive→high），与每个误差标签
//! 交叉展开。
//!
//! # TOML 格式
//!
//! ```toml
//! [error]
//! universe = [-10.0, 10.0]
//!
//! [[error.terms]]
//! label = "negative"
//! points = [-10.0, -10.0, 0.0]   # 3 点 = 三角形，4 点 = 梯形
//!
//! [[rules]]
//! error = "negative"
//! delta_error = "zero"
//! p_motor = "medium"
//! ```

use crate::error::{ControlError, Result};
use lift_fuzzy::{
    InferenceEngine, LinguisticVariable, MembershipFunction, Rule, RuleBase, Universe,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 单个模糊集的配置：3 点三角形或 4 点梯形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermConfig {
    /// 标签
    pub label: String,
    /// 形状顶点（个数决定形状）
    pub points: Vec<f64>,
}

impl TermConfig {
    fn triangle(label: &str, a: f64, b: f64, c: f64) -> Self {
        TermConfig {
            label: label.to_string(),
            points: vec![a, b, c],
        }
    }
}

/// 单个语言变量的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig {
    /// 论域 `[lo, hi]`
    pub universe: [f64; 2],
    /// 模糊集列表（顺序保留）
    pub terms: Vec<TermConfig>,
}

/// 单条规则的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// 误差变量的前件标签
    pub error: String,
    /// 误差变化率变量的前件标签
    pub delta_error: String,
    /// 功率变量的后件标签
    pub p_motor: String,
}

/// 完整配置档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// 误差变量
    pub error: VariableConfig,
    /// 误差变化率变量
    pub delta_error: VariableConfig,
    /// 功率（输出）变量
    pub p_motor: VariableConfig,
    /// 规则表
    pub rules: Vec<RuleConfig>,
}

impl ProfileConfig {
    /// 原始部署预设：带符号误差，论域 `[-10, 10]` / `[-10, 10]` / `[0, 100]`
    #[must_use]
    pub fn signed() -> Self {
        ProfileConfig {
            error: VariableConfig {
                universe: [-10.0, 10.0],
                terms: vec![
                    TermConfig::triangle("negative", -10.0, -10.0, 0.0),
                    TermConfig::triangle("zero", -10.0, 0.0, 10.0),
                    TermConfig::triangle("positive", 0.0, 10.0, 10.0),
                ],
            },
            delta_error: VariableConfig {
                universe: [-10.0, 10.0],
                terms: vec![
                    TermConfig::triangle("negative", -10.0, -10.0, 0.0),
                    TermConfig::triangle("zero", -10.0, 0.0, 10.0),
                    TermConfig::triangle("positive", 0.0, 10.0, 10.0),
                ],
            },
            p_motor: VariableConfig {
                universe: [0.0, 100.0],
                terms: vec![
                    TermConfig::triangle("low", 0.0, 0.0, 50.0),
                    TermConfig::triangle("medium", 0.0, 50.0, 100.0),
                    TermConfig::triangle("high", 50.0, 100.0, 100.0),
                ],
            },
            rules: delta_keyed_rules(["negative", "zero", "positive"]),
        }
    }

    /// 绝对误差部署预设：误差 `[0, 25]`，误差变化率 `[-50, 50]`，功率 `[0, 90]`
    #[must_use]
    pub fn magnitude() -> Self {
        ProfileConfig {
            error: VariableConfig {
                universe: [0.0, 25.0],
                terms: vec![
                    TermConfig::triangle("small", 0.0, 0.0, 12.5),
                    TermConfig::triangle("medium", 0.0, 12.5, 25.0),
                    TermConfig::triangle("large", 12.5, 25.0, 25.0),
                ],
            },
            delta_error: VariableConfig {
                universe: [-50.0, 50.0],
                terms: vec![
                    TermConfig::triangle("negative", -50.0, -50.0, 0.0),
                    TermConfig::triangle("zero", -50.0, 0.0, 50.0),
                    TermConfig::triangle("positive", 0.0, 50.0, 50.0),
                ],
            },
            p_motor: VariableConfig {
                universe: [0.0, 90.0],
                terms: vec![
                    TermConfig::triangle("low", 0.0, 0.0, 45.0),
                    TermConfig::triangle("medium", 0.0, 45.0, 90.0),
                    TermConfig::triangle("high", 45.0, 90.0, 90.0),
                ],
            },
            rules: delta_keyed_rules(["small", "medium", "large"]),
        }
    }

    /// 按名称取内置预设（`"signed"` / `"magnitude"`）
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "signed" => Some(Self::signed()),
            "magnitude" => Some(Self::magnitude()),
            _ => None,
        }
    }

    /// 从 TOML 文本解析（不构建引擎；校验在 [`build`](Self::build)）
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// 从 TOML 文件加载
    ///
    /// # 错误
    ///
    /// 读文件失败返回 [`ControlError::ProfileIo`]，解析失败返回
    /// [`ControlError::ProfileParse`]。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ControlError::ProfileIo {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "profile loaded");
        Self::from_toml_str(&text)
    }

    /// 构建推理引擎
    ///
    /// 点数不是 3 或 4 的模糊集在这里拒绝；其余结构性校验
    /// （论域、标签、规则引用）由 `lift-fuzzy` 的构建路径完成。
    pub fn build(&self) -> Result<InferenceEngine> {
        let error = build_variable("error", &self.error)?;
        let delta_error = build_variable("delta_error", &self.delta_error)?;
        let p_motor = build_variable("p_motor", &self.p_motor)?;

        let mut rules = RuleBase::new();
        for rule in &self.rules {
            rules.push(Rule::new(
                &[
                    ("error", rule.error.as_str()),
                    ("delta_error", rule.delta_error.as_str()),
                ],
                rule.p_motor.as_str(),
            ));
        }

        Ok(InferenceEngine::new(error, delta_error, p_motor, rules)?)
    }
}

/// 共用的九条规则表：后件只取决于误差变化率，与误差标签交叉展开
fn delta_keyed_rules(error_labels: [&str; 3]) -> Vec<RuleConfig> {
    let delta_to_power = [("negative", "low"), ("zero", "medium"), ("positive", "high")];
    let mut rules = Vec::with_capacity(9);
    for error in error_labels {
        for (delta, power) in delta_to_power {
            rules.push(RuleConfig {
                error: error.to_string(),
                delta_error: delta.to_string(),
                p_motor: power.to_string(),
            });
        }
    }
    rules
}

fn build_variable(name: &str, config: &VariableConfig) -> Result<LinguisticVariable> {
    let universe = Universe::new(config.universe[0], config.universe[1])?;
    let mut variable = LinguisticVariable::new(name, universe);
    for term in &config.terms {
        let shape = match term.points.as_slice() {
            [a, b, c] => MembershipFunction::triangular(*a, *b, *c)?,
            [a, b, c, d] => MembershipFunction::trapezoidal(*a, *b, *c, *d)?,
            points => {
                return Err(ControlError::BadTermPoints {
                    variable: name.to_string(),
                    label: term.label.clone(),
                    count: points.len(),
                });
            }
        };
        variable = variable.term(term.label.as_str(), shape)?;
    }
    Ok(variable)
}

/// 构建原始部署（signed 预设）的推理引擎
pub fn signed() -> Result<InferenceEngine> {
    ProfileConfig::signed().build()
}

/// 构建绝对误差部署（magnitude 预设）的推理引擎
pub fn magnitude() -> Result<InferenceEngine> {
    ProfileConfig::magnitude().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_fuzzy::FuzzyError;

    #[test]
    fn test_signed_profile_builds() {
        let engine = signed().unwrap();

        assert_eq!(engine.rule_count(), 9);
        assert_eq!(engine.error_variable().len(), 3);
        assert_eq!(engine.power_variable().universe().lo(), 0.0);
        assert_eq!(engine.power_variable().universe().hi(), 100.0);
        assert_eq!(engine.error_variable().universe().lo(), -10.0);
    }

    #[test]
    fn test_magnitude_profile_builds() {
        let engine = magnitude().unwrap();

        assert_eq!(engine.rule_count(), 9);
        assert_eq!(engine.error_variable().universe().hi(), 25.0);
        assert_eq!(engine.delta_error_variable().universe().lo(), -50.0);
        assert_eq!(engine.power_variable().universe().hi(), 90.0);
    }

    #[test]
    fn test_signed_matches_hand_built_engine() {
        // 同一配置手工走 lift-fuzzy API，推理结果应逐位一致
        let error = LinguisticVariable::new("error", Universe::new(-10.0, 10.0).unwrap())
            .term(
                "negative",
                MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap(),
            )
            .unwrap()
            .term(
                "zero",
                MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap(),
            )
            .unwrap()
            .term(
                "positive",
                MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap(),
            )
            .unwrap();
        let delta = LinguisticVariable::new("delta_error", Universe::new(-10.0, 10.0).unwrap())
            .term(
                "negative",
                MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap(),
            )
            .unwrap()
            .term(
                "zero",
                MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap(),
            )
            .unwrap()
            .term(
                "positive",
                MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap(),
            )
            .unwrap();
        let power = LinguisticVariable::new("p_motor", Universe::new(0.0, 100.0).unwrap())
            .term("low", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
            .unwrap()
            .term(
                "medium",
                MembershipFunction::triangular(0.0, 50.0, 100.0).unwrap(),
            )
            .unwrap()
            .term(
                "high",
                MembershipFunction::triangular(50.0, 100.0, 100.0).unwrap(),
            )
            .unwrap();
        let mut rules = RuleBase::new();
        for error_label in ["negative", "zero", "positive"] {
            for (delta_label, power_label) in
                [("negative", "low"), ("zero", "medium"), ("positive", "high")]
            {
                rules.push(Rule::new(
                    &[("error", error_label), ("delta_error", delta_label)],
                    power_label,
                ));
            }
        }
        let hand_built = InferenceEngine::new(error, delta, power, rules).unwrap();

        let from_profile = signed().unwrap();
        for (e, de) in [(5.0, 0.5), (-3.2, -1.1), (0.0, 0.0), (9.9, -9.9)] {
            assert_eq!(from_profile.infer(e, de), hand_built.infer(e, de));
        }
    }

    #[test]
    fn test_profile_toml_round_trip() {
        let config = ProfileConfig::signed();
        let text = toml::to_string(&config).unwrap();
        let back = ProfileConfig::from_toml_str(&text).unwrap();

        assert_eq!(back, config);

        // 往返后的配置构建出等价引擎
        let a = config.build().unwrap();
        let b = back.build().unwrap();
        assert_eq!(a.infer(4.2, -0.7), b.infer(4.2, -0.7));
    }

    #[test]
    fn test_minimal_toml_profile_parses_and_builds() {
        let text = r#"
            [error]
            universe = [-1.0, 1.0]
            terms = [{ label = "any", points = [-1.0, -1.0, 1.0, 1.0] }]

            [delta_error]
            universe = [-1.0, 1.0]
            terms = [{ label = "any", points = [-1.0, -1.0, 1.0, 1.0] }]

            [p_motor]
            universe = [0.0, 10.0]
            terms = [{ label = "mid", points = [0.0, 5.0, 10.0] }]

            [[rules]]
            error = "any"
            delta_error = "any"
            p_motor = "mid"
        "#;
        let engine = ProfileConfig::from_toml_str(text).unwrap().build().unwrap();

        // 对称三角形完整激活，重心在 5
        assert!((engine.infer(0.0, 0.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bad_point_count_rejected() {
        let mut config = ProfileConfig::signed();
        config.error.terms[0].points = vec![-10.0, 0.0];

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ControlError::BadTermPoints { ref label, count: 2, .. } if label == "negative"
        ));

        config.error.terms[0].points = vec![-10.0, -5.0, 0.0, 5.0, 10.0];
        let err = config.build().unwrap_err();
        assert!(matches!(err, ControlError::BadTermPoints { count: 5, .. }));
    }

    #[test]
    fn test_unknown_rule_label_surfaces_fuzzy_error() {
        let mut config = ProfileConfig::signed();
        config.rules[0].p_motor = "turbo".to_string();

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ControlError::Fuzzy(FuzzyError::UnknownLabel { ref label, .. }) if label == "turbo"
        ));
    }

    #[test]
    fn test_from_path_reports_io_error() {
        let err = ProfileConfig::from_path("/nonexistent/profile.toml").unwrap_err();
        assert!(matches!(err, ControlError::ProfileIo { .. }));
    }

    #[test]
    fn test_named_presets() {
        assert!(ProfileConfig::named("signed").is_some());
        assert!(ProfileConfig::named("magnitude").is_some());
        assert!(ProfileConfig::named("adaptive").is_none());
    }
}
