//! Mamdani 推理引擎 - 重心法去模糊化
//!
//! 组合两个输入变量（误差、误差变化率）、一个输出变量（电机功率）
//! 和规则库，暴露纯函数 `infer(error, delta_error) -> power`。
//!
//! # 算法
//!
//! ```text
//! 1. 钳位     输入饱和到各自论域边界
//! 2. 模糊化   对每个标签求隶属度 μ
//! 3. 规则强度 strength = min(μ_error[前件], μ_delta[前件])
//! 4. 蕴含     min(strength, μ_输出标签(y)) —— 削顶
//! 5. 聚合     对论域每点取各规则贡献的最大值 μ_agg(y)
//! 6. 重心     power = ∫ y·μ_agg(y) dy / ∫ μ_agg(y) dy
//! ```
//!
//! 重心用梯形法数值求值，采样步长 ≤ 0.1（按输出论域宽度整除修正，
//! 两端点必然落在采样点上）。对分段线性的 μ_agg，分母积分精确，
//! 分子误差在 1e-3 量级，远小于功率命令的物理意义分辨率。
//!
//! # 零激活回退
//!
//! 所有规则强度为 0 时重心是 0/0。此时返回输出论域下界（两个内置
//! 配置中即 0，最小功率）并记一条 `warn` 日志，绝不向调用方抛错。
//!
//! # 示例
//!
//! ```rust
//! use lift_fuzzy::{
//!     InferenceEngine, LinguisticVariable, MembershipFunction, Rule, RuleBase, Universe,
//! };
//!
//! let any = MembershipFunction::trapezoidal(-10.0, -10.0, 10.0, 10.0).unwrap();
//! let error = LinguisticVariable::new("error", Universe::new(-10.0, 10.0).unwrap())
//!     .term("any", any)
//!     .unwrap();
//! let delta = LinguisticVariable::new("delta_error", Universe::new(-10.0, 10.0).unwrap())
//!     .term("any", any)
//!     .unwrap();
//! let power = LinguisticVariable::new("p_motor", Universe::new(0.0, 100.0).unwrap())
//!     .term("medium", MembershipFunction::triangular(0.0, 50.0, 100.0).unwrap())
//!     .unwrap();
//! let rules = RuleBase::new().rule(Rule::new(
//!     &[("error", "any"), ("delta_error", "any")],
//!     "medium",
//! ));
//!
//! let engine = InferenceEngine::new(error, delta, power, rules).unwrap();
//! // 对称三角形削顶后重心仍在 50
//! assert!((engine.infer(0.0, 0.0) - 50.0).abs() < 1e-6);
//! ```

use crate::error::{FuzzyError, Result};
use crate::rule::RuleBase;
use crate::variable::{LinguisticVariable, TermDegree};
use smallvec::SmallVec;

/// 去模糊化采样步长上限（输出论域单位）
pub const MAX_DEFUZZ_STEP: f64 = 0.1;

/// 聚合隶属度积分低于该值视为零激活
const ZERO_FIRING_EPS: f64 = 1e-12;

/// 编译后的规则：标签已解析为各变量内的序号
#[derive(Debug, Clone, Copy)]
struct CompiledRule {
    error_term: usize,
    delta_term: usize,
    power_term: usize,
}

/// 两个输入变量的模糊化快照（观测钩子 / 诊断用）
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzifiedInputs {
    /// 误差变量各标签的隶属度
    pub error: Vec<TermDegree>,
    /// 误差变化率变量各标签的隶属度
    pub delta_error: Vec<TermDegree>,
}

/// Mamdani 推理引擎
///
/// 构建后不可变：`infer` 无内部状态、无副作用，同一输入必得同一输出。
/// 引擎整体 `Send + Sync`，可放入 `Arc` 跨线程共享。
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    error: LinguisticVariable,
    delta_error: LinguisticVariable,
    power: LinguisticVariable,
    compiled: Vec<CompiledRule>,
    /// 去模糊化采样区间数（构建时按论域宽度确定）
    defuzz_intervals: usize,
    /// 实际采样步长（= span / defuzz_intervals ≤ 0.1）
    defuzz_step: f64,
}

impl InferenceEngine {
    /// 组装引擎：两个输入变量 + 输出变量 + 规则库
    ///
    /// 所有结构性校验在这里一次完成，之后推理不再失败：
    /// - 三个变量都至少有一个标签；
    /// - 规则库非空；
    /// - 每条规则恰好引用每个输入变量一次，且标签都存在；
    /// - 后件标签在输出变量中存在。
    ///
    /// # 错误
    ///
    /// 校验失败返回对应的 [`FuzzyError`]，引擎拒绝构建。
    pub fn new(
        error: LinguisticVariable,
        delta_error: LinguisticVariable,
        power: LinguisticVariable,
        rules: RuleBase,
    ) -> Result<Self> {
        for var in [&error, &delta_error, &power] {
            if var.is_empty() {
                return Err(FuzzyError::EmptyVariable {
                    variable: var.name().to_string(),
                });
            }
        }
        if rules.is_empty() {
            return Err(FuzzyError::EmptyRuleBase);
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for (idx, rule) in rules.iter().enumerate() {
            let mut error_term = None;
            let mut delta_term = None;

            for (var, label) in rule.antecedents() {
                let (variable, slot) = if var == error.name() {
                    (&error, &mut error_term)
                } else if var == delta_error.name() {
                    (&delta_error, &mut delta_term)
                } else {
                    return Err(FuzzyError::UnknownVariable {
                        rule: idx,
                        variable: var.clone(),
                    });
                };
                let term = variable.index_of(label).ok_or_else(|| FuzzyError::UnknownLabel {
                    rule: idx,
                    variable: variable.name().to_string(),
                    label: label.clone(),
                })?;
                if slot.replace(term).is_some() {
                    return Err(FuzzyError::DuplicateAntecedent {
                        rule: idx,
                        variable: variable.name().to_string(),
                    });
                }
            }

            let error_term = error_term.ok_or_else(|| FuzzyError::MissingAntecedent {
                rule: idx,
                variable: error.name().to_string(),
            })?;
            let delta_term = delta_term.ok_or_else(|| FuzzyError::MissingAntecedent {
                rule: idx,
                variable: delta_error.name().to_string(),
            })?;
            let power_term =
                power
                    .index_of(rule.consequent())
                    .ok_or_else(|| FuzzyError::UnknownLabel {
                        rule: idx,
                        variable: power.name().to_string(),
                        label: rule.consequent().to_string(),
                    })?;

            compiled.push(CompiledRule {
                error_term,
                delta_term,
                power_term,
            });
        }

        let span = power.universe().span();
        let defuzz_intervals = ((span / MAX_DEFUZZ_STEP).ceil() as usize).max(1);
        let defuzz_step = span / defuzz_intervals as f64;

        Ok(InferenceEngine {
            error,
            delta_error,
            power,
            compiled,
            defuzz_intervals,
            defuzz_step,
        })
    }

    /// 推理：`(误差, 误差变化率) -> 功率命令`
    ///
    /// 纯函数。输出保证落在输出论域内；越界输入按论域边界钳位，
    /// NaN 输入与零激活一样走回退路径（返回论域下界并告警）。
    #[must_use]
    pub fn infer(&self, error_value: f64, delta_error_value: f64) -> f64 {
        let out = self.power.universe();

        if error_value.is_nan() || delta_error_value.is_nan() {
            tracing::warn!(
                error = error_value,
                delta_error = delta_error_value,
                "non-finite inference input, returning minimum power"
            );
            return out.lo();
        }

        let e = self.clamped(&self.error, error_value);
        let de = self.clamped(&self.delta_error, delta_error_value);

        // 规则强度：前件隶属度取最小
        let strengths: SmallVec<[f64; 16]> = self
            .compiled
            .iter()
            .map(|rule| {
                self.error
                    .degree_at(rule.error_term, e)
                    .min(self.delta_error.degree_at(rule.delta_term, de))
            })
            .collect();

        // 削顶聚合 + 梯形法重心。步长因子在分子分母中同时出现，
        // 比值里约去，只保留端点半权。
        let mut num = 0.0;
        let mut den = 0.0;
        for i in 0..=self.defuzz_intervals {
            let y = out.lo() + self.defuzz_step * i as f64;
            let mut mu = 0.0;
            for (rule, &strength) in self.compiled.iter().zip(strengths.iter()) {
                if strength <= mu {
                    // 该规则的贡献不可能超过当前聚合值
                    continue;
                }
                let clipped = strength.min(self.power.degree_at(rule.power_term, y));
                if clipped > mu {
                    mu = clipped;
                }
            }
            let w = if i == 0 || i == self.defuzz_intervals {
                0.5
            } else {
                1.0
            };
            num += w * y * mu;
            den += w * mu;
        }

        if den <= ZERO_FIRING_EPS {
            tracing::warn!(
                error = e,
                delta_error = de,
                fallback = out.lo(),
                "no rule fired, returning minimum power"
            );
            return out.lo();
        }

        num / den
    }

    /// 模糊化快照：钳位后两个输入对每个标签的隶属度
    ///
    /// 与 [`infer`](Self::infer) 的第 1–2 步一致，供观测钩子和诊断输出使用。
    #[must_use]
    pub fn fuzzify(&self, error_value: f64, delta_error_value: f64) -> FuzzifiedInputs {
        let e = self.error.universe().clamp(error_value);
        let de = self.delta_error.universe().clamp(delta_error_value);
        FuzzifiedInputs {
            error: self.error.fuzzify(e),
            delta_error: self.delta_error.fuzzify(de),
        }
    }

    /// 误差变量
    #[must_use]
    pub fn error_variable(&self) -> &LinguisticVariable {
        &self.error
    }

    /// 误差变化率变量
    #[must_use]
    pub fn delta_error_variable(&self) -> &LinguisticVariable {
        &self.delta_error
    }

    /// 输出（功率）变量
    #[must_use]
    pub fn power_variable(&self) -> &LinguisticVariable {
        &self.power
    }

    /// 规则数量
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.compiled.len()
    }

    /// 钳位并在实际截断时记 trace（设置大目标时入口误差例行越界，
    /// 因此不用 warn 级别）
    fn clamped(&self, variable: &LinguisticVariable, x: f64) -> f64 {
        let clamped = variable.universe().clamp(x);
        if clamped != x {
            tracing::trace!(
                variable = variable.name(),
                input = x,
                clamped,
                "input outside universe, clamped to bound"
            );
        }
        clamped
    }
}
