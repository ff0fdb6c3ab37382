//! # Lift Fuzzy
//!
//! 电梯电机功率控制的 Mamdani 模糊推理原语（无 I/O 依赖）
//!
//! ## 模块
//!
//! - `membership`: 三角形 / 梯形隶属函数，闭式分段线性求值
//! - `variable`: 论域 + 语言变量（有序模糊集集合）
//! - `rule`: 规则与规则库（纯数据，构建时统一校验）
//! - `engine`: Mamdani 推理引擎（min 蕴含 / max 聚合 / 重心去模糊化）
//! - `error`: 构造期错误类型
//!
//! ## 分层
//!
//! ```text
//! InferenceEngine::infer(error, delta_error) -> power
//!     ↓ 钳位 / 模糊化 / 规则强度
//! LinguisticVariable
//!     ↓ 逐标签求隶属度
//! MembershipFunction
//! ```
//!
//! 引擎构建后完全不可变，`infer` 是纯函数：无内部状态、无副作用，
//! 同一输入永远得到同一输出。并发调用无需任何同步。
//!
//! ## 示例
//!
//! ```rust
//! use lift_fuzzy::{
//!     InferenceEngine, LinguisticVariable, MembershipFunction, Rule, RuleBase, Universe,
//! };
//!
//! let error = LinguisticVariable::new("error", Universe::new(-10.0, 10.0).unwrap())
//!     .term("negative", MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap())
//!     .unwrap()
//!     .term("positive", MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap())
//!     .unwrap();
//! let delta = LinguisticVariable::new("delta_error", Universe::new(-10.0, 10.0).unwrap())
//!     .term("any", MembershipFunction::trapezoidal(-10.0, -10.0, 10.0, 10.0).unwrap())
//!     .unwrap();
//! let power = LinguisticVariable::new("p_motor", Universe::new(0.0, 100.0).unwrap())
//!     .term("low", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
//!     .unwrap()
//!     .term("high", MembershipFunction::triangular(50.0, 100.0, 100.0).unwrap())
//!     .unwrap();
//!
//! let rules = RuleBase::new()
//!     .rule(Rule::new(&[("error", "negative"), ("delta_error", "any")], "low"))
//!     .rule(Rule::new(&[("error", "positive"), ("delta_error", "any")], "high"));
//!
//! let engine = InferenceEngine::new(error, delta, power, rules).unwrap();
//! let power = engine.infer(8.0, 0.0);
//! assert!(power > 50.0 && power <= 100.0);
//! ```

pub mod engine;
pub mod error;
pub mod membership;
pub mod rule;
pub mod variable;

// 重新导出常用类型
pub use engine::{FuzzifiedInputs, InferenceEngine, MAX_DEFUZZ_STEP};
pub use error::{FuzzyError, Result};
pub use membership::MembershipFunction;
pub use rule::{Rule, RuleBase};
pub use variable::{LinguisticVariable, Term, TermDegree, Universe};
