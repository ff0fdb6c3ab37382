//! 推理引擎错误类型定义
//!
//! 所有变体都是构造期错误：隶属函数、语言变量或规则库的定义有问题时，
//! 引擎拒绝构建。推理运行期（`infer`）是全函数，不产生错误 ——
//! 越界输入被钳位到论域边界，零激活时返回文档化的回退值。

use thiserror::Error;

/// 推理引擎错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    // ==================== 隶属函数 / 论域 ====================
    /// 隶属函数顶点包含非有限值（NaN / ±inf）
    #[error("Membership points must be finite: {shape}{points:?}")]
    NonFinitePoint {
        shape: &'static str,
        points: Vec<f64>,
    },

    /// 隶属函数顶点未按非递减顺序排列
    #[error("Membership points must be non-decreasing: {shape}{points:?}")]
    UnorderedPoints {
        shape: &'static str,
        points: Vec<f64>,
    },

    /// 论域边界无效（要求 lo < hi 且均为有限值）
    #[error("Invalid universe bounds: [{lo}, {hi}] (requires finite lo < hi)")]
    InvalidUniverse { lo: f64, hi: f64 },

    // ==================== 语言变量 ====================
    /// 同一变量中的标签重复
    #[error("Duplicate label '{label}' in variable '{variable}'")]
    DuplicateLabel { variable: String, label: String },

    /// 变量没有任何标签
    #[error("Variable '{variable}' has no terms")]
    EmptyVariable { variable: String },

    // ==================== 规则库 ====================
    /// 规则库为空
    #[error("Rule base is empty")]
    EmptyRuleBase,

    /// 规则引用了未知变量
    #[error("Rule #{rule}: unknown variable '{variable}'")]
    UnknownVariable { rule: usize, variable: String },

    /// 规则引用了变量中不存在的标签
    #[error("Rule #{rule}: variable '{variable}' has no label '{label}'")]
    UnknownLabel {
        rule: usize,
        variable: String,
        label: String,
    },

    /// 规则缺少某个输入变量的前件
    #[error("Rule #{rule}: missing antecedent for variable '{variable}'")]
    MissingAntecedent { rule: usize, variable: String },

    /// 规则对同一输入变量给出了多个前件
    #[error("Rule #{rule}: variable '{variable}' referenced more than once")]
    DuplicateAntecedent { rule: usize, variable: String },
}

impl FuzzyError {
    /// 是否为规则解析错误（而非隶属函数/变量定义错误）
    ///
    /// 规则错误指向规则列表本身，变量/形状错误指向变量定义，
    /// 上层配置加载器据此给出不同的修复提示。
    #[must_use]
    pub fn is_rule_error(&self) -> bool {
        matches!(
            self,
            FuzzyError::EmptyRuleBase
                | FuzzyError::UnknownVariable { .. }
                | FuzzyError::UnknownLabel { .. }
                | FuzzyError::MissingAntecedent { .. }
                | FuzzyError::DuplicateAntecedent { .. }
        )
    }

    /// 出错规则的序号（仅规则解析错误有值）
    #[must_use]
    pub fn rule_index(&self) -> Option<usize> {
        match self {
            FuzzyError::UnknownVariable { rule, .. }
            | FuzzyError::UnknownLabel { rule, .. }
            | FuzzyError::MissingAntecedent { rule, .. }
            | FuzzyError::DuplicateAntecedent { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

/// 推理引擎 Result 别名
pub type Result<T> = std::result::Result<T, FuzzyError>;
