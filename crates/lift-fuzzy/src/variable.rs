//! 语言变量 - 论域 + 有序模糊集集合
//!
//! 一个语言变量把一个标量论域（如误差 `[-10, 10]`）划分为若干带标签的
//! 模糊集（如 `negative` / `zero` / `positive`）。变量在引擎构建时冻结，
//! 之后只读，可跨线程共享。
//!
//! 标签顺序即插入顺序，模糊化结果与规则编译都按此顺序排列，
//! 保证结果可复现。

use crate::error::{FuzzyError, Result};
use crate::membership::MembershipFunction;

/// 标量论域 `[lo, hi]`
///
/// 推理输入在模糊化前被钳位到论域内（传感器瞬时越界按边界处理），
/// 输出论域则决定去模糊化的积分范围。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Universe {
    lo: f64,
    hi: f64,
}

impl Universe {
    /// 构造论域
    ///
    /// # 错误
    ///
    /// `lo >= hi` 或边界非有限时返回 [`FuzzyError::InvalidUniverse`]。
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(FuzzyError::InvalidUniverse { lo, hi });
        }
        Ok(Universe { lo, hi })
    }

    /// 下界
    #[inline]
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// 上界
    #[inline]
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// 论域宽度
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// x 是否在论域内（闭区间）
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }

    /// 钳位到论域边界
    ///
    /// 越界输入饱和到最近的边界；NaN 不在此处理（由引擎入口拦截）。
    #[inline]
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.lo {
            self.lo
        } else if x > self.hi {
            self.hi
        } else {
            x
        }
    }
}

/// 变量中的一个模糊集：标签 + 隶属函数
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    label: String,
    shape: MembershipFunction,
}

impl Term {
    /// 标签
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 隶属函数
    #[must_use]
    pub fn shape(&self) -> &MembershipFunction {
        &self.shape
    }
}

/// 单个标签的模糊化结果
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermDegree {
    /// 标签
    pub label: String,
    /// 隶属度，`[0, 1]`
    pub degree: f64,
}

/// 语言变量
///
/// # 示例
///
/// ```rust
/// use lift_fuzzy::{LinguisticVariable, MembershipFunction, Universe};
///
/// let error = LinguisticVariable::new("error", Universe::new(-10.0, 10.0).unwrap())
///     .term("negative", MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap())
///     .unwrap()
///     .term("zero", MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap())
///     .unwrap()
///     .term("positive", MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap())
///     .unwrap();
///
/// assert_eq!(error.len(), 3);
/// assert_eq!(error.index_of("zero"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<Term>,
}

impl LinguisticVariable {
    /// 创建空变量（随后用 [`term`](Self::term) 链式添加模糊集）
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        LinguisticVariable {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// 添加一个模糊集（消费式构建）
    ///
    /// # 错误
    ///
    /// 标签重复时返回 [`FuzzyError::DuplicateLabel`]。
    pub fn term(mut self, label: impl Into<String>, shape: MembershipFunction) -> Result<Self> {
        let label = label.into();
        if self.terms.iter().any(|t| t.label == label) {
            return Err(FuzzyError::DuplicateLabel {
                variable: self.name,
                label,
            });
        }
        self.terms.push(Term { label, shape });
        Ok(self)
    }

    /// 变量名
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 论域
    #[must_use]
    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// 模糊集数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// 是否没有任何模糊集
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// 按插入顺序迭代模糊集
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// 标签的序号（规则编译用）
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.label == label)
    }

    /// 第 idx 个模糊集的标签
    ///
    /// # Panics
    ///
    /// 序号越界时 panic；序号只应来自 [`index_of`](Self::index_of)。
    #[must_use]
    pub fn label_at(&self, idx: usize) -> &str {
        &self.terms[idx].label
    }

    /// 第 idx 个模糊集在 x 处的隶属度
    ///
    /// 不做钳位：调用方（引擎）先用 [`Universe::clamp`] 处理输入。
    #[inline]
    #[must_use]
    pub fn degree_at(&self, idx: usize, x: f64) -> f64 {
        self.terms[idx].shape.degree(x)
    }

    /// 模糊化：x 对每个标签的隶属度，按标签插入顺序
    #[must_use]
    pub fn fuzzify(&self, x: f64) -> Vec<TermDegree> {
        self.terms
            .iter()
            .map(|t| TermDegree {
                label: t.label.clone(),
                degree: t.shape.degree(x),
            })
            .collect()
    }
}
