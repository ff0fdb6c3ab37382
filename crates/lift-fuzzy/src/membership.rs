//! 隶属函数 - 三角形 / 梯形模糊集
//!
//! 对任意实数 x 求其在一个模糊集中的隶属度，闭式分段线性求值，
//! 不依赖任何离散化数组：
//!
//! ```text
//! tri(a, b, c):          trap(a, b, c, d):
//!        b                    b ---- c
//!       / \                  /        \
//!      /   \                /          \
//! --- a     c ---      --- a            d ---
//! ```
//!
//! 支持退化顶点（相邻顶点重合形成垂直边），例如 `tri(-10, -10, 0)`
//! 在左边界处直接取峰值 1。
//!
//! # 示例
//!
//! ```rust
//! use lift_fuzzy::MembershipFunction;
//!
//! let zero = MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap();
//! assert!((zero.degree(0.0) - 1.0).abs() < 1e-10);
//! assert!((zero.degree(-5.0) - 0.5).abs() < 1e-10);
//! assert_eq!(zero.degree(42.0), 0.0);
//! ```

use crate::error::{FuzzyError, Result};
use std::fmt;

/// 隶属函数（三角形或梯形）
///
/// 顶点满足 `a ≤ b ≤ c (≤ d)`，构造时校验；构造后不可变。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MembershipFunction {
    /// 三角形：支撑 `[a, c]`，峰点 `b`
    Triangular { a: f64, b: f64, c: f64 },
    /// 梯形：支撑 `[a, d]`，峰区 `[b, c]`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// 构造三角形隶属函数
    ///
    /// # 错误
    ///
    /// 顶点含非有限值或不满足 `a ≤ b ≤ c` 时返回错误。
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        let points = [a, b, c];
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::NonFinitePoint {
                shape: "tri",
                points: points.to_vec(),
            });
        }
        if !(a <= b && b <= c) {
            return Err(FuzzyError::UnorderedPoints {
                shape: "tri",
                points: points.to_vec(),
            });
        }
        Ok(MembershipFunction::Triangular { a, b, c })
    }

    /// 构造梯形隶属函数
    ///
    /// # 错误
    ///
    /// 顶点含非有限值或不满足 `a ≤ b ≤ c ≤ d` 时返回错误。
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        let points = [a, b, c, d];
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::NonFinitePoint {
                shape: "trap",
                points: points.to_vec(),
            });
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::UnorderedPoints {
                shape: "trap",
                points: points.to_vec(),
            });
        }
        Ok(MembershipFunction::Trapezoidal { a, b, c, d })
    }

    /// 求 x 处的隶属度，结果在 `[0, 1]`
    ///
    /// 全函数：支撑外为 0，峰区为 1，其余线性插值。
    /// 分支顺序保证退化顶点（垂直边）不会触发除零。
    #[inline]
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x == b {
                    1.0
                } else if x < b {
                    // x ∈ [a, b) 蕴含 b > a
                    (x - a) / (b - a)
                } else {
                    // x ∈ (b, c] 蕴含 c > b
                    (c - x) / (c - b)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }

    /// 支撑区间 `[a, last]`（隶属度非零的闭包）
    #[must_use]
    pub fn support(&self) -> (f64, f64) {
        match *self {
            MembershipFunction::Triangular { a, c, .. } => (a, c),
            MembershipFunction::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    /// 峰区间（隶属度为 1 的区域）
    #[must_use]
    pub fn peak(&self) -> (f64, f64) {
        match *self {
            MembershipFunction::Triangular { b, .. } => (b, b),
            MembershipFunction::Trapezoidal { b, c, .. } => (b, c),
        }
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MembershipFunction::Triangular { a, b, c } => write!(f, "tri({a}, {b}, {c})"),
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                write!(f, "trap({a}, {b}, {c}, {d})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_basic_shape() {
        let mf = MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap();

        // 支撑外为 0
        assert_eq!(mf.degree(-10.1), 0.0);
        assert_eq!(mf.degree(10.1), 0.0);
        assert_eq!(mf.degree(-100.0), 0.0);

        // 边界恰好为 0
        assert_eq!(mf.degree(-10.0), 0.0);
        assert_eq!(mf.degree(10.0), 0.0);

        // 峰点为 1
        assert!((mf.degree(0.0) - 1.0).abs() < 1e-10);

        // 线性段中点
        assert!((mf.degree(-5.0) - 0.5).abs() < 1e-10);
        assert!((mf.degree(5.0) - 0.5).abs() < 1e-10);
        assert!((mf.degree(-2.5) - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_triangular_degenerate_left_edge() {
        // 原始配置中的 negative 集：tri(-10, -10, 0)，左边垂直
        let mf = MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap();

        assert!((mf.degree(-10.0) - 1.0).abs() < 1e-10);
        assert!((mf.degree(-5.0) - 0.5).abs() < 1e-10);
        assert_eq!(mf.degree(0.0), 0.0);
        assert_eq!(mf.degree(-10.5), 0.0);
    }

    #[test]
    fn test_triangular_degenerate_right_edge() {
        // 原始配置中的 positive 集：tri(0, 10, 10)，右边垂直
        let mf = MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap();

        assert_eq!(mf.degree(0.0), 0.0);
        assert!((mf.degree(5.0) - 0.5).abs() < 1e-10);
        assert!((mf.degree(10.0) - 1.0).abs() < 1e-10);
        assert_eq!(mf.degree(10.5), 0.0);
    }

    #[test]
    fn test_triangular_fully_degenerate() {
        // 三点重合：单点脉冲
        let mf = MembershipFunction::triangular(5.0, 5.0, 5.0).unwrap();

        assert!((mf.degree(5.0) - 1.0).abs() < 1e-10);
        assert_eq!(mf.degree(4.999), 0.0);
        assert_eq!(mf.degree(5.001), 0.0);
    }

    #[test]
    fn test_trapezoidal_basic_shape() {
        let mf = MembershipFunction::trapezoidal(0.0, 10.0, 20.0, 40.0).unwrap();

        assert_eq!(mf.degree(-1.0), 0.0);
        assert_eq!(mf.degree(0.0), 0.0);
        assert!((mf.degree(5.0) - 0.5).abs() < 1e-10);

        // 峰区整段为 1
        assert!((mf.degree(10.0) - 1.0).abs() < 1e-10);
        assert!((mf.degree(15.0) - 1.0).abs() < 1e-10);
        assert!((mf.degree(20.0) - 1.0).abs() < 1e-10);

        // 下降段斜率 1/20
        assert!((mf.degree(30.0) - 0.5).abs() < 1e-10);
        assert_eq!(mf.degree(40.0), 0.0);
        assert_eq!(mf.degree(41.0), 0.0);
    }

    #[test]
    fn test_trapezoidal_flat_everywhere() {
        // 覆盖整个论域的"恒真"集：trap(lo, lo, hi, hi)
        let mf = MembershipFunction::trapezoidal(-10.0, -10.0, 10.0, 10.0).unwrap();

        assert!((mf.degree(-10.0) - 1.0).abs() < 1e-10);
        assert!((mf.degree(0.0) - 1.0).abs() < 1e-10);
        assert!((mf.degree(10.0) - 1.0).abs() < 1e-10);
        assert_eq!(mf.degree(10.001), 0.0);
    }

    #[test]
    fn test_degree_always_in_unit_interval() {
        let shapes = [
            MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap(),
            MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap(),
            MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap(),
            MembershipFunction::trapezoidal(0.0, 1.0, 2.0, 3.0).unwrap(),
        ];
        // 论域网格扫描
        for mf in &shapes {
            let mut x = -20.0;
            while x <= 20.0 {
                let d = mf.degree(x);
                assert!((0.0..=1.0).contains(&d), "degree({x}) = {d} for {mf}");
                x += 0.173;
            }
        }
    }

    #[test]
    fn test_invalid_points_rejected() {
        // 顺序错误
        let err = MembershipFunction::triangular(3.0, 1.0, 5.0).unwrap_err();
        assert!(matches!(err, FuzzyError::UnorderedPoints { shape: "tri", .. }));

        let err = MembershipFunction::trapezoidal(0.0, 2.0, 1.0, 3.0).unwrap_err();
        assert!(matches!(err, FuzzyError::UnorderedPoints { shape: "trap", .. }));

        // 非有限值
        let err = MembershipFunction::triangular(0.0, f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, FuzzyError::NonFinitePoint { .. }));

        let err = MembershipFunction::trapezoidal(0.0, 1.0, 2.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, FuzzyError::NonFinitePoint { .. }));
    }

    #[test]
    fn test_support_and_peak() {
        let tri = MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap();
        assert_eq!(tri.support(), (0.0, 10.0));
        assert_eq!(tri.peak(), (5.0, 5.0));

        let trap = MembershipFunction::trapezoidal(0.0, 2.0, 8.0, 10.0).unwrap();
        assert_eq!(trap.support(), (0.0, 10.0));
        assert_eq!(trap.peak(), (2.0, 8.0));
    }

    #[test]
    fn test_display() {
        let tri = MembershipFunction::triangular(-10.0, -10.0, 0.0).unwrap();
        assert_eq!(format!("{}", tri), "tri(-10, -10, 0)");

        let trap = MembershipFunction::trapezoidal(0.0, 1.0, 2.0, 3.0).unwrap();
        assert_eq!(format!("{}", trap), "trap(0, 1, 2, 3)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mf = MembershipFunction::triangular(-10.0, 0.0, 10.0).unwrap();
        let json = serde_json::to_string(&mf).unwrap();
        let back: MembershipFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(mf, back);
    }
}
