//! 模糊规则 - 前件 AND 组合 + 单一后件
//!
//! 每条规则形如：
//!
//! ```text
//! IF error IS negative AND delta_error IS zero THEN p_motor IS medium
//! ```
//!
//! 前件之间用模糊 AND（取最小）组合。规则在这里只是数据；
//! 变量名 / 标签的存在性校验在引擎构建时统一完成（见 `engine`）。
//! 规则顺序被保留：聚合取最大，数学上与顺序无关，但固定顺序
//! 让激活强度的日志和测试输出可复现。

/// 单条模糊规则
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// 前件：(输入变量名, 标签) 对
    antecedents: Vec<(String, String)>,
    /// 后件：输出变量的标签
    consequent: String,
}

impl Rule {
    /// 构造规则
    ///
    /// # 示例
    ///
    /// ```rust
    /// use lift_fuzzy::Rule;
    ///
    /// let rule = Rule::new(
    ///     &[("error", "negative"), ("delta_error", "zero")],
    ///     "medium",
    /// );
    /// assert_eq!(rule.consequent(), "medium");
    /// ```
    pub fn new(antecedents: &[(&str, &str)], consequent: &str) -> Self {
        Rule {
            antecedents: antecedents
                .iter()
                .map(|(var, label)| (var.to_string(), label.to_string()))
                .collect(),
            consequent: consequent.to_string(),
        }
    }

    /// 前件列表
    #[must_use]
    pub fn antecedents(&self) -> &[(String, String)] {
        &self.antecedents
    }

    /// 后件标签
    #[must_use]
    pub fn consequent(&self) -> &str {
        &self.consequent
    }

    /// 某个输入变量对应的前件标签
    #[must_use]
    pub fn label_for(&self, variable: &str) -> Option<&str> {
        self.antecedents
            .iter()
            .find(|(var, _)| var == variable)
            .map(|(_, label)| label.as_str())
    }
}

/// 有序规则库
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// 创建空规则库
    #[must_use]
    pub fn new() -> Self {
        RuleBase { rules: Vec::new() }
    }

    /// 追加一条规则（消费式构建）
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 追加一条规则
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// 规则数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按定义顺序迭代规则
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl From<Vec<Rule>> for RuleBase {
    fn from(rules: Vec<Rule>) -> Self {
        RuleBase { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new(&[("error", "positive"), ("delta_error", "negative")], "low");

        assert_eq!(rule.antecedents().len(), 2);
        assert_eq!(rule.consequent(), "low");
        assert_eq!(rule.label_for("error"), Some("positive"));
        assert_eq!(rule.label_for("delta_error"), Some("negative"));
        assert_eq!(rule.label_for("p_motor"), None);
    }

    #[test]
    fn test_rule_base_order_preserved() {
        let base = RuleBase::new()
            .rule(Rule::new(&[("e", "a"), ("de", "x")], "low"))
            .rule(Rule::new(&[("e", "b"), ("de", "y")], "medium"))
            .rule(Rule::new(&[("e", "c"), ("de", "z")], "high"));

        assert_eq!(base.len(), 3);
        assert!(!base.is_empty());

        let consequents: Vec<&str> = base.iter().map(|r| r.consequent()).collect();
        assert_eq!(consequents, ["low", "medium", "high"]);
    }

    #[test]
    fn test_rule_base_from_vec() {
        let rules = vec![
            Rule::new(&[("e", "a"), ("de", "x")], "low"),
            Rule::new(&[("e", "b"), ("de", "y")], "high"),
        ];
        let base = RuleBase::from(rules);
        assert_eq!(base.len(), 2);
    }
}
