use serde::{Deserialize, Serialize};

/// 整个运行结束后的汇总报告
///
/// 由外部测试引擎在 runEnd 事件里携带，这里只消费不生成
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// 通过/失败计数
    #[serde(default)]
    pub counts: RunCounts,

    /// 失败树：顶层子节点是独立测试或分组，分组下再挂一层测试
    #[serde(default)]
    pub failure_tree: Vec<FailureNode>,
}

impl RunSummary {
    /// 失败树中错误记录的总数
    pub fn error_count(&self) -> usize {
        self.failure_tree
            .iter()
            .map(|node| match node {
                FailureNode::Test(test) => test.errors.len(),
                FailureNode::Group(group) => {
                    group.children.iter().map(|t| t.errors.len()).sum()
                }
            })
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.counts.failed > 0 || !self.failure_tree.is_empty()
    }
}

/// 运行计数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCounts {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub passed: usize,
    #[serde(default)]
    pub failed: usize,
    #[serde(default)]
    pub skipped: usize,
    /// 总耗时（毫秒）
    #[serde(default)]
    pub duration_ms: u64,
}

/// 失败树的顶层节点
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FailureNode {
    Test(TestNode),
    Group(GroupNode),
}

/// 失败的单个测试及其错误记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestNode {
    pub title: String,
    #[serde(default)]
    pub errors: Vec<ErrorRecord>,
}

impl TestNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: ErrorRecord) -> Self {
        self.errors.push(error);
        self
    }
}

/// 失败的分组，子节点固定是测试（两层遍历约定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupNode {
    pub title: String,
    #[serde(default)]
    pub children: Vec<TestNode>,
}

impl GroupNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_test(mut self, test: TestNode) -> Self {
        self.children.push(test);
        self
    }
}

/// 单条错误记录：消息 + 可选的原始栈文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_count_two_levels() {
        let summary = RunSummary {
            counts: RunCounts::default(),
            failure_tree: vec![
                FailureNode::Test(
                    TestNode::new("standalone")
                        .with_error(ErrorRecord::new("e1"))
                        .with_error(ErrorRecord::new("e2")),
                ),
                FailureNode::Group(
                    GroupNode::new("math")
                        .with_test(TestNode::new("adds").with_error(ErrorRecord::new("e3"))),
                ),
            ],
        };

        assert_eq!(summary.error_count(), 3);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_deserialize_failure_tree() {
        let json = r#"{
            "counts": {"total": 3, "passed": 1, "failed": 2},
            "failureTree": [
                {"type": "test", "title": "t1", "errors": [{"message": "m1"}]},
                {"type": "group", "title": "g", "children": [
                    {"title": "t2", "errors": [{"message": "m2", "stack": "at a.ts:1:2"}]}
                ]}
            ]
        }"#;

        let summary: RunSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.counts.failed, 2);
        assert_eq!(summary.failure_tree.len(), 2);
        assert_eq!(summary.error_count(), 2);

        match &summary.failure_tree[1] {
            FailureNode::Group(group) => {
                assert_eq!(group.title, "g");
                assert_eq!(group.children[0].errors[0].stack.as_deref(), Some("at a.ts:1:2"));
            }
            _ => panic!("Expected group node"),
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary: RunSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.error_count(), 0);
        assert!(!summary.has_failures());
    }
}
