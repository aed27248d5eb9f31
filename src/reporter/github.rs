use crate::Result;
use crate::annotation::AnnotationMessage;
use crate::reporter::sink::{ConsoleSink, LifecycleSink, OutputSink};
use crate::stack::{SourceLocation, StackTrace};
use crate::summary::{ErrorRecord, FailureNode, RunSummary, TestNode};

/// GitHub Actions 注解报告器
///
/// 进度事件写普通日志行；运行结束时遍历失败树，
/// 对每条错误记录输出一行 `::error` 工作流命令，
/// CI 端据此在源码行内显示诊断
pub struct GithubReporter {
    sink: Box<dyn OutputSink>,
}

impl GithubReporter {
    /// 注册名
    pub const NAME: &'static str = "github";

    pub fn new() -> Self {
        Self::with_sink(ConsoleSink)
    }

    pub fn with_sink(sink: impl OutputSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// 输出一个失败测试的全部错误记录
    ///
    /// 单条记录写失败只告警，不中断剩余记录:
    /// 报告器自身出错绝不能掩盖它正在报告的测试失败
    fn report_test(&mut self, test: &TestNode) {
        for error in &test.errors {
            if let Err(e) = self.report_error(&test.title, error) {
                tracing::warn!("failed to annotate error for \"{}\": {}", test.title, e);
            }
        }
    }

    fn report_error(&mut self, title: &str, error: &ErrorRecord) -> Result<()> {
        let stack = StackTrace::parse(error.stack.as_deref().unwrap_or(""));
        // 栈里一帧都没有时用 <unknown>/0/0 兜底
        let top = stack.top().cloned().unwrap_or_else(SourceLocation::unknown);

        let message = AnnotationMessage::new("error")
            .property("file", top.file)
            .property("line", top.line.to_string())
            .property("col", top.column.to_string())
            .property("title", title)
            .message(&error.message);

        self.sink.write_line(&message.render())
    }
}

impl Default for GithubReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleSink for GithubReporter {
    fn start(&mut self) -> Result<()> {
        self.sink.write_line("starting")
    }

    fn on_suite_start(&mut self, name: &str) -> Result<()> {
        self.sink.write_line(&format!("suite started \"{}\"", name))
    }

    fn on_suite_end(&mut self, name: &str) -> Result<()> {
        self.sink
            .write_line(&format!("suite completed \"{}\"", name))
    }

    fn on_group_start(&mut self, title: &str) -> Result<()> {
        self.sink.write_line(&format!("group started \"{}\"", title))
    }

    fn on_group_end(&mut self, title: &str) -> Result<()> {
        self.sink.write_line(&format!("group ended \"{}\"", title))
    }

    fn on_test_start(&mut self, title: &str) -> Result<()> {
        self.sink.write_line(&format!("test started \"{}\"", title))
    }

    fn on_test_end(&mut self, title: &str) -> Result<()> {
        self.sink
            .write_line(&format!("test completed \"{}\"", title))
    }

    /// 失败树固定两层：顶层独立测试直接出错误，
    /// 分组节点再下钻一层到它的测试子节点
    fn end(&mut self, summary: &RunSummary) -> Result<()> {
        for node in &summary.failure_tree {
            match node {
                FailureNode::Test(test) => self.report_test(test),
                FailureNode::Group(group) => {
                    for test in &group.children {
                        self.report_test(test);
                    }
                }
            }
        }
        Ok(())
    }
}
