use colored::Colorize;

use crate::Result;
use crate::reporter::sink::{ConsoleSink, LifecycleSink, OutputSink};
use crate::summary::RunSummary;

/// 控制台汇总报告器
///
/// 忽略进度事件，运行结束时打印一段带颜色的统计。
/// 和 github 报告器并列注册，可同时激活
pub struct SummaryReporter {
    sink: Box<dyn OutputSink>,
}

impl SummaryReporter {
    /// 注册名
    pub const NAME: &'static str = "summary";

    pub fn new() -> Self {
        Self::with_sink(ConsoleSink)
    }

    pub fn with_sink(sink: impl OutputSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleSink for SummaryReporter {
    fn end(&mut self, summary: &RunSummary) -> Result<()> {
        let counts = &summary.counts;

        self.sink.write_line(&"━".repeat(50))?;
        self.sink.write_line(&format!("{}", "Summary".bold()))?;
        self.sink.write_line(&"━".repeat(50))?;

        let line = if counts.skipped > 0 {
            format!(
                "  {}: {} passed, {} failed, {} skipped, {} total",
                "Tests".bold(),
                counts.passed.to_string().green(),
                counts.failed.to_string().red(),
                counts.skipped.to_string().dimmed(),
                counts.total
            )
        } else if counts.failed == 0 {
            format!(
                "  {}: {} passed, {} total",
                "Tests".bold(),
                counts.passed.to_string().green(),
                counts.total
            )
        } else {
            format!(
                "  {}: {} passed, {} failed, {} total",
                "Tests".bold(),
                counts.passed.to_string().green(),
                counts.failed.to_string().red(),
                counts.total
            )
        };
        self.sink.write_line(&line)?;

        self.sink.write_line(&format!(
            "  {}: {:.3}s",
            "Duration".bold(),
            counts.duration_ms as f64 / 1000.0
        ))
    }
}
