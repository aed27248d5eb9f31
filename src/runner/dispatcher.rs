use std::io::BufRead;

use crate::Result;
use crate::config::RunnerConfig;
use crate::event::{EventStream, LifecycleEvent};
use crate::reporter::{LifecycleSink, ReporterRegistry};
use crate::summary::{RunCounts, RunSummary};

/// 把事件扇出给所有激活的报告器
///
/// 单个报告器回调失败只告警，不影响其他报告器、
/// 也不中断后续事件（报告器崩溃不能掩盖测试失败本身）
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn LifecycleSink>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn attach(&mut self, sink: Box<dyn LifecycleSink>) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// 在任何事件之前调用一次
    pub fn start_all(&mut self) {
        for sink in &mut self.sinks {
            if let Err(e) = sink.start() {
                tracing::warn!("reporter start failed: {}", e);
            }
        }
    }

    pub fn dispatch(&mut self, event: &LifecycleEvent) {
        for sink in &mut self.sinks {
            let result = match event {
                LifecycleEvent::SuiteStart { name } => sink.on_suite_start(name),
                LifecycleEvent::SuiteEnd { name } => sink.on_suite_end(name),
                LifecycleEvent::GroupStart { title } => sink.on_group_start(title),
                LifecycleEvent::GroupEnd { title } => sink.on_group_end(title),
                LifecycleEvent::TestStart { title } => sink.on_test_start(title),
                LifecycleEvent::TestEnd { title } => sink.on_test_end(title),
                LifecycleEvent::RunEnd { summary } => sink.end(summary),
            };
            if let Err(e) = result {
                tracing::warn!("reporter callback failed: {}", e);
            }
        }
    }

    pub fn end_all(&mut self, summary: &RunSummary) {
        for sink in &mut self.sinks {
            if let Err(e) = sink.end(summary) {
                tracing::warn!("reporter end failed: {}", e);
            }
        }
    }
}

/// 一次运行的最终结果
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// runEnd 事件里的计数；流里没有 runEnd 则为 None
    pub counts: Option<RunCounts>,
    /// 实际输出的错误注解条数
    pub error_count: usize,
}

impl RunOutcome {
    /// 是否应以非零码退出
    pub fn failed(&self) -> bool {
        self.error_count > 0
            || self
                .counts
                .as_ref()
                .map(|c| c.failed > 0)
                .unwrap_or(false)
    }
}

/// 入口：按配置激活报告器，消费整个事件流
///
/// 流在 runEnd 之前断掉时，用空汇总补一次 end 调用，
/// 让报告器有机会收尾
pub fn run(config: &RunnerConfig, input: impl BufRead) -> Result<RunOutcome> {
    let registry = ReporterRegistry::with_builtins();
    let mut dispatcher = EventDispatcher::new();
    for name in &config.reporters.activated {
        dispatcher.attach(registry.create(name)?);
    }

    run_with_dispatcher(&mut dispatcher, input)
}

/// 测试注入自定义 sink 时走这里
pub fn run_with_dispatcher(
    dispatcher: &mut EventDispatcher,
    input: impl BufRead,
) -> Result<RunOutcome> {
    dispatcher.start_all();

    let mut outcome = RunOutcome::default();
    let mut saw_run_end = false;

    for event in EventStream::new(input) {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                // 读取中断和流截断同等对待：先让报告器收尾再上抛
                if !saw_run_end {
                    dispatcher.end_all(&RunSummary::default());
                }
                return Err(e);
            }
        };
        if let LifecycleEvent::RunEnd { summary } = &event {
            saw_run_end = true;
            outcome.counts = Some(summary.counts.clone());
            outcome.error_count = summary.error_count();
        }
        dispatcher.dispatch(&event);
    }

    if !saw_run_end {
        tracing::warn!("event stream ended without a runEnd event");
        dispatcher.end_all(&RunSummary::default());
    }

    Ok(outcome)
}
