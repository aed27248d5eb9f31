use std::sync::{Arc, Mutex};

use crate::Result;
use crate::summary::RunSummary;

/// 按行追加的输出口（单写者，无需加锁约定）
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// 标准输出
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

/// 收集到内存的输出口，测试用
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出目前写入的所有行
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .expect("sink lock poisoned")
            .push(line.to_string());
        Ok(())
    }
}

/// 生命周期接收器
///
/// 由事件调度器按引擎发出的顺序同步调用。六个进度回调
/// 提供空实现，报告器只需覆盖自己关心的那几个
pub trait LifecycleSink {
    /// 任何事件之前调用一次
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_suite_start(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn on_suite_end(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn on_group_start(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn on_group_end(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn on_test_start(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn on_test_end(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    /// 运行结束，拿到失败汇总
    fn end(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_lines() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert_eq!(sink.lines(), vec!["a".to_string(), "b".to_string()]);
    }
}
