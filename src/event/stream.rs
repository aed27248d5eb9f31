use std::io::BufRead;

use crate::event::types::LifecycleEvent;
use crate::{Result, RuciError};

/// 从按行输入中解码生命周期事件
///
/// 引擎的输出里常混杂测试自身的 stdout，所以:
/// - 空行和不以 `{` 开头的行直接跳过
/// - 以 `{` 开头但解码失败的行记一条 warn 后跳过
///
/// 只有底层 IO 错误会终止迭代
pub struct EventStream<R: BufRead> {
    reader: R,
}

impl<R: BufRead> EventStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for EventStream<R> {
    type Item = Result<LifecycleEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(RuciError::IoError(e))),
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.starts_with('{') {
                continue;
            }

            match serde_json::from_str::<LifecycleEvent>(trimmed) {
                Ok(event) => return Some(Ok(event)),
                Err(e) => {
                    tracing::warn!("skipping malformed event line: {}", e);
                }
            }
        }
    }
}
