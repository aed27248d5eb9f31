use serde::{Deserialize, Serialize};

use crate::summary::RunSummary;

/// 测试引擎发出的生命周期事件
///
/// JSON 编码为每行一个对象，用 `event` 字段做标签:
/// `{"event":"testStart","title":"adds numbers"}`
///
/// 六个进度事件只带标题/名称；终结事件 `runEnd` 额外携带失败汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LifecycleEvent {
    SuiteStart { name: String },
    SuiteEnd { name: String },
    GroupStart { title: String },
    GroupEnd { title: String },
    TestStart { title: String },
    TestEnd { title: String },
    RunEnd { summary: RunSummary },
}
