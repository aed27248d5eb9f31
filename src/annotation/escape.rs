//! 工作流命令的转义规则
//!
//! 注意替换顺序：`%` 必须最先替换，否则后插入的 `%XX` 序列会被二次转义

/// 转义自由文本消息（命令的 message 部分）
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// 转义属性值
///
/// 在 `escape_data` 的基础上额外转义 `:` 和 `,`（属性分隔符）
pub fn escape_property(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
        .replace(':', "%3A")
        .replace(',', "%2C")
}
