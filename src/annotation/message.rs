use crate::annotation::escape::{escape_data, escape_property};

/// 单条注解消息
///
/// 渲染格式: `::<command> k1=v1,k2=v2::<message>`
/// 属性按插入顺序输出，第一个属性前是一个空格，之后用逗号分隔（逗号后无空格）
#[derive(Debug, Clone)]
pub struct AnnotationMessage {
    command: String,
    properties: Vec<(String, String)>,
    message: String,
}

impl AnnotationMessage {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            properties: Vec::new(),
            message: String::new(),
        }
    }

    /// 追加一个属性（保持插入顺序）
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// 渲染为一行注解文本
    pub fn render(&self) -> String {
        let mut result = format!("::{}", self.command);
        for (i, (key, value)) in self.properties.iter().enumerate() {
            result.push(if i == 0 { ' ' } else { ',' });
            result.push_str(key);
            result.push('=');
            result.push_str(&escape_property(value));
        }
        result.push_str("::");
        result.push_str(&escape_data(&self.message));
        result
    }
}
