use std::collections::HashMap;

use crate::reporter::github::GithubReporter;
use crate::reporter::sink::LifecycleSink;
use crate::reporter::summary::SummaryReporter;
use crate::{Result, RuciError};

/// 报告器工厂
pub type ReporterFactory = fn() -> Box<dyn LifecycleSink>;

/// 按名字注册/创建报告器
///
/// 驱动方只拿到配置里的激活名单，通过这里换成具体实例
pub struct ReporterRegistry {
    entries: HashMap<String, ReporterFactory>,
}

impl ReporterRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 带内置报告器（github、summary）的注册表
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(GithubReporter::NAME, || Box::new(GithubReporter::new()));
        registry.register(SummaryReporter::NAME, || Box::new(SummaryReporter::new()));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, factory: ReporterFactory) {
        self.entries.insert(name.into(), factory);
    }

    /// 按名字创建实例，未注册的名字报错
    pub fn create(&self, name: &str) -> Result<Box<dyn LifecycleSink>> {
        self.entries
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RuciError::UnknownReporter(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 已注册的名字（排序后，方便出错提示）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ReporterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = ReporterRegistry::with_builtins();
        assert!(registry.contains("github"));
        assert!(registry.contains("summary"));
        assert_eq!(registry.names(), vec!["github", "summary"]);
    }

    #[test]
    fn test_create_known() {
        let registry = ReporterRegistry::with_builtins();
        assert!(registry.create("github").is_ok());
    }

    #[test]
    fn test_create_unknown() {
        let registry = ReporterRegistry::with_builtins();
        match registry.create("teamcity") {
            Err(RuciError::UnknownReporter(name)) => assert_eq!(name, "teamcity"),
            _ => panic!("Expected UnknownReporter"),
        }
    }

    #[test]
    fn test_register_custom() {
        struct Quiet;
        impl LifecycleSink for Quiet {}

        let mut registry = ReporterRegistry::new();
        registry.register("quiet", || Box::new(Quiet));
        assert!(registry.create("quiet").is_ok());
    }
}
