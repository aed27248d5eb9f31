use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, RuciError};

/// 声明式运行配置
///
/// `files` 和 `plugins` 原样转发给外部测试引擎，这里不解释；
/// `reporters.activated` 决定本地激活哪些报告器
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// 测试文件 glob（交给引擎做发现）
    #[serde(default)]
    pub files: Vec<String>,

    /// 引擎插件名单
    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub reporters: ReporterOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReporterOptions {
    /// 激活的报告器名字
    #[serde(default = "default_activated")]
    pub activated: Vec<String>,
}

fn default_activated() -> Vec<String> {
    vec!["github".to_string()]
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            activated: default_activated(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            plugins: Vec::new(),
            reporters: ReporterOptions::default(),
        }
    }
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "ruci.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RunnerConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RuciError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及父目录递归查找
    /// 2. 用户配置目录 ~/.config/ruci/
    ///
    /// 都找不到时返回默认配置
    pub fn find_and_load() -> RunnerConfig {
        Self::try_load_from_current_dir()
            .or_else(Self::try_load_from_user_dir)
            .unwrap_or_default()
    }

    /// 尝试从当前目录及其父目录加载
    fn try_load_from_current_dir() -> Option<RunnerConfig> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Self::load_from_path(&config_path).ok();
            }

            // 尝试父目录
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// 尝试从用户配置目录加载
    fn try_load_from_user_dir() -> Option<RunnerConfig> {
        let home = dirs::home_dir()?;
        let config_path = home.join(".config").join("ruci").join(Self::CONFIG_FILE);

        if config_path.exists() {
            Self::load_from_path(&config_path).ok()
        } else {
            None
        }
    }
}
