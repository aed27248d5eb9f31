use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ruci::config::{ConfigLoader, RunnerConfig};
use ruci::runner::{self, RunOutcome};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 显式指定配置文件路径（默认向上查找 ruci.toml）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 消费事件流并输出 CI 注解
    Annotate {
        /// 事件流文件，省略或 "-" 表示读 stdin
        path: Option<PathBuf>,

        /// 覆盖配置里激活的报告器（可重复）
        #[arg(long)]
        reporter: Vec<String>,
    },
}

/// 组装运行配置：配置文件 + CLI 覆盖
///
/// 进程全局状态只在这里碰，后面的 run 入口拿到的是纯数据
fn bootstrap(config_path: Option<&PathBuf>, reporters: &[String]) -> Result<RunnerConfig> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::find_and_load(),
    };

    if !reporters.is_empty() {
        config.reporters.activated = reporters.to_vec();
    }

    Ok(config)
}

/// 执行 CLI 命令，返回进程退出码
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::Annotate { path, reporter }) => {
            let config = bootstrap(cli.config.as_ref(), &reporter)?;
            let outcome = annotate(&config, path)?;
            Ok(if outcome.failed() { 1 } else { 0 })
        }
        None => {
            // 无子命令时默认从 stdin 注解
            let config = bootstrap(cli.config.as_ref(), &[])?;
            let outcome = annotate(&config, None)?;
            Ok(if outcome.failed() { 1 } else { 0 })
        }
    }
}

fn annotate(config: &RunnerConfig, path: Option<PathBuf>) -> Result<RunOutcome> {
    tracing::debug!(
        "annotating with reporters {:?} (engine files: {:?})",
        config.reporters.activated,
        config.files
    );

    let outcome = match path {
        Some(ref p) if p.to_str() != Some("-") => {
            let file = File::open(p)?;
            runner::run(config, BufReader::new(file))?
        }
        _ => {
            let stdin = io::stdin();
            runner::run(config, stdin.lock())?
        }
    };

    Ok(outcome)
}
