//! 日志基础设施

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局 subscriber，`RUST_LOG` 优先于配置中的级别
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("日志初始化失败: {}", e))?;

        Ok(())
    }
}
