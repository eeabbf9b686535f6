//! Morningbot - 微信早安天气推送
//!
//! 每次运行执行一次推送流程：取天气 → 取 access_token → 发模板消息，
//! 定时触发交给外部的 cron

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

mod cli;
mod config;
mod daily;
mod error;
mod push;
mod weather;
mod wechat;

#[cfg(test)]
mod tests;

use crate::config::Config;

/// Morningbot CLI
#[derive(Parser)]
#[command(name = "morningbot")]
#[command(about = "微信早安天气推送")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 执行一次完整推送（交给外部定时器按天触发）
    Push,
    /// 查询并打印当日天气
    Weather {
        /// 省份（默认取配置）
        #[arg(short, long)]
        province: Option<String>,
        /// 城市（默认取配置）
        #[arg(short = 'C', long)]
        city: Option<String>,
    },
    /// 查看配置状态
    Status,
    /// 初始化配置文件
    Init {
        /// 强制覆盖已有配置
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("morningbot=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // 加载配置
    let config_path = cli.config.as_deref();
    let config = match Config::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("加载配置失败: {}，使用默认配置", e);
            Config::default()
        }
    };

    match cli.command {
        Commands::Push => {
            cli::push::run(config).await?;
        }
        Commands::Weather { province, city } => {
            cli::weather::run(config, province, city).await?;
        }
        Commands::Status => {
            cli::status::run(config).await?;
        }
        Commands::Init { force } => {
            cli::init::run(config_path, force).await?;
        }
    }

    Ok(())
}
