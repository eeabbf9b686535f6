//! push 命令 - 执行一次完整推送

use anyhow::Result;

use crate::config::Config;
use crate::push;

pub async fn run(config: Config) -> Result<()> {
    println!("🌅 开始早安推送...\n");

    push::run(&config).await?;

    println!("✅ 推送完成，共 {} 个接收者", config.wechat.users.len());

    Ok(())
}
