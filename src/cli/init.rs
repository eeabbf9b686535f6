//! init 命令 - 初始化配置文件

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;

pub async fn run(config_path: Option<&str>, force: bool) -> Result<()> {
    let path = if let Some(p) = config_path {
        Path::new(p).to_path_buf()
    } else {
        Config::default_config_path()?
    };

    // 检查文件是否已存在
    if path.exists() && !force {
        println!("配置文件已存在: {}", path.display());
        println!("使用 --force 强制覆盖");
        return Ok(());
    }

    // 创建示例配置
    let config = Config::example();
    config.save(config_path)?;

    info!("配置文件已创建: {}", path.display());
    println!("✅ 配置文件已创建: {}", path.display());
    println!("\n请编辑配置文件，填入公众号信息：");
    println!("  - app_id / app_secret（公众号后台获取）");
    println!("  - template_id（早安天气模板的 ID）");
    println!("  - users（接收者的 OpenID 列表）");
    println!("\n也可以用环境变量覆盖凭据：");
    println!("  WECHAT_APP_ID / WECHAT_APP_SECRET / WECHAT_TEMPLATE_ID");

    Ok(())
}
