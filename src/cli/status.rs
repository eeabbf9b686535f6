//! status 命令 - 显示配置状态

use anyhow::Result;

use crate::config::Config;

pub async fn run(config: Config) -> Result<()> {
    println!("🌅 Morningbot 状态\n");

    // 微信公众号
    println!("📡 微信公众号:");
    if config.wechat.app_id.is_some() && config.wechat.app_secret.is_some() {
        println!("  ✅ App ID / App Secret");
    } else {
        println!("  ❌ App ID / App Secret（未配置）");
    }
    if config.wechat.template_id.is_some() {
        println!("  ✅ 模板消息 ID");
    } else {
        println!("  ❌ 模板消息 ID（未配置）");
    }
    println!("  接收者: {} 个", config.wechat.users.len());

    // 天气
    println!("\n🌤 天气:");
    println!("  城市: {}/{}", config.weather.province, config.weather.city);
    println!("  超时: {} 秒", config.weather.timeout_secs);

    // 每日内容
    println!("\n💌 每日内容:");
    match config.daily.love_date {
        Some(date) => println!("  纪念日: {}", date),
        None => println!("  纪念日: 未配置"),
    }
    println!("  语录: {} 条", config.daily.quotes.len());

    println!("\n使用 `morningbot push` 执行一次推送");
    println!("使用 `morningbot weather` 查询当日天气");

    Ok(())
}
