//! 推送流程：取天气 → 取 access_token → 渲染模板 → 逐个发送

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::config::Config;
use crate::daily;
use crate::weather::{WeatherClient, WeatherReading};
use crate::wechat::{TemplateValue, WechatClient};

/// 组装模板字段
///
/// 字段名必须和公众号模板里的变量名一致：
/// {{city.DATA}} / {{weather.DATA}} / {{min_temperature.DATA}} /
/// {{max_temperature.DATA}} / {{love_days.DATA}} / {{note.DATA}}
///
/// 没配置纪念日时不带 love_days 字段，模板里该位置渲染为空
pub fn build_template_data(
    city: &str,
    reading: &WeatherReading,
    love_days: Option<i64>,
    note: &str,
) -> BTreeMap<String, TemplateValue> {
    let mut data = BTreeMap::new();

    data.insert("city".to_string(), TemplateValue::new(city));
    data.insert(
        "weather".to_string(),
        TemplateValue::new(reading.weather.as_str()),
    );
    data.insert(
        "min_temperature".to_string(),
        TemplateValue::new(reading.temp_min.as_str()),
    );
    data.insert(
        "max_temperature".to_string(),
        TemplateValue::new(reading.temp_max.as_str()),
    );
    if let Some(days) = love_days {
        data.insert(
            "love_days".to_string(),
            TemplateValue::new(days.to_string()),
        );
    }
    data.insert("note".to_string(), TemplateValue::new(note));

    data
}

/// 执行一次完整推送
pub async fn run(config: &Config) -> Result<()> {
    let weather_client = WeatherClient::new(&config.weather)?;
    let wechat_client = WechatClient::new(&config.wechat)?;

    let province = &config.weather.province;
    let city = &config.weather.city;

    let reading = weather_client.fetch(province, city).await?;
    info!(
        "今日天气: {}/{} {} {}~{}℃",
        province, city, reading.weather, reading.temp_min, reading.temp_max
    );

    let access_token = wechat_client.get_access_token().await?;

    let love_days = config
        .daily
        .love_date
        .map(|start| daily::love_days(start, Local::now().date_naive()));
    let note = daily::pick_quote(&config.daily.quotes);

    let data = build_template_data(city, &reading, love_days, &note);

    // 按配置顺序逐个发送，一个失败直接中断后面的
    for openid in &config.wechat.users {
        wechat_client
            .send_template(&access_token, openid, &data)
            .await?;
    }

    info!("推送完成，共 {} 个接收者", config.wechat.users.len());

    Ok(())
}
