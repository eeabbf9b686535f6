//! weather 命令 - 查询并打印当日天气

use anyhow::Result;
use serde_json::json;

use crate::config::Config;
use crate::weather::WeatherClient;

pub async fn run(
    config: Config,
    province: Option<String>,
    city: Option<String>,
) -> Result<()> {
    let province = province.unwrap_or_else(|| config.weather.province.clone());
    let city = city.unwrap_or_else(|| config.weather.city.clone());

    let client = WeatherClient::new(&config.weather)?;
    let reading = client.fetch(&province, &city).await?;

    let result = json!({
        "province": province,
        "city": city,
        "weather": reading.weather,
        "temp_max": reading.temp_max,
        "temp_min": reading.temp_min,
    });

    println!("{}", result);

    Ok(())
}
