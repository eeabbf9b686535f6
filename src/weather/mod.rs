//! 天气查询模块
//!
//! 从 weather.com.cn 的定制接口抓取当日天气。接口返回的是
//! "var data= {...};" 形式的松散文本，也可能是 HTML 反爬页面，
//! 需要先尽量提取出其中的 JSON 对象再读字段

pub mod cityinfo;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::error::{MorningbotError, Result};

/// 天气占位值，接口数据拿不到时兜底
const UNKNOWN_WEATHER: &str = "未知";

/// 桌面浏览器 UA，接口对非浏览器请求返回反爬页面
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/103.0.0.0 Safari/537.36";

lazy_static! {
    static ref OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// 当日天气读数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub weather: String,
    pub temp_min: String,
    pub temp_max: String,
}

impl WeatherReading {
    fn unknown() -> Self {
        Self {
            weather: UNKNOWN_WEATHER.to_string(),
            temp_min: String::new(),
            temp_max: String::new(),
        }
    }
}

/// 从松散文本中尽量提取 JSON 对象
///
/// 接口可能返回：
/// - "var data= {...};"
/// - "var dataSK= {...};"
/// - 直接 "{...}"
/// - HTML / 空串 / 反爬内容
///
/// 任何输入都不会 panic，提取失败返回空对象
pub fn extract_json_object(text: &str) -> Map<String, Value> {
    if text.is_empty() {
        return Map::new();
    }

    // 先截取第一条语句
    let mut first = text.split(';').next().unwrap_or("").trim();

    // 去掉 "var xxx =" 前缀
    if let Some(pos) = first.find('=') {
        first = first[pos + 1..].trim();
    }

    // 不是以 { 开头时，在全文里找第一段 {...}
    let candidate = if first.starts_with('{') {
        first
    } else {
        match OBJECT_RE.find(text) {
            Some(m) => m.as_str().trim(),
            None => return Map::new(),
        }
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// 把接口响应体解析成天气读数
///
/// 外层 key 兼容 weatherinfo / data 两种写法，缺失字段降级为空串，
/// 整体拿不到对象时降级为占位值，不让推送流程中断
pub fn reading_from_body(body: &str) -> WeatherReading {
    let data = extract_json_object(body);

    let info = data
        .get("weatherinfo")
        .and_then(Value::as_object)
        .filter(|m| !m.is_empty())
        .or_else(|| {
            data.get("data")
                .and_then(Value::as_object)
                .filter(|m| !m.is_empty())
        });

    let Some(info) = info else {
        return WeatherReading::unknown();
    };

    let field = |key: &str| {
        info.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    WeatherReading {
        weather: field("weather"),
        // 接口字段 temp 是最高温，tempn 是最低温
        temp_max: field("temp"),
        temp_min: field("tempn"),
    }
}

/// 天气查询客户端
pub struct WeatherClient {
    http_client: reqwest::Client,
}

impl WeatherClient {
    /// 创建新的天气查询客户端
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http_client })
    }

    /// 查询指定城市的当日天气
    ///
    /// 只有传输层失败（超时、DNS、连接拒绝）才报错，
    /// 接口数据异常一律降级为占位读数
    pub async fn fetch(&self, province: &str, city: &str) -> Result<WeatherReading> {
        let area_id = cityinfo::area_id(province, city).ok_or_else(|| {
            MorningbotError::UnknownCity {
                province: province.to_string(),
                city: city.to_string(),
            }
        })?;

        let ts = chrono::Utc::now().timestamp_millis();
        let url = format!("http://d1.weather.com.cn/dingzhi/{}.html?_={}", area_id, ts);

        let body = self
            .http_client
            .get(&url)
            .header(
                "Referer",
                format!("http://www.weather.com.cn/weather1d/{}.shtml", area_id),
            )
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .text()
            .await?;

        debug!(
            "天气接口原始响应: {}",
            body.chars().take(200).collect::<String>()
        );

        let reading = reading_from_body(&body);
        if reading.weather == UNKNOWN_WEATHER {
            warn!("天气数据解析失败，使用占位值");
        }

        Ok(reading)
    }
}
