//! 配置系统
//!
//! 支持 TOML 配置文件和环境变量覆盖

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 微信公众号配置
    #[serde(default)]
    pub wechat: WechatConfig,

    /// 天气查询配置
    #[serde(default)]
    pub weather: WeatherConfig,

    /// 每日内容配置
    #[serde(default)]
    pub daily: DailyConfig,
}

/// 微信公众号配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WechatConfig {
    /// App ID
    pub app_id: Option<String>,
    /// App Secret
    pub app_secret: Option<String>,
    /// 模板消息 ID
    pub template_id: Option<String>,
    /// 接收者 OpenID 列表，按此顺序逐个发送
    #[serde(default)]
    pub users: Vec<String>,
}

/// 天气查询配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// 省份
    #[serde(default = "default_province")]
    pub province: String,
    /// 城市
    #[serde(default = "default_city")]
    pub city: String,
    /// 请求超时（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            province: default_province(),
            city: default_city(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 每日内容配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailyConfig {
    /// 恋爱纪念日（YYYY-MM-DD），不配置则模板里不带天数字段
    pub love_date: Option<NaiveDate>,
    /// 每日一句语录，每次推送随机挑一条
    #[serde(default)]
    pub quotes: Vec<String>,
}

// 默认值函数
fn default_province() -> String {
    "广东".to_string()
}

fn default_city() -> String {
    "广州".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    /// 加载配置文件
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            anyhow::bail!("配置文件不存在: {}", config_path.display());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("读取配置文件失败: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| "解析配置文件失败")?;

        // 环境变量覆盖
        config.apply_env_overrides();

        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_path()?
        };

        // 确保目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("无法获取家目录")?;
        Ok(home.join(".morningbot").join("config.toml"))
    }

    /// 应用环境变量覆盖
    fn apply_env_overrides(&mut self) {
        if let Ok(app_id) = std::env::var("WECHAT_APP_ID") {
            self.wechat.app_id = Some(app_id);
        }
        if let Ok(app_secret) = std::env::var("WECHAT_APP_SECRET") {
            self.wechat.app_secret = Some(app_secret);
        }
        if let Ok(template_id) = std::env::var("WECHAT_TEMPLATE_ID") {
            self.wechat.template_id = Some(template_id);
        }
    }

    /// 生成示例配置
    pub fn example() -> Self {
        Self {
            wechat: WechatConfig {
                app_id: Some("wx0123456789abcdef".to_string()),
                app_secret: Some("xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".to_string()),
                template_id: Some("template-id-xxxxxxxxxxxxxxxxxxxx".to_string()),
                users: vec!["openid-xxxxxxxxxxxxxxxx".to_string()],
            },
            weather: WeatherConfig {
                province: "广东".to_string(),
                city: "广州".to_string(),
                timeout_secs: 10,
            },
            daily: DailyConfig {
                love_date: NaiveDate::from_ymd_opt(2020, 1, 1),
                quotes: vec![
                    "会有始料不及的运气，也会有突如其来的惊喜。".to_string(),
                    "保持热爱，奔赴山海。".to_string(),
                    "万物皆有裂痕，那是光照进来的地方。".to_string(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.weather.province, "广东");
        assert_eq!(config.weather.city, "广州");
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.wechat.app_id.is_none());
        assert!(config.wechat.users.is_empty());
        assert!(config.daily.love_date.is_none());
        assert!(config.daily.quotes.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let content = r#"
            [wechat]
            app_id = "wx123"
            app_secret = "secret"
            template_id = "tpl"
            users = ["openid-1", "openid-2"]

            [weather]
            province = "北京"
            city = "北京"
        "#;

        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.wechat.app_id.as_deref(), Some("wx123"));
        assert_eq!(config.wechat.users.len(), 2);
        assert_eq!(config.weather.city, "北京");
        // 未配置的字段使用默认值
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.daily.love_date.is_none());
    }

    #[test]
    fn test_parse_love_date() {
        let content = r#"
            [daily]
            love_date = "2020-01-01"
            quotes = ["早安"]
        "#;

        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(
            config.daily.love_date,
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(config.daily.quotes, vec!["早安".to_string()]);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();

        let config = Config::example();
        config.save(Some(&path_str)).unwrap();

        let loaded = Config::load(Some(&path_str)).unwrap();
        assert_eq!(loaded.weather.province, config.weather.province);
        assert_eq!(loaded.wechat.users, config.wechat.users);
        assert_eq!(loaded.daily.love_date, config.daily.love_date);
        assert_eq!(loaded.daily.quotes, config.daily.quotes);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some("/nonexistent/morningbot/config.toml"));
        assert!(result.is_err());
    }
}
