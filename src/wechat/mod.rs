//! 微信公众号模板消息
//!
//! 先用 AppID/AppSecret 换 access_token，再调模板消息接口推送。
//! access_token 每次运行重新获取，不做缓存

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::WechatConfig;
use crate::error::{MorningbotError, Result};

const TOKEN_URL: &str = "https://api.weixin.qq.com/cgi-bin/token";
const SEND_URL: &str = "https://api.weixin.qq.com/cgi-bin/message/template/send";

/// access_token 响应，出错时微信返回 errcode/errmsg 而没有 token 字段
#[derive(Debug, Clone, Default, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

/// 模板字段值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateValue {
    pub value: String,
}

impl TemplateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// 模板消息体，和微信接口的 JSON 结构一一对应
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMessage {
    pub touser: String,
    pub template_id: String,
    pub data: BTreeMap<String, TemplateValue>,
}

/// 解析 access_token 响应
///
/// 缺少 access_token 时报错并携带原始响应体，便于排查
pub fn token_from_response(raw: &str) -> Result<String> {
    let parsed: AccessTokenResponse = serde_json::from_str(raw).unwrap_or_default();
    parsed.access_token.ok_or_else(|| MorningbotError::AccessToken {
        raw: raw.to_string(),
    })
}

/// 校验模板消息发送响应
///
/// errcode 缺失或非 0 视为失败，错误中携带 openid 和原始响应体；
/// errcode 为 0 时返回解析后的响应
pub fn check_send_response(openid: &str, raw: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
    let errcode = parsed.get("errcode").and_then(Value::as_i64).unwrap_or(-1);

    if errcode != 0 {
        return Err(MorningbotError::TemplateSend {
            openid: openid.to_string(),
            raw: raw.to_string(),
        });
    }

    Ok(parsed)
}

/// 微信公众号客户端
#[derive(Debug)]
pub struct WechatClient {
    app_id: String,
    app_secret: String,
    template_id: String,
    http_client: reqwest::Client,
}

impl WechatClient {
    /// 创建新的微信客户端，凭据不全时直接报配置错误
    pub fn new(config: &WechatConfig) -> Result<Self> {
        let app_id = config
            .app_id
            .clone()
            .ok_or_else(|| MorningbotError::Config("微信 App ID 未配置".to_string()))?;
        let app_secret = config
            .app_secret
            .clone()
            .ok_or_else(|| MorningbotError::Config("微信 App Secret 未配置".to_string()))?;
        let template_id = config
            .template_id
            .clone()
            .ok_or_else(|| MorningbotError::Config("微信模板消息 ID 未配置".to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            app_id,
            app_secret,
            template_id,
            http_client,
        })
    }

    /// 获取 access_token
    pub async fn get_access_token(&self) -> Result<String> {
        let raw = self
            .http_client
            .get(TOKEN_URL)
            .query(&[
                ("grant_type", "client_credential"),
                ("appid", self.app_id.as_str()),
                ("secret", self.app_secret.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        debug!("access_token 原始响应: {}", raw);

        token_from_response(&raw)
    }

    /// 发送一条模板消息
    pub async fn send_template(
        &self,
        access_token: &str,
        openid: &str,
        data: &BTreeMap<String, TemplateValue>,
    ) -> Result<Value> {
        let message = TemplateMessage {
            touser: openid.to_string(),
            template_id: self.template_id.clone(),
            data: data.clone(),
        };

        let raw = self
            .http_client
            .post(SEND_URL)
            .query(&[("access_token", access_token)])
            .json(&message)
            .send()
            .await?
            .text()
            .await?;

        debug!("发送原始响应 (openid={}): {}", openid, raw);

        let reply = check_send_response(openid, &raw)?;
        info!("模板消息已发送到 {}", openid);

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_response_ok() {
        let raw = r#"{"access_token":"TOKEN-123","expires_in":7200}"#;
        assert_eq!(token_from_response(raw).unwrap(), "TOKEN-123");
    }

    #[test]
    fn test_token_from_response_missing_carries_raw() {
        let raw = r#"{"errcode":40013,"errmsg":"invalid appid"}"#;
        let err = token_from_response(raw).unwrap_err();
        assert!(matches!(err, MorningbotError::AccessToken { .. }));
        // 错误信息里要能看到原始响应体
        assert!(err.to_string().contains("invalid appid"));
    }

    #[test]
    fn test_token_from_response_not_json() {
        let err = token_from_response("<html>502</html>").unwrap_err();
        assert!(err.to_string().contains("<html>502</html>"));
    }

    #[test]
    fn test_check_send_response_ok() {
        let raw = r#"{"errcode":0,"errmsg":"ok","msgid":200228332}"#;
        let reply = check_send_response("openid-1", raw).unwrap();
        assert_eq!(reply["msgid"], 200228332);
    }

    #[test]
    fn test_check_send_response_error_names_openid() {
        let raw = r#"{"errcode":40003,"errmsg":"invalid openid"}"#;
        let err = check_send_response("openid-bad", raw).unwrap_err();
        assert!(matches!(err, MorningbotError::TemplateSend { .. }));
        let text = err.to_string();
        assert!(text.contains("openid-bad"));
        assert!(text.contains("invalid openid"));
    }

    #[test]
    fn test_check_send_response_missing_errcode() {
        // errcode 缺失按失败处理
        assert!(check_send_response("openid-1", "{}").is_err());
        assert!(check_send_response("openid-1", "not json").is_err());
    }

    #[test]
    fn test_template_message_wire_shape() {
        let mut data = BTreeMap::new();
        data.insert("city".to_string(), TemplateValue::new("广州"));
        data.insert("weather".to_string(), TemplateValue::new("晴"));

        let message = TemplateMessage {
            touser: "openid-1".to_string(),
            template_id: "tpl-1".to_string(),
            data,
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "touser": "openid-1",
                "template_id": "tpl-1",
                "data": {
                    "city": {"value": "广州"},
                    "weather": {"value": "晴"},
                }
            })
        );
    }

    #[test]
    fn test_client_requires_credentials() {
        let config = WechatConfig::default();
        let err = WechatClient::new(&config).unwrap_err();
        assert!(matches!(err, MorningbotError::Config(_)));
    }
}
