//! 错误类型定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorningbotError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("未知城市: {province}/{city}")]
    UnknownCity { province: String, city: String },

    #[error("获取 access_token 失败: {raw}")]
    AccessToken { raw: String },

    #[error("模板消息发送失败 (openid={openid}): {raw}")]
    TemplateSend { openid: String, raw: String },

    #[error("HTTP 错误: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, MorningbotError>;
