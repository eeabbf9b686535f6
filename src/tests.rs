//! 测试模块

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::push::build_template_data;
    use crate::weather::reading_from_body;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.wechat.users.is_empty());
    }

    #[test]
    fn test_body_to_template_fields() {
        // 接口响应一路走到模板字段
        let body = r#"var data= {"weatherinfo":{"weather":"晴","temp":"28","tempn":"19"}};"#;
        let reading = reading_from_body(body);
        let data = build_template_data("广州", &reading, Some(520), "早安");

        assert_eq!(data["city"].value, "广州");
        assert_eq!(data["weather"].value, "晴");
        assert_eq!(data["min_temperature"].value, "19");
        assert_eq!(data["max_temperature"].value, "28");
        assert_eq!(data["love_days"].value, "520");
        assert_eq!(data["note"].value, "早安");
    }

    #[test]
    fn test_degraded_body_still_renders() {
        // 反爬页面降级为占位值后模板照样能渲染
        let reading = reading_from_body("<html>blocked</html>");
        let data = build_template_data("广州", &reading, None, "早安");

        assert_eq!(data["weather"].value, "未知");
        assert_eq!(data["min_temperature"].value, "");
        assert_eq!(data["max_temperature"].value, "");
        assert!(!data.contains_key("love_days"));
    }
}
