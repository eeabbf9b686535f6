//! 每日内容：恋爱天数与每日一句

use chrono::NaiveDate;
use rand::seq::SliceRandom;

/// 语录列表为空时的兜底文案
pub const FALLBACK_QUOTE: &str = "今天也要元气满满哦！";

/// 从纪念日到今天的天数，当天算第 1 天
pub fn love_days(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days() + 1
}

/// 从语录列表随机挑一条，列表为空时返回兜底文案
pub fn pick_quote(quotes: &[String]) -> String {
    quotes
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| FALLBACK_QUOTE.to_string())
}
