use chrono::NaiveDate;
use serde::Deserialize;
use super::{non_blank, ImageRef, ProductRef};

/// 促销活动
#[derive(Debug, Clone, Deserialize)]
pub struct Promotion {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: Option<String>,

    pub banner: Option<ImageRef>,

    /// 开始日期（含），为空表示不限
    pub start: Option<NaiveDate>,

    /// 结束日期（含），为空表示不限
    pub end: Option<NaiveDate>,

    /// 是否在网站上显示
    pub active: Option<bool>,

    #[serde(rename = "featuredProducts", default)]
    pub featured_products: Option<Vec<ProductRef>>,
}

impl Promotion {
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// 在指定日期是否正在进行
    pub fn is_running(&self, today: NaiveDate) -> bool {
        if !self.active.unwrap_or(false) {
            return false;
        }
        let started = self.start.map_or(true, |start| start <= today);
        let not_ended = self.end.map_or(true, |end| today <= end);
        started && not_ended
    }

    pub fn featured_products(&self) -> &[ProductRef] {
        self.featured_products.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn promotion(active: bool, start: Option<&str>, end: Option<&str>) -> Promotion {
        serde_json::from_value(json!({
            "_id": "promo",
            "title": "ลดราคาพื้นไม้",
            "active": active,
            "start": start,
            "end": end
        }))
        .unwrap()
    }

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_running_within_bounds() {
        let promo = promotion(true, Some("2026-10-01"), Some("2026-10-31"));
        assert!(promo.is_running(day("2026-10-01")));
        assert!(promo.is_running(day("2026-10-31")));
        assert!(!promo.is_running(day("2026-09-30")));
        assert!(!promo.is_running(day("2026-11-01")));
    }

    #[test]
    fn test_open_bounds() {
        let promo = promotion(true, None, None);
        assert!(promo.is_running(day("2030-01-01")));

        let promo = promotion(true, None, Some("2026-01-01"));
        assert!(!promo.is_running(day("2026-01-02")));
    }

    #[test]
    fn test_inactive_never_runs() {
        let promo = promotion(false, None, None);
        assert!(!promo.is_running(day("2026-10-19")));
    }
}
