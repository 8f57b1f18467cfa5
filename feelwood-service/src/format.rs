use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// 泰国时区 UTC+7
const BANGKOK_OFFSET_SECS: i32 = 7 * 3600;

const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.",
    "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// 佛历与公历的年份差
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// 把ISO时间格式化为泰文中等长度日期，例如 `5 พ.ย. 2568`
///
/// 缺失或无法解析时返回空字符串，由调用方显示"未指定日期"。
pub fn format_thai_date(iso: Option<&str>) -> String {
    let Some(raw) = iso.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return String::new();
    };

    match parse_local_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            THAI_MONTHS[date.month0() as usize],
            date.year() + BUDDHIST_ERA_OFFSET
        ),
        None => {
            tracing::warn!(value = raw, "Failed to format date");
            String::new()
        }
    }
}

/// 曼谷时区的今天，用于判断促销是否进行中
pub fn bangkok_today() -> NaiveDate {
    match FixedOffset::east_opt(BANGKOK_OFFSET_SECS) {
        Some(bangkok) => Utc::now().with_timezone(&bangkok).date_naive(),
        None => Utc::now().date_naive(),
    }
}

/// 解析为曼谷时区的日期
fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    let bangkok = FixedOffset::east_opt(BANGKOK_OFFSET_SECS)?;

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&bangkok).date_naive());
    }
    // 没有时区的时间视为本地时间
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return bangkok.from_local_datetime(&local).single().map(|dt| dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
