// ==========================================
// 酒店客房库存 - 房价生效裁决器
// ==========================================
// 职责:
// - 按有序格式表解析日期文本, 第一个匹配的格式生效
// - 选出指定日期生效的房价 (active && start <= d <= end, 两端包含)
// - 按每晚价格反查可达客房 (房价 -> 房型 -> 客房)
// 红线: 不访问存储, 输入由调用方从仓储读取后传入
// ==========================================

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::domain::rate::Rate;
use crate::domain::room::Room;

/// 默认日期格式（按顺序尝试）
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y", // dd/mm/yyyy
    "%Y-%m-%d", // yyyy-mm-dd
    "%m/%d/%Y", // mm/dd/yyyy
    "%d-%m-%Y", // dd-mm-yyyy
    "%Y/%m/%d", // yyyy/mm/dd
    "%m-%d-%Y", // mm-dd-yyyy
];

/// 价格比较容差（两位小数货币）
pub const PRICE_EPSILON: f64 = 0.005;

/// 年份下限（短年份视为格式错误）
const MIN_YEAR: i32 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("日期格式无效: '{input}'（支持的格式: {}）", accepted.join(", "))]
pub struct DateFormatError {
    pub input: String,
    pub accepted: Vec<String>,
}

/// 价格是否匹配（容差内相等）
pub fn price_matches(a: f64, b: f64) -> bool {
    (a - b).abs() < PRICE_EPSILON
}

// ==========================================
// RateValidityResolver
// ==========================================
#[derive(Debug, Clone)]
pub struct RateValidityResolver {
    formats: Vec<String>,
}

impl Default for RateValidityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RateValidityResolver {
    /// 使用默认格式表
    pub fn new() -> Self {
        Self {
            formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// 使用自定义格式表（为空时回退默认）
    pub fn with_formats(formats: Vec<String>) -> Self {
        if formats.is_empty() {
            return Self::new();
        }
        Self { formats }
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// 解析日期文本
    ///
    /// 按格式表顺序尝试, 第一个成功且年份 >= 1000 的结果生效;
    /// 全部失败返回 DateFormatError, 从不返回空成功
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, DateFormatError> {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            for format in &self.formats {
                if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                    if date.year() >= MIN_YEAR {
                        debug!(input = trimmed, format = %format, date = %date, "日期解析成功");
                        return Ok(date);
                    }
                }
            }
        }

        Err(DateFormatError {
            input: text.to_string(),
            accepted: self.formats.clone(),
        })
    }

    /// 指定日期生效的全部房价（保持输入顺序）
    pub fn in_force(&self, rates: &[Rate], date: NaiveDate) -> Vec<Rate> {
        rates
            .iter()
            .filter(|rate| rate.is_in_force_on(date))
            .cloned()
            .collect()
    }

    /// 单个房型在指定日期的生效房价
    ///
    /// 区间重叠时取 start_date 最晚者, 再按 id 最大者
    pub fn in_force_for_category<'a>(
        &self,
        rates: &'a [Rate],
        category_id: i64,
        date: NaiveDate,
    ) -> Option<&'a Rate> {
        rates
            .iter()
            .filter(|rate| rate.category_id == category_id && rate.is_in_force_on(date))
            .max_by_key(|rate| (rate.start_date, rate.id))
    }

    /// 按每晚价格反查客房
    ///
    /// 有效房价中价格匹配者的房型集合 -> 这些房型下的有效客房 (保持客房输入顺序)
    pub fn rooms_for_price(&self, rates: &[Rate], rooms: &[Room], price: f64) -> Vec<Room> {
        let categories: HashSet<i64> = rates
            .iter()
            .filter(|rate| rate.active && price_matches(rate.price_per_night, price))
            .map(|rate| rate.category_id)
            .collect();

        if categories.is_empty() {
            return Vec::new();
        }

        rooms
            .iter()
            .filter(|room| room.active && categories.contains(&room.category_id))
            .cloned()
            .collect()
    }
}
