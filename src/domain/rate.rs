// ==========================================
// 酒店客房库存 - 房价领域模型
// ==========================================
// 对齐: rate 表
// 红线: start_date <= end_date 始终成立; 同房型允许区间重叠, 读取时再裁决
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Rate - 房价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: i64,
    pub description: String, // 描述 (3..=255)
    pub price_per_night: f64, // 每晚价格 (>0)
    pub discount: f64,       // 折扣 (≥0)

    // ===== 有效区间 (闭区间) =====
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub category_id: i64,
    pub active: bool,
}

impl Rate {
    /// 判断房价在指定日期是否生效
    ///
    /// 规则: active && start_date <= date <= end_date (两端包含)
    pub fn is_in_force_on(&self, date: NaiveDate) -> bool {
        self.active && self.start_date <= date && date <= self.end_date
    }
}
