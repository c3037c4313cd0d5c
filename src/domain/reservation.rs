// ==========================================
// 酒店客房库存 - 预订 (外部信号)
// ==========================================
// 本系统不是预订引擎；预订记录只作为停用客房的否决条件
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub room_id: i64,
    pub guest_name: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub active: bool,
}
