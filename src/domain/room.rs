// ==========================================
// 酒店客房库存 - 客房与客房状态领域模型
// ==========================================
// 对齐: room / room_state 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RoomState - 客房状态 (空闲/清扫中/维修中...)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomState {
    pub id: i64,
    pub description: String, // 描述 (非空, ≤50)
    pub active: bool,
}

impl RoomState {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
            active: true,
        }
    }
}

// ==========================================
// Room - 客房
// ==========================================
// 红线: number 在有效客房中唯一 (已停用客房不参与唯一性校验)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: String,        // 房号 (≤50)
    pub detail: Option<String>, // 备注
    pub price: f64,            // 基础价格 (≥0)

    // ===== 引用 =====
    pub floor_id: i64,
    pub category_id: i64,
    pub room_state_id: i64,

    pub active: bool,
}
