// ==========================================
// 酒店客房库存 - 房型与酒店服务领域模型
// ==========================================
// 对齐: category / hotel_service 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Category - 房型
// ==========================================
// 被 Room.category_id 与 Rate.category_id 引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub description: String, // 描述 (3..=50)
    pub capacity: i32,       // 容纳人数 (>0)
    pub service_id: i64,     // 所属酒店服务
    pub active: bool,
}

impl Category {
    pub fn new(description: impl Into<String>, capacity: i32, service_id: i64) -> Self {
        Self {
            id: 0,
            description: description.into(),
            capacity,
            service_id,
            active: true,
        }
    }
}

// ==========================================
// HotelService - 酒店服务
// ==========================================
// 本系统只读; 房型通过 service_id 归属于某个服务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelService {
    pub id: i64,
    pub name: String,
    pub active: bool,
}
