// ==========================================
// 酒店客房库存 - 请求 DTO
// ==========================================
// 新建/修改共用同一套字段规则；修改与停用额外携带 id
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::floor::Floor;
use crate::domain::rate::Rate;
use crate::domain::room::{Room, RoomState};

/// 停用（软删除）请求
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteDto {
    pub id: i64,
}

// ===== 楼层 =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFloorDto {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFloorDto {
    pub id: i64,
    pub description: String,
}

// ===== 房型 =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub description: String,
    pub capacity: i32,
    pub service_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryDto {
    pub id: i64,
    pub description: String,
    pub capacity: i32,
    pub service_id: i64,
}

// ===== 客房状态 =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoomStateDto {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoomStateDto {
    pub id: i64,
    pub description: String,
}

// ===== 客房 =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoomDto {
    pub number: String,
    pub detail: Option<String>,
    pub price: f64,
    pub floor_id: i64,
    pub category_id: i64,
    pub room_state_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoomDto {
    pub id: i64,
    pub number: String,
    pub detail: Option<String>,
    pub price: f64,
    pub floor_id: i64,
    pub category_id: i64,
    pub room_state_id: i64,
}

// ===== 房价 =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRateDto {
    pub description: String,
    pub price_per_night: f64,
    pub discount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRateDto {
    pub id: i64,
    pub description: String,
    pub price_per_night: f64,
    pub discount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: i64,
}

// ==========================================
// DTO -> 实体 (文本字段去首尾空白)
// ==========================================

impl CreateFloorDto {
    pub fn into_entity(self) -> Floor {
        Floor::new(self.description.trim())
    }
}

impl UpdateFloorDto {
    pub fn into_entity(self) -> Floor {
        Floor {
            id: self.id,
            description: self.description.trim().to_string(),
            active: true,
        }
    }
}

impl CreateCategoryDto {
    pub fn into_entity(self) -> Category {
        Category::new(self.description.trim(), self.capacity, self.service_id)
    }
}

impl UpdateCategoryDto {
    pub fn into_entity(self) -> Category {
        Category {
            id: self.id,
            description: self.description.trim().to_string(),
            capacity: self.capacity,
            service_id: self.service_id,
            active: true,
        }
    }
}

impl CreateRoomStateDto {
    pub fn into_entity(self) -> RoomState {
        RoomState::new(self.description.trim())
    }
}

impl UpdateRoomStateDto {
    pub fn into_entity(self) -> RoomState {
        RoomState {
            id: self.id,
            description: self.description.trim().to_string(),
            active: true,
        }
    }
}

fn clean_detail(detail: Option<String>) -> Option<String> {
    detail
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

impl CreateRoomDto {
    pub fn into_entity(self) -> Room {
        Room {
            id: 0,
            number: self.number.trim().to_string(),
            detail: clean_detail(self.detail),
            price: self.price,
            floor_id: self.floor_id,
            category_id: self.category_id,
            room_state_id: self.room_state_id,
            active: true,
        }
    }
}

impl UpdateRoomDto {
    pub fn into_entity(self) -> Room {
        Room {
            id: self.id,
            number: self.number.trim().to_string(),
            detail: clean_detail(self.detail),
            price: self.price,
            floor_id: self.floor_id,
            category_id: self.category_id,
            room_state_id: self.room_state_id,
            active: true,
        }
    }
}

impl CreateRateDto {
    pub fn into_entity(self) -> Rate {
        Rate {
            id: 0,
            description: self.description.trim().to_string(),
            price_per_night: self.price_per_night,
            discount: self.discount,
            start_date: self.start_date,
            end_date: self.end_date,
            category_id: self.category_id,
            active: true,
        }
    }
}

impl UpdateRateDto {
    pub fn into_entity(self) -> Rate {
        Rate {
            id: self.id,
            description: self.description.trim().to_string(),
            price_per_night: self.price_per_night,
            discount: self.discount,
            start_date: self.start_date,
            end_date: self.end_date,
            category_id: self.category_id,
            active: true,
        }
    }
}
