// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use hotel_inventory::domain::dto::{CreateCategoryDto, CreateRateDto, CreateRoomDto};

// ==========================================
// CreateRoomDto 构建器
// ==========================================

pub struct RoomBuilder {
    number: String,
    detail: Option<String>,
    price: f64,
    floor_id: i64,
    category_id: i64,
    room_state_id: i64,
}

impl RoomBuilder {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
            detail: None,
            price: 0.0,
            floor_id: 1,
            category_id: 1,
            room_state_id: 1,
        }
    }

    pub fn detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn floor(mut self, floor_id: i64) -> Self {
        self.floor_id = floor_id;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn state(mut self, room_state_id: i64) -> Self {
        self.room_state_id = room_state_id;
        self
    }

    pub fn build(self) -> CreateRoomDto {
        CreateRoomDto {
            number: self.number,
            detail: self.detail,
            price: self.price,
            floor_id: self.floor_id,
            category_id: self.category_id,
            room_state_id: self.room_state_id,
        }
    }
}

// ==========================================
// CreateRateDto 构建器
// ==========================================

pub struct RateBuilder {
    description: String,
    price_per_night: f64,
    discount: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    category_id: i64,
}

impl RateBuilder {
    pub fn new(description: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            description: description.to_string(),
            price_per_night: 100.0,
            discount: 0.0,
            start_date,
            end_date,
            category_id: 1,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price_per_night = price;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn build(self) -> CreateRateDto {
        CreateRateDto {
            description: self.description,
            price_per_night: self.price_per_night,
            discount: self.discount,
            start_date: self.start_date,
            end_date: self.end_date,
            category_id: self.category_id,
        }
    }
}

/// 房型 DTO
pub fn category_dto(description: &str, capacity: i32, service_id: i64) -> CreateCategoryDto {
    CreateCategoryDto {
        description: description.to_string(),
        capacity,
        service_id,
    }
}

/// 日期简写
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("无效日期")
}
