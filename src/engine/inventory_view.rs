// ==========================================
// 酒店客房库存 - 库存视图构建器
// ==========================================
// 职责: 有效客房 + 楼层 + 房型 + 当日生效房价 + 所属服务 -> RoomInfo
// 红线:
// - 引用缺失或已停用时使用占位文本, 单个客房不得使整个投影失败
// - 只读, 不访问存储; 快照由调用方读取
// ==========================================

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::domain::category::{Category, HotelService};
use crate::domain::floor::Floor;
use crate::domain::inventory::{RoomInfo, NO_ACTIVE_RATE, NO_CATEGORY, NO_FLOOR, NO_SERVICE};
use crate::domain::rate::Rate;
use crate::domain::room::Room;
use crate::engine::rate_validity::RateValidityResolver;

/// 构建视图所需的存储快照
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    pub rooms: Vec<Room>,
    pub floors: Vec<Floor>,
    pub categories: Vec<Category>,
    pub services: Vec<HotelService>,
    pub rates: Vec<Rate>,
}

pub struct InventoryViewBuilder {
    resolver: RateValidityResolver,
}

impl InventoryViewBuilder {
    pub fn new(resolver: RateValidityResolver) -> Self {
        Self { resolver }
    }

    /// 构建客房信息投影（按客房输入顺序, 仅有效客房）
    pub fn build(&self, snapshot: &InventorySnapshot, today: NaiveDate) -> Vec<RoomInfo> {
        let floors: HashMap<i64, &Floor> = snapshot
            .floors
            .iter()
            .filter(|f| f.active)
            .map(|f| (f.id, f))
            .collect();
        let categories: HashMap<i64, &Category> = snapshot
            .categories
            .iter()
            .filter(|c| c.active)
            .map(|c| (c.id, c))
            .collect();
        let services: HashMap<i64, &HotelService> = snapshot
            .services
            .iter()
            .filter(|s| s.active)
            .map(|s| (s.id, s))
            .collect();

        snapshot
            .rooms
            .iter()
            .filter(|room| room.active)
            .map(|room| {
                let floor = floors
                    .get(&room.floor_id)
                    .map(|f| f.description.clone())
                    .unwrap_or_else(|| NO_FLOOR.to_string());

                let category = categories.get(&room.category_id);
                let category_text = category
                    .map(|c| c.description.clone())
                    .unwrap_or_else(|| NO_CATEGORY.to_string());

                let service = category
                    .and_then(|c| services.get(&c.service_id))
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| NO_SERVICE.to_string());

                // 房型已停用时不再展示其房价
                let rate_price = category.and_then(|c| {
                    self.resolver
                        .in_force_for_category(&snapshot.rates, c.id, today)
                        .map(|r| r.price_per_night)
                });
                let rate = match rate_price {
                    Some(price) => format!("{:.2}", price),
                    None => NO_ACTIVE_RATE.to_string(),
                };

                RoomInfo {
                    room: room.clone(),
                    floor,
                    category: category_text,
                    rate_price,
                    rate,
                    service,
                }
            })
            .collect()
    }
}

impl Default for InventoryViewBuilder {
    fn default() -> Self {
        Self::new(RateValidityResolver::new())
    }
}
