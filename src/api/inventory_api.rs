// ==========================================
// 酒店客房库存 - 库存视图 API
// ==========================================
// 职责: 客房信息投影 (客房 + 楼层 + 房型 + 当日房价 + 所属服务)
// 只读; 只有存储读取失败会使查询失败
// ==========================================

use chrono::NaiveDate;
use tracing::debug;

use crate::api::common::ApiContext;
use crate::api::error::ApiResult;
use crate::domain::inventory::RoomInfo;
use crate::engine::inventory_view::{InventorySnapshot, InventoryViewBuilder};
use crate::repository::EntityStore;

pub struct InventoryApi {
    ctx: ApiContext,
    builder: InventoryViewBuilder,
}

impl InventoryApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self {
            ctx,
            builder: InventoryViewBuilder::default(),
        }
    }

    /// 以本地当日构建客房信息
    pub fn get_room_info(&self) -> ApiResult<Vec<RoomInfo>> {
        self.get_room_info_on(chrono::Local::now().date_naive())
    }

    /// 以指定日期构建客房信息
    pub fn get_room_info_on(&self, date: NaiveDate) -> ApiResult<Vec<RoomInfo>> {
        let repos = &self.ctx.repos;
        let snapshot = InventorySnapshot {
            rooms: repos.room_repo.find_all_active()?,
            floors: repos.floor_repo.find_all_active()?,
            categories: repos.category_repo.find_all_active()?,
            services: repos.service_repo.find_all_active()?,
            rates: repos.rate_repo.find_active_covering(date)?,
        };

        let infos = self.builder.build(&snapshot, date);

        debug!(date = %date, rooms = infos.len(), "客房信息投影完成");
        Ok(infos)
    }
}
