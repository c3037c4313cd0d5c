// ==========================================
// 酒店客房库存 - 仓储聚合
// ==========================================
// 职责: 聚合 API 层所需的所有 Repository, 共享同一连接
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::repository::{
    ActionLogRepository, CategoryRepository, FloorRepository, HotelServiceRepository,
    RateRepository, ReservationRepository, RoomRepository, RoomStateRepository,
    SharedConnectionProbe,
};

/// 库存仓储集合
///
/// # 包含的仓储
/// - `floor_repo` / `category_repo` / `room_state_repo` / `room_repo` / `rate_repo`: 可变实体
/// - `service_repo` / `reservation_repo`: 只读实体
/// - `action_log_repo`: 操作日志
#[derive(Clone)]
pub struct InventoryRepositories {
    pub conn: Arc<Mutex<Connection>>,
    pub floor_repo: Arc<FloorRepository>,
    pub category_repo: Arc<CategoryRepository>,
    pub room_state_repo: Arc<RoomStateRepository>,
    pub room_repo: Arc<RoomRepository>,
    pub rate_repo: Arc<RateRepository>,
    pub service_repo: Arc<HotelServiceRepository>,
    pub reservation_repo: Arc<ReservationRepository>,
    pub action_log_repo: Arc<ActionLogRepository>,
}

impl InventoryRepositories {
    /// 在同一共享连接上创建全部仓储
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            floor_repo: Arc::new(FloorRepository::new(conn.clone())),
            category_repo: Arc::new(CategoryRepository::new(conn.clone())),
            room_state_repo: Arc::new(RoomStateRepository::new(conn.clone())),
            room_repo: Arc::new(RoomRepository::new(conn.clone())),
            rate_repo: Arc::new(RateRepository::new(conn.clone())),
            service_repo: Arc::new(HotelServiceRepository::new(conn.clone())),
            reservation_repo: Arc::new(ReservationRepository::new(conn.clone())),
            action_log_repo: Arc::new(ActionLogRepository::new(conn.clone())),
            conn,
        }
    }

    /// 非事务模式下的存在性探针（每次查询单独加锁）
    pub fn probe(&self) -> SharedConnectionProbe {
        SharedConnectionProbe::new(self.conn.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::EntityStore;

    #[test]
    fn test_repositories_share_one_connection() {
        let conn = Arc::new(Mutex::new(crate::db::open_in_memory().unwrap()));
        let repos = InventoryRepositories::new(conn.clone());

        {
            let c = conn.lock().unwrap();
            c.execute("INSERT INTO floor (description) VALUES ('一楼')", []).unwrap();
        }
        assert_eq!(repos.floor_repo.find_all_active().unwrap().len(), 1);
        assert!(Arc::ptr_eq(repos.floor_repo.shared_conn(), &conn));
    }
}
