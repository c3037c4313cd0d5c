// ==========================================
// 酒店客房库存 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod action_log_repo;
pub mod category_repo;
pub mod error;
pub mod floor_repo;
pub mod rate_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod room_state_repo;
pub mod service_repo;
pub mod store;

// 重导出核心仓储
pub use action_log_repo::ActionLogRepository;
pub use category_repo::CategoryRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use floor_repo::FloorRepository;
pub use rate_repo::RateRepository;
pub use reservation_repo::ReservationRepository;
pub use room_repo::RoomRepository;
pub use room_state_repo::RoomStateRepository;
pub use service_repo::HotelServiceRepository;
pub use store::{
    EntityStore, ExistenceProbe, ForeignKey, ReferencePredicate, SharedConnectionProbe,
};
