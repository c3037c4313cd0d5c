// ==========================================
// 酒店客房库存 - API 层
// ==========================================
// 职责: 校验 -> 引用完整性 -> 存储, 供命令层调用
// ==========================================

pub mod action_log_api;
pub mod category_api;
pub mod common;
pub mod error;
pub mod floor_api;
pub mod inventory_api;
pub mod rate_api;
pub mod room_api;
pub mod room_state_api;

// 重导出核心类型
pub use action_log_api::ActionLogApi;
pub use category_api::CategoryApi;
pub use common::ApiContext;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use floor_api::FloorApi;
pub use inventory_api::InventoryApi;
pub use rate_api::RateApi;
pub use room_api::RoomApi;
pub use room_state_api::RoomStateApi;
