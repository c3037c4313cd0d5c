// ==========================================
// 酒店客房库存 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、读模型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod category;
pub mod dto;
pub mod floor;
pub mod inventory;
pub mod rate;
pub mod reservation;
pub mod room;
pub mod types;

// 重导出核心类型
pub use action_log::ActionLog;
pub use category::{Category, HotelService};
pub use floor::Floor;
pub use inventory::RoomInfo;
pub use rate::Rate;
pub use reservation::Reservation;
pub use room::{Room, RoomState};
pub use types::{ActionType, BlockingReason, EntityKind};
