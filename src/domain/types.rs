// ==========================================
// 酒店客房库存 - 领域类型定义
// ==========================================
// 职责: 实体种类、停用阻断原因等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 实体种类 (Entity Kind)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与 action_log.entity_kind 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Floor,        // 楼层
    Category,     // 房型
    RoomState,    // 客房状态
    Room,         // 客房
    Rate,         // 房价
    HotelService, // 酒店服务 (只读)
    Reservation,  // 预订 (只读, 仅作停用否决信号)
}

impl EntityKind {
    /// 对应的数据表名
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Floor => "floor",
            EntityKind::Category => "category",
            EntityKind::RoomState => "room_state",
            EntityKind::Room => "room",
            EntityKind::Rate => "rate",
            EntityKind::HotelService => "hotel_service",
            EntityKind::Reservation => "reservation",
        }
    }

    /// 面向用户的中文名称
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Floor => "楼层",
            EntityKind::Category => "房型",
            EntityKind::RoomState => "客房状态",
            EntityKind::Room => "客房",
            EntityKind::Rate => "房价",
            EntityKind::HotelService => "酒店服务",
            EntityKind::Reservation => "预订",
        }
    }

    /// 从数据库字符串解析
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "FLOOR" => Some(EntityKind::Floor),
            "CATEGORY" => Some(EntityKind::Category),
            "ROOM_STATE" => Some(EntityKind::RoomState),
            "ROOM" => Some(EntityKind::Room),
            "RATE" => Some(EntityKind::Rate),
            "HOTEL_SERVICE" => Some(EntityKind::HotelService),
            "RESERVATION" => Some(EntityKind::Reservation),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Floor => write!(f, "FLOOR"),
            EntityKind::Category => write!(f, "CATEGORY"),
            EntityKind::RoomState => write!(f, "ROOM_STATE"),
            EntityKind::Room => write!(f, "ROOM"),
            EntityKind::Rate => write!(f, "RATE"),
            EntityKind::HotelService => write!(f, "HOTEL_SERVICE"),
            EntityKind::Reservation => write!(f, "RESERVATION"),
        }
    }
}

// ==========================================
// 停用阻断原因 (Blocking Reason)
// ==========================================
// 引用完整性检查命中时返回给调用方的关系类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockingReason {
    AssociatedRooms,    // 存在关联客房
    ActiveRates,        // 存在有效房价
    ActiveReservations, // 存在有效预订
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockingReason::AssociatedRooms => write!(f, "存在关联客房"),
            BlockingReason::ActiveRates => write!(f, "存在有效房价"),
            BlockingReason::ActiveReservations => write!(f, "存在有效预订"),
        }
    }
}

// ==========================================
// 操作类型 (Action Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Create, // 新建
    Update, // 修改
    Delete, // 停用 (软删除)
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Create => write!(f, "CREATE"),
            ActionType::Update => write!(f, "UPDATE"),
            ActionType::Delete => write!(f, "DELETE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_db_roundtrip() {
        for kind in [
            EntityKind::Floor,
            EntityKind::Category,
            EntityKind::RoomState,
            EntityKind::Room,
            EntityKind::Rate,
        ] {
            assert_eq!(EntityKind::from_db_str(&kind.to_string()), Some(kind));
        }
        assert_eq!(EntityKind::from_db_str("UNKNOWN"), None);
    }

    #[test]
    fn test_entity_kind_serde_matches_display() {
        let json = serde_json::to_string(&EntityKind::RoomState).unwrap();
        assert_eq!(json, "\"ROOM_STATE\"");
    }
}
