// ==========================================
// 酒店客房库存 - 库存视图 (读模型)
// ==========================================
// 职责: 客房 + 楼层 + 房型 + 当日房价 + 所属服务 的扁平化投影
// 红线: 单个客房引用缺失时用占位文本兜底, 不得让整个投影失败
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::room::Room;

/// 楼层缺失/已停用时的占位文本
pub const NO_FLOOR: &str = "无楼层";
/// 房型缺失/已停用时的占位文本
pub const NO_CATEGORY: &str = "无房型";
/// 当日无生效房价时的占位文本
pub const NO_ACTIVE_RATE: &str = "无有效房价";
/// 所属服务缺失/已停用时的占位文本
pub const NO_SERVICE: &str = "无服务";

// ==========================================
// RoomInfo - 客房信息投影
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room: Room,
    pub floor: String,
    pub category: String,

    // ===== 当日生效房价 =====
    pub rate_price: Option<f64>, // None 表示无生效房价
    pub rate: String,            // 展示文本 (价格或占位文本)

    pub service: String,
}
