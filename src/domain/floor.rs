// ==========================================
// 酒店客房库存 - 楼层领域模型
// ==========================================
// 对齐: floor 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Floor - 楼层
// ==========================================
// 被 Room.floor_id 引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: i64,             // 主键
    pub description: String, // 描述 (非空, ≤50)
    pub active: bool,        // 软删除标记
}

impl Floor {
    /// 创建待保存的楼层 (id 由存储层分配)
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
            active: true,
        }
    }
}
