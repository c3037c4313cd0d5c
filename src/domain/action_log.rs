// ==========================================
// 酒店客房库存 - 操作日志领域模型
// ==========================================
// 用途: 审计追踪 (新建/修改/停用)
// 对齐: action_log 表
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::types::{ActionType, EntityKind};

// ==========================================
// ActionLog - 操作日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub action_id: String,        // 日志ID (uuid)
    pub action_type: ActionType,  // 操作类型
    pub entity_kind: EntityKind,  // 实体种类
    pub entity_id: i64,           // 实体ID
    pub action_ts: NaiveDateTime, // 操作时间戳
    pub actor: String,            // 操作人
    pub payload_json: Option<JsonValue>, // 操作参数 (JSON)
    pub detail: Option<String>,   // 详细描述
}

impl ActionLog {
    /// 以当前时间构造一条日志
    pub fn now(
        action_type: ActionType,
        entity_kind: EntityKind,
        entity_id: i64,
        actor: &str,
        payload_json: Option<JsonValue>,
    ) -> Self {
        Self {
            action_id: uuid::Uuid::new_v4().to_string(),
            action_type,
            entity_kind,
            entity_id,
            action_ts: chrono::Local::now().naive_local(),
            actor: actor.to_string(),
            payload_json,
            detail: Some(format!(
                "{}{}: id={}",
                action_label(action_type),
                entity_kind.label(),
                entity_id
            )),
        }
    }
}

fn action_label(action_type: ActionType) -> &'static str {
    match action_type {
        ActionType::Create => "新建",
        ActionType::Update => "修改",
        ActionType::Delete => "停用",
    }
}
