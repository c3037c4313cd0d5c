// ==========================================
// 酒店客房库存 - 操作日志查询 API
// ==========================================

use crate::api::common::ApiContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::ActionLog;
use crate::domain::types::EntityKind;
use crate::engine::validation::require_valid_id;

/// 单次查询条数上限
pub const MAX_RECENT_LIMIT: i32 = 500;

pub struct ActionLogApi {
    ctx: ApiContext,
}

impl ActionLogApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// 最近的操作日志（最新在前）
    pub fn list_recent(&self, limit: i32) -> ApiResult<Vec<ActionLog>> {
        if limit <= 0 || limit > MAX_RECENT_LIMIT {
            return Err(ApiError::ValidationError(format!(
                "limit必须在1到{}之间（当前{}）",
                MAX_RECENT_LIMIT, limit
            )));
        }
        Ok(self.ctx.repos.action_log_repo.find_recent(limit)?)
    }

    /// 某个实体的操作日志（最新在前）
    pub fn list_for_entity(&self, kind: EntityKind, entity_id: i64) -> ApiResult<Vec<ActionLog>> {
        require_valid_id(entity_id)?;
        Ok(self
            .ctx
            .repos
            .action_log_repo
            .find_by_entity(kind, entity_id)?)
    }
}
