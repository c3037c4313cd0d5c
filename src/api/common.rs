// ==========================================
// 酒店客房库存 - API 公共上下文
// ==========================================
// 职责: 各实体 API 共用的存在性检查、受保护停用、操作日志写入
// ==========================================

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, DEFAULT_ACTOR};
use crate::domain::action_log::ActionLog;
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::integrity::ReferentialIntegrityGuard;
use crate::engine::repositories::InventoryRepositories;
use crate::engine::validation::require_valid_id;
use crate::repository::EntityStore;

/// 配置读取失败 -> ApiError
pub(crate) fn config_error(err: Box<dyn std::error::Error>) -> ApiError {
    ApiError::InternalError(format!("配置读取失败: {}", err))
}

/// 各实体 API 共享的依赖
#[derive(Clone)]
pub struct ApiContext {
    pub repos: InventoryRepositories,
    pub config: Arc<ConfigManager>,
    pub guard: ReferentialIntegrityGuard,
}

impl ApiContext {
    pub fn new(repos: InventoryRepositories, config: Arc<ConfigManager>) -> Self {
        Self {
            repos,
            config,
            guard: ReferentialIntegrityGuard::new(),
        }
    }

    /// 按 id 读取有效记录，不存在或已停用时返回 NotFound
    pub fn require_active<S: EntityStore>(&self, store: &S, id: i64) -> ApiResult<S::Entity> {
        store
            .find_active_by_id(id)?
            .ok_or_else(|| ApiError::not_found(S::KIND, id))
    }

    /// 按 id 读取（先校验 id）
    pub fn get_active<S: EntityStore>(&self, store: &S, id: i64) -> ApiResult<S::Entity> {
        require_valid_id(id)?;
        self.require_active(store, id)
    }

    /// 受引用完整性保护的停用
    ///
    /// 1. 目标必须为有效记录（已停用视为 NotFound）
    /// 2. 默认在同一事务内检查依赖并置 active = 0;
    ///    integrity.transactional_delete = false 时分两步执行
    pub fn deactivate_checked<S: EntityStore>(&self, store: &S, id: i64) -> ApiResult<()> {
        let kind = S::KIND;
        self.require_active(store, id)?;

        let transactional = self.config.is_transactional_delete().map_err(config_error)?;
        let changed = if transactional {
            store.deactivate_guarded(id, |conn| {
                self.guard
                    .can_deactivate(conn, kind, id)
                    .map_err(ApiError::from)
            })?
        } else {
            let probe = self.repos.probe();
            self.guard.can_deactivate(&probe, kind, id)?;
            store.deactivate(id)?
        };

        // 检查之后被并发停用
        if !changed {
            return Err(ApiError::not_found(kind, id));
        }

        info!(entity_kind = %kind, entity_id = id, transactional, "记录已停用");
        Ok(())
    }

    /// 写入操作日志（失败只告警，不影响业务结果）
    pub fn record_action<T: Serialize>(
        &self,
        action_type: ActionType,
        kind: EntityKind,
        entity_id: i64,
        payload: &T,
    ) {
        let actor = self
            .config
            .default_actor()
            .unwrap_or_else(|_| DEFAULT_ACTOR.to_string());
        let payload = match serde_json::to_value(payload) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(entity_kind = %kind, entity_id, error = %e, "操作日志载荷序列化失败");
                None
            }
        };

        let log = ActionLog::now(action_type, kind, entity_id, &actor, payload);
        if let Err(e) = self.repos.action_log_repo.insert(&log) {
            warn!(
                entity_kind = %kind,
                entity_id,
                action_type = %action_type,
                error = %e,
                "操作日志写入失败"
            );
        }
    }
}
