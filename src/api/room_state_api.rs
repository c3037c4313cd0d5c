// ==========================================
// 酒店客房库存 - 客房状态 API
// ==========================================
// 停用前检查: 有效客房 (room.room_state_id)
// ==========================================

use tracing::info;

use crate::api::common::ApiContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::dto::{CreateRoomStateDto, DeleteDto, UpdateRoomStateDto};
use crate::domain::room::RoomState;
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::validation::Validate;
use crate::repository::EntityStore;

pub struct RoomStateApi {
    ctx: ApiContext,
}

impl RoomStateApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    fn duplicate(description: &str) -> ApiError {
        ApiError::Duplicate {
            entity: EntityKind::RoomState.label(),
            value: description.trim().to_string(),
        }
    }

    pub fn create(&self, dto: CreateRoomStateDto) -> ApiResult<RoomState> {
        dto.validate()?;
        let repo = &self.ctx.repos.room_state_repo;

        if repo.exists_active_description(&dto.description, None)? {
            return Err(Self::duplicate(&dto.description));
        }

        let mut state = dto.into_entity();
        state.id = repo.insert(&state)?;

        info!(entity_kind = %EntityKind::RoomState, entity_id = state.id, "客房状态已新建");
        self.ctx
            .record_action(ActionType::Create, EntityKind::RoomState, state.id, &state);
        Ok(state)
    }

    pub fn update(&self, dto: UpdateRoomStateDto) -> ApiResult<RoomState> {
        dto.validate()?;
        let repo = &self.ctx.repos.room_state_repo;
        self.ctx.require_active(repo.as_ref(), dto.id)?;

        if repo.exists_active_description(&dto.description, Some(dto.id))? {
            return Err(Self::duplicate(&dto.description));
        }

        let state = dto.into_entity();
        if repo.update(&state)? == 0 {
            return Err(ApiError::not_found(EntityKind::RoomState, state.id));
        }

        info!(entity_kind = %EntityKind::RoomState, entity_id = state.id, "客房状态已修改");
        self.ctx
            .record_action(ActionType::Update, EntityKind::RoomState, state.id, &state);
        Ok(state)
    }

    pub fn delete(&self, dto: DeleteDto) -> ApiResult<()> {
        dto.validate()?;
        self.ctx
            .deactivate_checked(self.ctx.repos.room_state_repo.as_ref(), dto.id)?;
        self.ctx
            .record_action(ActionType::Delete, EntityKind::RoomState, dto.id, &dto);
        Ok(())
    }

    pub fn list(&self) -> ApiResult<Vec<RoomState>> {
        Ok(self.ctx.repos.room_state_repo.find_all_active()?)
    }

    pub fn get(&self, id: i64) -> ApiResult<RoomState> {
        self.ctx.get_active(self.ctx.repos.room_state_repo.as_ref(), id)
    }
}
