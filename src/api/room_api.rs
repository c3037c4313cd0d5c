// ==========================================
// 酒店客房库存 - 客房 API
// ==========================================
// 职责: 客房新建、修改、停用、查询
// 引用检查: 楼层、房型、客房状态必须为有效记录
// 唯一性: 房号只在有效客房之间唯一
// 停用前检查: 有效预订 (reservation.room_id)
// ==========================================

use tracing::info;

use crate::api::common::ApiContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::dto::{CreateRoomDto, DeleteDto, UpdateRoomDto};
use crate::domain::room::Room;
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::validation::Validate;
use crate::repository::EntityStore;

pub struct RoomApi {
    ctx: ApiContext,
}

impl RoomApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// 引用的楼层/房型/客房状态必须有效
    fn require_references(&self, floor_id: i64, category_id: i64, room_state_id: i64) -> ApiResult<()> {
        let repos = &self.ctx.repos;
        self.ctx.require_active(repos.floor_repo.as_ref(), floor_id)?;
        self.ctx.require_active(repos.category_repo.as_ref(), category_id)?;
        self.ctx.require_active(repos.room_state_repo.as_ref(), room_state_id)?;
        Ok(())
    }

    /// 新建客房
    pub fn create(&self, dto: CreateRoomDto) -> ApiResult<Room> {
        dto.validate()?;
        self.require_references(dto.floor_id, dto.category_id, dto.room_state_id)?;

        let repo = &self.ctx.repos.room_repo;
        if repo.exists_active_number(&dto.number, None)? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Room.label(),
                value: dto.number.trim().to_string(),
            });
        }

        let mut room = dto.into_entity();
        room.id = repo.insert(&room)?;

        info!(
            entity_kind = %EntityKind::Room,
            entity_id = room.id,
            number = %room.number,
            "客房已新建"
        );
        self.ctx
            .record_action(ActionType::Create, EntityKind::Room, room.id, &room);
        Ok(room)
    }

    /// 修改客房
    pub fn update(&self, dto: UpdateRoomDto) -> ApiResult<Room> {
        dto.validate()?;
        let repo = &self.ctx.repos.room_repo;
        self.ctx.require_active(repo.as_ref(), dto.id)?;
        self.require_references(dto.floor_id, dto.category_id, dto.room_state_id)?;

        if repo.exists_active_number(&dto.number, Some(dto.id))? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Room.label(),
                value: dto.number.trim().to_string(),
            });
        }

        let room = dto.into_entity();
        if repo.update(&room)? == 0 {
            return Err(ApiError::not_found(EntityKind::Room, room.id));
        }

        info!(entity_kind = %EntityKind::Room, entity_id = room.id, "客房已修改");
        self.ctx
            .record_action(ActionType::Update, EntityKind::Room, room.id, &room);
        Ok(room)
    }

    /// 停用客房（仍有有效预订时阻断）
    pub fn delete(&self, dto: DeleteDto) -> ApiResult<()> {
        dto.validate()?;
        self.ctx
            .deactivate_checked(self.ctx.repos.room_repo.as_ref(), dto.id)?;
        self.ctx
            .record_action(ActionType::Delete, EntityKind::Room, dto.id, &dto);
        Ok(())
    }

    pub fn list(&self) -> ApiResult<Vec<Room>> {
        Ok(self.ctx.repos.room_repo.find_all_active()?)
    }

    pub fn get(&self, id: i64) -> ApiResult<Room> {
        self.ctx.get_active(self.ctx.repos.room_repo.as_ref(), id)
    }
}
