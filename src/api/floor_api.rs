// ==========================================
// 酒店客房库存 - 楼层 API
// ==========================================
// 职责: 楼层新建、修改、停用、查询
// 停用前检查: 有效客房 (room.floor_id)
// ==========================================

use tracing::info;

use crate::api::common::ApiContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::dto::{CreateFloorDto, DeleteDto, UpdateFloorDto};
use crate::domain::floor::Floor;
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::validation::Validate;
use crate::repository::EntityStore;

pub struct FloorApi {
    ctx: ApiContext,
}

impl FloorApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// 新建楼层
    pub fn create(&self, dto: CreateFloorDto) -> ApiResult<Floor> {
        dto.validate()?;
        let repo = &self.ctx.repos.floor_repo;

        if repo.exists_active_description(&dto.description, None)? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Floor.label(),
                value: dto.description.trim().to_string(),
            });
        }

        let mut floor = dto.into_entity();
        floor.id = repo.insert(&floor)?;

        info!(entity_kind = %EntityKind::Floor, entity_id = floor.id, "楼层已新建");
        self.ctx
            .record_action(ActionType::Create, EntityKind::Floor, floor.id, &floor);
        Ok(floor)
    }

    /// 修改楼层
    pub fn update(&self, dto: UpdateFloorDto) -> ApiResult<Floor> {
        dto.validate()?;
        let repo = &self.ctx.repos.floor_repo;
        self.ctx.require_active(repo.as_ref(), dto.id)?;

        if repo.exists_active_description(&dto.description, Some(dto.id))? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Floor.label(),
                value: dto.description.trim().to_string(),
            });
        }

        let floor = dto.into_entity();
        if repo.update(&floor)? == 0 {
            return Err(ApiError::not_found(EntityKind::Floor, floor.id));
        }

        info!(entity_kind = %EntityKind::Floor, entity_id = floor.id, "楼层已修改");
        self.ctx
            .record_action(ActionType::Update, EntityKind::Floor, floor.id, &floor);
        Ok(floor)
    }

    /// 停用楼层（仍有有效客房时阻断）
    pub fn delete(&self, dto: DeleteDto) -> ApiResult<()> {
        dto.validate()?;
        self.ctx
            .deactivate_checked(self.ctx.repos.floor_repo.as_ref(), dto.id)?;
        self.ctx
            .record_action(ActionType::Delete, EntityKind::Floor, dto.id, &dto);
        Ok(())
    }

    /// 全部有效楼层
    pub fn list(&self) -> ApiResult<Vec<Floor>> {
        Ok(self.ctx.repos.floor_repo.find_all_active()?)
    }

    /// 按 id 查询有效楼层
    pub fn get(&self, id: i64) -> ApiResult<Floor> {
        self.ctx.get_active(self.ctx.repos.floor_repo.as_ref(), id)
    }
}
