// ==========================================
// 酒店客房库存 - 房型 API
// ==========================================
// 职责: 房型新建、修改、停用、查询
// 引用检查: 所属酒店服务必须为有效记录
// 停用前检查: 有效客房 (room.category_id)、有效房价 (rate.category_id)
// ==========================================

use tracing::info;

use crate::api::common::ApiContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::category::Category;
use crate::domain::dto::{CreateCategoryDto, DeleteDto, UpdateCategoryDto};
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::validation::Validate;
use crate::repository::EntityStore;

pub struct CategoryApi {
    ctx: ApiContext,
}

impl CategoryApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// 新建房型
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 所属服务不存在或已停用
    /// - Err(ApiError::Duplicate): 有效房型中描述重复
    pub fn create(&self, dto: CreateCategoryDto) -> ApiResult<Category> {
        dto.validate()?;
        self.ctx
            .require_active(self.ctx.repos.service_repo.as_ref(), dto.service_id)?;

        let repo = &self.ctx.repos.category_repo;
        if repo.exists_active_description(&dto.description, None)? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Category.label(),
                value: dto.description.trim().to_string(),
            });
        }

        let mut category = dto.into_entity();
        category.id = repo.insert(&category)?;

        info!(
            entity_kind = %EntityKind::Category,
            entity_id = category.id,
            service_id = category.service_id,
            "房型已新建"
        );
        self.ctx
            .record_action(ActionType::Create, EntityKind::Category, category.id, &category);
        Ok(category)
    }

    /// 修改房型
    pub fn update(&self, dto: UpdateCategoryDto) -> ApiResult<Category> {
        dto.validate()?;
        let repo = &self.ctx.repos.category_repo;
        self.ctx.require_active(repo.as_ref(), dto.id)?;
        self.ctx
            .require_active(self.ctx.repos.service_repo.as_ref(), dto.service_id)?;

        if repo.exists_active_description(&dto.description, Some(dto.id))? {
            return Err(ApiError::Duplicate {
                entity: EntityKind::Category.label(),
                value: dto.description.trim().to_string(),
            });
        }

        let category = dto.into_entity();
        if repo.update(&category)? == 0 {
            return Err(ApiError::not_found(EntityKind::Category, category.id));
        }

        info!(entity_kind = %EntityKind::Category, entity_id = category.id, "房型已修改");
        self.ctx
            .record_action(ActionType::Update, EntityKind::Category, category.id, &category);
        Ok(category)
    }

    /// 停用房型（仍有有效客房或有效房价时阻断）
    pub fn delete(&self, dto: DeleteDto) -> ApiResult<()> {
        dto.validate()?;
        self.ctx
            .deactivate_checked(self.ctx.repos.category_repo.as_ref(), dto.id)?;
        self.ctx
            .record_action(ActionType::Delete, EntityKind::Category, dto.id, &dto);
        Ok(())
    }

    pub fn list(&self) -> ApiResult<Vec<Category>> {
        Ok(self.ctx.repos.category_repo.find_all_active()?)
    }

    pub fn get(&self, id: i64) -> ApiResult<Category> {
        self.ctx.get_active(self.ctx.repos.category_repo.as_ref(), id)
    }
}
