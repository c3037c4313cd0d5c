// ==========================================
// 酒店客房库存 - 房价 API
// ==========================================
// 职责: 房价新建、修改、停用、查询; 按日期查询生效房价; 按价格反查客房
// 引用检查: 房型必须为有效记录
// 房价没有依赖记录, 停用不受引用完整性阻断
// ==========================================

use tracing::{debug, info};

use crate::api::common::{config_error, ApiContext};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::dto::{CreateRateDto, DeleteDto, UpdateRateDto};
use crate::domain::rate::Rate;
use crate::domain::room::Room;
use crate::domain::types::{ActionType, EntityKind};
use crate::engine::rate_validity::RateValidityResolver;
use crate::engine::validation::{require_query_price, Validate};
use crate::repository::EntityStore;

pub struct RateApi {
    ctx: ApiContext,
}

impl RateApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// 按当前配置的日期格式表构造裁决器
    fn resolver(&self) -> ApiResult<RateValidityResolver> {
        let formats = self.ctx.config.get_date_formats().map_err(config_error)?;
        Ok(RateValidityResolver::with_formats(formats))
    }

    fn duplicate(description: &str) -> ApiError {
        ApiError::Duplicate {
            entity: EntityKind::Rate.label(),
            value: description.trim().to_string(),
        }
    }

    /// 新建房价（同房型区间允许重叠）
    pub fn create(&self, dto: CreateRateDto) -> ApiResult<Rate> {
        dto.validate()?;
        self.ctx
            .require_active(self.ctx.repos.category_repo.as_ref(), dto.category_id)?;

        let repo = &self.ctx.repos.rate_repo;
        if repo.exists_active_description(&dto.description, None)? {
            return Err(Self::duplicate(&dto.description));
        }

        let mut rate = dto.into_entity();
        rate.id = repo.insert(&rate)?;

        info!(
            entity_kind = %EntityKind::Rate,
            entity_id = rate.id,
            category_id = rate.category_id,
            start_date = %rate.start_date,
            end_date = %rate.end_date,
            "房价已新建"
        );
        self.ctx
            .record_action(ActionType::Create, EntityKind::Rate, rate.id, &rate);
        Ok(rate)
    }

    /// 修改房价
    pub fn update(&self, dto: UpdateRateDto) -> ApiResult<Rate> {
        dto.validate()?;
        let repo = &self.ctx.repos.rate_repo;
        self.ctx.require_active(repo.as_ref(), dto.id)?;
        self.ctx
            .require_active(self.ctx.repos.category_repo.as_ref(), dto.category_id)?;

        if repo.exists_active_description(&dto.description, Some(dto.id))? {
            return Err(Self::duplicate(&dto.description));
        }

        let rate = dto.into_entity();
        if repo.update(&rate)? == 0 {
            return Err(ApiError::not_found(EntityKind::Rate, rate.id));
        }

        info!(entity_kind = %EntityKind::Rate, entity_id = rate.id, "房价已修改");
        self.ctx
            .record_action(ActionType::Update, EntityKind::Rate, rate.id, &rate);
        Ok(rate)
    }

    pub fn delete(&self, dto: DeleteDto) -> ApiResult<()> {
        dto.validate()?;
        self.ctx
            .deactivate_checked(self.ctx.repos.rate_repo.as_ref(), dto.id)?;
        self.ctx
            .record_action(ActionType::Delete, EntityKind::Rate, dto.id, &dto);
        Ok(())
    }

    pub fn list(&self) -> ApiResult<Vec<Rate>> {
        Ok(self.ctx.repos.rate_repo.find_all_active()?)
    }

    pub fn get(&self, id: i64) -> ApiResult<Rate> {
        self.ctx.get_active(self.ctx.repos.rate_repo.as_ref(), id)
    }

    /// 指定日期生效的全部房价（按存储顺序）
    ///
    /// # 返回
    /// - Err(ApiError::DateFormat): 日期文本无法按任一格式解析
    /// - Ok(vec![]): 当日没有生效房价
    pub fn get_in_force(&self, date_text: &str) -> ApiResult<Vec<Rate>> {
        let resolver = self.resolver()?;
        let date = resolver.parse_date(date_text)?;

        let rates = self.ctx.repos.rate_repo.find_all_active()?;
        let in_force = resolver.in_force(&rates, date);

        debug!(date = %date, count = in_force.len(), "生效房价查询完成");
        Ok(in_force)
    }

    /// 按每晚价格反查客房
    ///
    /// # 返回
    /// - Err(ApiError::ValidationError): price <= 0（不访问存储）
    /// - Ok(vec![]): 没有该价格的客房（不是错误）
    pub fn get_rooms_by_price(&self, price: f64) -> ApiResult<Vec<Room>> {
        require_query_price(price)?;

        let rates = self.ctx.repos.rate_repo.find_all_active()?;
        let rooms = self.ctx.repos.room_repo.find_all_active()?;
        let found = RateValidityResolver::new().rooms_for_price(&rates, &rooms, price);

        debug!(price, count = found.len(), "按价格反查客房完成");
        Ok(found)
    }
}
