// ==========================================
// 酒店客房库存 - 请求校验器
// ==========================================
// 职责: 每种 DTO 一个校验实现，纯函数，不访问存储
// 规则:
// - 修改/停用请求的 id <= 0 优先报告（先于任何内容校验）
// - 其余规则按字段顺序执行，报告第一个违规
// ==========================================

use thiserror::Error;

use crate::domain::dto::{
    CreateCategoryDto, CreateFloorDto, CreateRateDto, CreateRoomDto, CreateRoomStateDto,
    DeleteDto, UpdateCategoryDto, UpdateFloorDto, UpdateRateDto, UpdateRoomDto,
    UpdateRoomStateDto,
};

/// 描述类字段长度上限
pub const DESCRIPTION_MAX_LEN: usize = 50;
/// 房型描述长度下限
pub const CATEGORY_DESCRIPTION_MIN_LEN: usize = 3;
/// 房价描述长度区间
pub const RATE_DESCRIPTION_MIN_LEN: usize = 3;
pub const RATE_DESCRIPTION_MAX_LEN: usize = 255;
/// 房号长度上限
pub const ROOM_NUMBER_MAX_LEN: usize = 50;
/// 客房备注长度上限
pub const ROOM_DETAIL_MAX_LEN: usize = 255;

// ==========================================
// ValidationError - 校验错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 修改/停用请求的 id 非正数
    #[error("无效的ID: {0}（必须大于0）")]
    InvalidId(i64),

    /// 字段内容违规
    #[error("字段{field}不合法: {message}")]
    Field {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    fn field(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// 校验接口：每种 DTO 一个实现
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

// ==========================================
// 规则函数
// ==========================================

/// 修改/停用请求的 id 校验
pub fn require_valid_id(id: i64) -> ValidationResult {
    if id <= 0 {
        return Err(ValidationError::InvalidId(id));
    }
    Ok(())
}

/// 按价格反查时的价格校验（先于任何存储访问）
pub fn require_query_price(price: f64) -> ValidationResult {
    require_positive("price", price)
}

/// 文本长度校验（按字符计数，去首尾空白后）
fn require_text(field: &'static str, value: &str, min: usize, max: usize) -> ValidationResult {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::field(field, "不能为空"));
    }
    if len < min {
        return Err(ValidationError::field(
            field,
            format!("长度不能少于{}个字符（当前{}）", min, len),
        ));
    }
    if len > max {
        return Err(ValidationError::field(
            field,
            format!("长度不能超过{}个字符（当前{}）", max, len),
        ));
    }
    Ok(())
}

/// 引用 id 校验
fn require_reference(field: &'static str, id: i64) -> ValidationResult {
    if id <= 0 {
        return Err(ValidationError::field(field, "必须引用有效记录"));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> ValidationResult {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::field(field, format!("必须大于0（当前{}）", value)));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> ValidationResult {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::field(field, format!("不能为负数（当前{}）", value)));
    }
    Ok(())
}

// ==========================================
// 各实体字段规则（新建/修改共用）
// ==========================================

fn validate_floor_fields(description: &str) -> ValidationResult {
    require_text("description", description, 1, DESCRIPTION_MAX_LEN)
}

fn validate_category_fields(description: &str, capacity: i32, service_id: i64) -> ValidationResult {
    require_text(
        "description",
        description,
        CATEGORY_DESCRIPTION_MIN_LEN,
        DESCRIPTION_MAX_LEN,
    )?;
    if capacity <= 0 {
        return Err(ValidationError::field(
            "capacity",
            format!("必须大于0（当前{}）", capacity),
        ));
    }
    require_reference("service_id", service_id)
}

fn validate_room_state_fields(description: &str) -> ValidationResult {
    require_text("description", description, 1, DESCRIPTION_MAX_LEN)
}

fn validate_room_fields(
    number: &str,
    detail: Option<&str>,
    price: f64,
    floor_id: i64,
    category_id: i64,
    room_state_id: i64,
) -> ValidationResult {
    require_text("number", number, 1, ROOM_NUMBER_MAX_LEN)?;
    if let Some(detail) = detail {
        let len = detail.trim().chars().count();
        if len > ROOM_DETAIL_MAX_LEN {
            return Err(ValidationError::field(
                "detail",
                format!("长度不能超过{}个字符（当前{}）", ROOM_DETAIL_MAX_LEN, len),
            ));
        }
    }
    require_non_negative("price", price)?;
    require_reference("floor_id", floor_id)?;
    require_reference("category_id", category_id)?;
    require_reference("room_state_id", room_state_id)
}

fn validate_rate_fields(
    description: &str,
    price_per_night: f64,
    discount: f64,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    category_id: i64,
) -> ValidationResult {
    require_text(
        "description",
        description,
        RATE_DESCRIPTION_MIN_LEN,
        RATE_DESCRIPTION_MAX_LEN,
    )?;
    require_positive("price_per_night", price_per_night)?;
    require_non_negative("discount", discount)?;
    if start_date >= end_date {
        return Err(ValidationError::field(
            "start_date",
            format!("开始日期{}必须早于结束日期{}", start_date, end_date),
        ));
    }
    require_reference("category_id", category_id)
}

// ==========================================
// Validate 实现
// ==========================================

impl Validate for DeleteDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)
    }
}

impl Validate for CreateFloorDto {
    fn validate(&self) -> ValidationResult {
        validate_floor_fields(&self.description)
    }
}

impl Validate for UpdateFloorDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)?;
        validate_floor_fields(&self.description)
    }
}

impl Validate for CreateCategoryDto {
    fn validate(&self) -> ValidationResult {
        validate_category_fields(&self.description, self.capacity, self.service_id)
    }
}

impl Validate for UpdateCategoryDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)?;
        validate_category_fields(&self.description, self.capacity, self.service_id)
    }
}

impl Validate for CreateRoomStateDto {
    fn validate(&self) -> ValidationResult {
        validate_room_state_fields(&self.description)
    }
}

impl Validate for UpdateRoomStateDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)?;
        validate_room_state_fields(&self.description)
    }
}

impl Validate for CreateRoomDto {
    fn validate(&self) -> ValidationResult {
        validate_room_fields(
            &self.number,
            self.detail.as_deref(),
            self.price,
            self.floor_id,
            self.category_id,
            self.room_state_id,
        )
    }
}

impl Validate for UpdateRoomDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)?;
        validate_room_fields(
            &self.number,
            self.detail.as_deref(),
            self.price,
            self.floor_id,
            self.category_id,
            self.room_state_id,
        )
    }
}

impl Validate for CreateRateDto {
    fn validate(&self) -> ValidationResult {
        validate_rate_fields(
            &self.description,
            self.price_per_night,
            self.discount,
            self.start_date,
            self.end_date,
            self.category_id,
        )
    }
}

impl Validate for UpdateRateDto {
    fn validate(&self) -> ValidationResult {
        require_valid_id(self.id)?;
        validate_rate_fields(
            &self.description,
            self.price_per_night,
            self.discount,
            self.start_date,
            self.end_date,
            self.category_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rate_dto() -> CreateRateDto {
        CreateRateDto {
            description: "一月价".to_string(),
            price_per_night: 100.0,
            discount: 0.0,
            start_date: d(2023, 1, 1),
            end_date: d(2023, 1, 31),
            category_id: 1,
        }
    }

    fn field_of(result: ValidationResult) -> &'static str {
        match result {
            Err(ValidationError::Field { field, .. }) => field,
            other => panic!("Expected Field error, got {:?}", other),
        }
    }

    #[test]
    fn test_floor_description_bounds() {
        assert!(CreateFloorDto { description: "一楼".to_string() }.validate().is_ok());
        assert_eq!(
            field_of(CreateFloorDto { description: "   ".to_string() }.validate()),
            "description"
        );
        let long = "层".repeat(DESCRIPTION_MAX_LEN + 1);
        assert!(CreateFloorDto { description: long }.validate().is_err());
        // 恰好 50 个字符（多字节）通过
        let exact = "层".repeat(DESCRIPTION_MAX_LEN);
        assert!(CreateFloorDto { description: exact }.validate().is_ok());
    }

    #[test]
    fn test_category_rules() {
        let ok = CreateCategoryDto {
            description: "Suite".to_string(),
            capacity: 2,
            service_id: 1,
        };
        assert!(ok.validate().is_ok());

        let short = CreateCategoryDto { description: "ab".to_string(), ..ok.clone() };
        assert_eq!(field_of(short.validate()), "description");

        let zero_capacity = CreateCategoryDto { capacity: 0, ..ok.clone() };
        assert_eq!(field_of(zero_capacity.validate()), "capacity");

        let no_service = CreateCategoryDto { service_id: 0, ..ok };
        assert_eq!(field_of(no_service.validate()), "service_id");
    }

    #[test]
    fn test_invalid_id_reported_before_content() {
        // 内容同样违规，但 id 错误优先
        let dto = UpdateCategoryDto {
            id: 0,
            description: "".to_string(),
            capacity: -1,
            service_id: 0,
        };
        assert_eq!(dto.validate(), Err(ValidationError::InvalidId(0)));

        assert_eq!(DeleteDto { id: -3 }.validate(), Err(ValidationError::InvalidId(-3)));
        assert!(DeleteDto { id: 1 }.validate().is_ok());
    }

    #[test]
    fn test_room_rules() {
        let ok = CreateRoomDto {
            number: "101".to_string(),
            detail: None,
            price: 0.0,
            floor_id: 1,
            category_id: 1,
            room_state_id: 1,
        };
        assert!(ok.validate().is_ok());

        let negative = CreateRoomDto { price: -0.01, ..ok.clone() };
        assert_eq!(field_of(negative.validate()), "price");

        let nan = CreateRoomDto { price: f64::NAN, ..ok.clone() };
        assert_eq!(field_of(nan.validate()), "price");

        let no_floor = CreateRoomDto { floor_id: 0, ..ok.clone() };
        assert_eq!(field_of(no_floor.validate()), "floor_id");

        let long_detail = CreateRoomDto {
            detail: Some("x".repeat(ROOM_DETAIL_MAX_LEN + 1)),
            ..ok
        };
        assert_eq!(field_of(long_detail.validate()), "detail");
    }

    #[test]
    fn test_rate_rules() {
        assert!(rate_dto().validate().is_ok());

        let zero_price = CreateRateDto { price_per_night: 0.0, ..rate_dto() };
        assert_eq!(field_of(zero_price.validate()), "price_per_night");

        let negative_discount = CreateRateDto { discount: -1.0, ..rate_dto() };
        assert_eq!(field_of(negative_discount.validate()), "discount");

        let same_day = CreateRateDto { end_date: d(2023, 1, 1), ..rate_dto() };
        assert_eq!(field_of(same_day.validate()), "start_date");

        let inverted = CreateRateDto { end_date: d(2022, 12, 31), ..rate_dto() };
        assert_eq!(field_of(inverted.validate()), "start_date");
    }

    #[test]
    fn test_query_price() {
        assert!(require_query_price(100.0).is_ok());
        assert_eq!(field_of(require_query_price(-5.0)), "price");
        assert_eq!(field_of(require_query_price(0.0)), "price");
    }
}
