// ==========================================
// 酒店客房库存 - 命令层
// ==========================================
// 职责: 把 API 调用结果包装成统一响应 { is_success, data, message, error_kind }
// 调用方按 error_kind 分支，不解析 message
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::api::error::{ApiError, ApiResult, ErrorKind};
use crate::app::state::AppState;
use crate::domain::dto::{
    CreateCategoryDto, CreateFloorDto, CreateRateDto, CreateRoomDto, CreateRoomStateDto,
    DeleteDto, UpdateCategoryDto, UpdateFloorDto, UpdateRateDto, UpdateRoomDto,
    UpdateRoomStateDto,
};
use crate::domain::types::EntityKind;

// ==========================================
// ApiResponse - 统一响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub is_success: bool,
    pub data: JsonValue,
    pub message: String,
    pub error_kind: Option<ErrorKind>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            data,
            message: message.into(),
            error_kind: None,
        }
    }

    pub fn failure(err: &ApiError) -> Self {
        Self {
            is_success: false,
            data: JsonValue::Null,
            message: err.to_string(),
            error_kind: Some(err.kind()),
        }
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"is_success":false,"data":null,"message":"序列化失败: {}","error_kind":"STORE"}}"#,
                e
            )
        })
    }
}

/// 把 ApiResult 转换为统一响应
pub fn respond<T: Serialize>(result: ApiResult<T>, message: &str) -> ApiResponse {
    match result {
        Ok(value) => match serde_json::to_value(&value) {
            Ok(data) => ApiResponse::ok(data, message),
            Err(e) => ApiResponse::failure(&ApiError::InternalError(format!("序列化失败: {}", e))),
        },
        Err(err) => {
            tracing::debug!(error_kind = %err.kind(), error = %err, "命令执行失败");
            ApiResponse::failure(&err)
        }
    }
}

// ==========================================
// 楼层命令
// ==========================================

pub fn create_floor(state: &AppState, dto: CreateFloorDto) -> ApiResponse {
    respond(state.floor_api.create(dto), "楼层已新建")
}

pub fn update_floor(state: &AppState, dto: UpdateFloorDto) -> ApiResponse {
    respond(state.floor_api.update(dto), "楼层已修改")
}

pub fn delete_floor(state: &AppState, dto: DeleteDto) -> ApiResponse {
    respond(state.floor_api.delete(dto), "楼层已停用")
}

pub fn list_floors(state: &AppState) -> ApiResponse {
    respond(state.floor_api.list(), "")
}

pub fn get_floor(state: &AppState, id: i64) -> ApiResponse {
    respond(state.floor_api.get(id), "")
}

// ==========================================
// 房型命令
// ==========================================

pub fn create_category(state: &AppState, dto: CreateCategoryDto) -> ApiResponse {
    respond(state.category_api.create(dto), "房型已新建")
}

pub fn update_category(state: &AppState, dto: UpdateCategoryDto) -> ApiResponse {
    respond(state.category_api.update(dto), "房型已修改")
}

pub fn delete_category(state: &AppState, dto: DeleteDto) -> ApiResponse {
    respond(state.category_api.delete(dto), "房型已停用")
}

pub fn list_categories(state: &AppState) -> ApiResponse {
    respond(state.category_api.list(), "")
}

pub fn get_category(state: &AppState, id: i64) -> ApiResponse {
    respond(state.category_api.get(id), "")
}

// ==========================================
// 客房状态命令
// ==========================================

pub fn create_room_state(state: &AppState, dto: CreateRoomStateDto) -> ApiResponse {
    respond(state.room_state_api.create(dto), "客房状态已新建")
}

pub fn update_room_state(state: &AppState, dto: UpdateRoomStateDto) -> ApiResponse {
    respond(state.room_state_api.update(dto), "客房状态已修改")
}

pub fn delete_room_state(state: &AppState, dto: DeleteDto) -> ApiResponse {
    respond(state.room_state_api.delete(dto), "客房状态已停用")
}

pub fn list_room_states(state: &AppState) -> ApiResponse {
    respond(state.room_state_api.list(), "")
}

pub fn get_room_state(state: &AppState, id: i64) -> ApiResponse {
    respond(state.room_state_api.get(id), "")
}

// ==========================================
// 客房命令
// ==========================================

pub fn create_room(state: &AppState, dto: CreateRoomDto) -> ApiResponse {
    respond(state.room_api.create(dto), "客房已新建")
}

pub fn update_room(state: &AppState, dto: UpdateRoomDto) -> ApiResponse {
    respond(state.room_api.update(dto), "客房已修改")
}

pub fn delete_room(state: &AppState, dto: DeleteDto) -> ApiResponse {
    respond(state.room_api.delete(dto), "客房已停用")
}

pub fn list_rooms(state: &AppState) -> ApiResponse {
    respond(state.room_api.list(), "")
}

pub fn get_room(state: &AppState, id: i64) -> ApiResponse {
    respond(state.room_api.get(id), "")
}

// ==========================================
// 房价命令
// ==========================================

pub fn create_rate(state: &AppState, dto: CreateRateDto) -> ApiResponse {
    respond(state.rate_api.create(dto), "房价已新建")
}

pub fn update_rate(state: &AppState, dto: UpdateRateDto) -> ApiResponse {
    respond(state.rate_api.update(dto), "房价已修改")
}

pub fn delete_rate(state: &AppState, dto: DeleteDto) -> ApiResponse {
    respond(state.rate_api.delete(dto), "房价已停用")
}

pub fn list_rates(state: &AppState) -> ApiResponse {
    respond(state.rate_api.list(), "")
}

pub fn get_rate(state: &AppState, id: i64) -> ApiResponse {
    respond(state.rate_api.get(id), "")
}

/// 指定日期生效的房价
pub fn get_rates_in_force(state: &AppState, date_text: &str) -> ApiResponse {
    respond(state.rate_api.get_in_force(date_text), "")
}

/// 按每晚价格反查客房（无匹配时仍为成功，message 给出提示）
pub fn get_rooms_by_price(state: &AppState, price: f64) -> ApiResponse {
    match state.rate_api.get_rooms_by_price(price) {
        Ok(rooms) if rooms.is_empty() => {
            respond(Ok(rooms), &format!("没有每晚价格为{:.2}的客房", price))
        }
        result => respond(result, ""),
    }
}

// ==========================================
// 库存视图与操作日志
// ==========================================

pub fn get_room_info(state: &AppState) -> ApiResponse {
    respond(state.inventory_api.get_room_info(), "")
}

pub fn list_recent_actions(state: &AppState, limit: i32) -> ApiResponse {
    respond(state.action_log_api.list_recent(limit), "")
}

pub fn list_entity_actions(state: &AppState, kind: EntityKind, entity_id: i64) -> ApiResponse {
    respond(state.action_log_api.list_for_entity(kind, entity_id), "")
}

// ==========================================
// 配置命令
// ==========================================

pub fn get_config_snapshot(state: &AppState) -> ApiResponse {
    let result = state
        .config_manager
        .get_config_snapshot()
        .map_err(|e| ApiError::InternalError(format!("配置读取失败: {}", e)))
        .and_then(|raw| {
            serde_json::from_str::<JsonValue>(&raw)
                .map_err(|e| ApiError::InternalError(format!("配置快照解析失败: {}", e)))
        });
    respond(result, "")
}

pub fn set_config_value(state: &AppState, key: &str, value: &str) -> ApiResponse {
    let result = state
        .config_manager
        .set_config_value(key, value)
        .map_err(|e| ApiError::InternalError(format!("配置写入失败: {}", e)));
    respond(result, "配置已更新")
}
