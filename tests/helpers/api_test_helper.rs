// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::NamedTempFile;

use hotel_inventory::api::{ApiError, ErrorKind};
use hotel_inventory::app::AppState;
use hotel_inventory::config::config_keys;
use hotel_inventory::db::open_sqlite_connection;
use hotel_inventory::domain::dto::{CreateFloorDto, CreateRoomStateDto};

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含全部API实例（AppState）与一条独立连接（用于准备只读实体数据）
pub struct ApiTestEnv {
    pub db_path: String,
    pub state: AppState,
    pub conn: Connection,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

/// 基础数据 id
#[derive(Debug, Clone, Copy)]
pub struct BaseIds {
    pub service_id: i64,
    pub floor_id: i64,
    pub room_state_id: i64,
}

impl ApiTestEnv {
    /// 创建新的API测试环境（临时数据库文件，已建表）
    pub fn new() -> Result<Self, String> {
        let (temp_file, db_path) = test_helpers::create_test_db()
            .map_err(|e| format!("创建测试数据库失败: {}", e))?;

        let state = AppState::new(db_path.clone())?;
        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;

        Ok(Self {
            db_path,
            state,
            conn,
            _temp_file: temp_file,
        })
    }

    /// 准备一个有效服务、楼层、客房状态
    pub fn prepare_base(&self) -> Result<BaseIds, String> {
        let service_id = self.insert_service("住宿")?;

        let floor = self
            .state
            .floor_api
            .create(CreateFloorDto {
                description: "一楼".to_string(),
            })
            .map_err(|e| format!("创建楼层失败: {}", e))?;

        let room_state = self
            .state
            .room_state_api
            .create(CreateRoomStateDto {
                description: "空闲".to_string(),
            })
            .map_err(|e| format!("创建客房状态失败: {}", e))?;

        Ok(BaseIds {
            service_id,
            floor_id: floor.id,
            room_state_id: room_state.id,
        })
    }

    pub fn insert_service(&self, name: &str) -> Result<i64, String> {
        test_helpers::insert_service(&self.conn, name, true)
            .map_err(|e| format!("插入服务失败: {}", e))
    }

    pub fn insert_reservation(&self, room_id: i64, check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, String> {
        test_helpers::insert_reservation(&self.conn, room_id, "测试住客", check_in, check_out)
            .map_err(|e| format!("插入预订失败: {}", e))
    }

    pub fn cancel_reservation(&self, reservation_id: i64) -> Result<(), String> {
        test_helpers::cancel_reservation(&self.conn, reservation_id)
            .map(|_| ())
            .map_err(|e| format!("取消预订失败: {}", e))
    }

    /// 切换为两步（非事务）停用
    pub fn use_non_transactional_delete(&self) -> Result<(), String> {
        self.state
            .config_manager
            .set_config_value(config_keys::TRANSACTIONAL_DELETE, "false")
            .map_err(|e| format!("写入配置失败: {}", e))
    }

    /// 直接读取 active 标记
    pub fn is_active(&self, table: &str, id: i64) -> bool {
        self.conn
            .query_row(
                &format!("SELECT active FROM {} WHERE id = ?1", table),
                [id],
                |row| row.get::<_, bool>(0),
            )
            .unwrap_or(false)
    }
}

// ==========================================
// 错误类别断言
// ==========================================

/// 验证错误类别
pub fn assert_error_kind(result: Result<impl std::fmt::Debug, ApiError>, expected: ErrorKind) {
    match result {
        Err(e) => assert_eq!(e.kind(), expected, "错误类别不符: {:?}", e),
        Ok(val) => panic!("预期{:?}错误，但操作成功: {:?}", expected, val),
    }
}

/// 验证被引用完整性阻断，且消息包含原因
pub fn assert_integrity_blocked(result: Result<impl std::fmt::Debug, ApiError>, reason_text: &str) {
    match result {
        Err(ApiError::IntegrityViolation(v)) => {
            assert!(
                v.to_string().contains(reason_text),
                "阻断原因不符: {}",
                v
            );
        }
        Ok(val) => panic!("预期IntegrityViolation错误，但操作成功: {:?}", val),
        Err(e) => panic!("预期IntegrityViolation错误，但得到: {:?}", e),
    }
}
