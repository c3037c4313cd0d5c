// ==========================================
// 酒店客房库存 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::api::{
    ActionLogApi, ApiContext, CategoryApi, FloorApi, InventoryApi, RateApi, RoomApi,
    RoomStateApi,
};
use crate::config::config_manager::ConfigManager;
use crate::db::{ensure_schema, open_sqlite_connection};
use crate::engine::repositories::InventoryRepositories;

/// 应用状态
///
/// 所有API实例共享同一个数据库连接
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    pub floor_api: Arc<FloorApi>,
    pub category_api: Arc<CategoryApi>,
    pub room_state_api: Arc<RoomStateApi>,
    pub room_api: Arc<RoomApi>,
    pub rate_api: Arc<RateApi>,
    pub inventory_api: Arc<InventoryApi>,
    pub action_log_api: Arc<ActionLogApi>,

    /// 配置管理器（用于配置命令）
    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开数据库并幂等建表
    /// 2. 初始化所有Repository
    /// 3. 创建所有API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        ensure_schema(&conn).map_err(|e| format!("数据库建表失败: {}", e))?;

        let state = Self::from_connection(db_path, Arc::new(Mutex::new(conn)))?;
        tracing::info!("AppState初始化完成");
        Ok(state)
    }

    /// 在已打开（且已建表）的共享连接上创建AppState
    pub fn from_connection(db_path: String, conn: Arc<Mutex<Connection>>) -> Result<Self, String> {
        let config_manager = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .map_err(|e| format!("无法创建ConfigManager: {}", e))?,
        );

        let repos = InventoryRepositories::new(conn);
        let ctx = ApiContext::new(repos, config_manager.clone());

        Ok(Self {
            db_path,
            floor_api: Arc::new(FloorApi::new(ctx.clone())),
            category_api: Arc::new(CategoryApi::new(ctx.clone())),
            room_state_api: Arc::new(RoomStateApi::new(ctx.clone())),
            room_api: Arc::new(RoomApi::new(ctx.clone())),
            rate_api: Arc::new(RateApi::new(ctx.clone())),
            inventory_api: Arc::new(InventoryApi::new(ctx.clone())),
            action_log_api: Arc::new(ActionLogApi::new(ctx)),
            config_manager,
        })
    }

    /// 获取数据库路径
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// ==========================================
// 默认数据库路径辅助函数
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// 1. 环境变量 HOTEL_INVENTORY_DB_PATH（非空时）
/// 2. 用户数据目录/hotel-inventory/hotel_inventory.db
/// 3. ./hotel_inventory.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("HOTEL_INVENTORY_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./hotel_inventory.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("hotel-inventory");
        // 目录创建失败时退回当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("hotel_inventory.db");
        }
    }

    path.to_string_lossy().to_string()
}
