// ==========================================
// 酒店客房库存 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 客房库存一致性与房价生效裁决
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 校验、引用完整性、房价裁决、库存视图
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActionType, BlockingReason, EntityKind};

// 领域实体
pub use domain::{
    ActionLog, Category, Floor, HotelService, Rate, Reservation, Room, RoomInfo, RoomState,
};

// 引擎
pub use engine::{
    InventoryViewBuilder, RateValidityResolver, ReferentialIntegrityGuard, Validate,
};

// API
pub use api::{ApiError, ApiResult, ErrorKind};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "酒店客房库存";
