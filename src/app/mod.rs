// ==========================================
// 酒店客房库存 - 应用层
// ==========================================
// 职责: 共享状态装配与命令入口
// ==========================================

pub mod commands;
pub mod state;

// 重导出
pub use commands::{ApiResponse, respond};
pub use state::{get_default_db_path, AppState};
