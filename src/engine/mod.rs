// ==========================================
// 酒店客房库存 - 引擎层
// ==========================================
// 职责: 校验、引用完整性、房价生效裁决、库存视图
// 红线: Engine 不拼 SQL, 存储访问只经由 ExistenceProbe 或调用方传入的快照
// ==========================================

pub mod integrity;
pub mod inventory_view;
pub mod rate_validity;
pub mod repositories;
pub mod validation;

// 重导出核心引擎
pub use integrity::{
    DependencyRule, IntegrityError, IntegrityViolation, ReferentialIntegrityGuard,
    DEPENDENCY_RULES,
};
pub use inventory_view::{InventorySnapshot, InventoryViewBuilder};
pub use rate_validity::{DateFormatError, RateValidityResolver, DEFAULT_DATE_FORMATS};
pub use repositories::InventoryRepositories;
pub use validation::{Validate, ValidationError};
