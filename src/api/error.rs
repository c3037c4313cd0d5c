// ==========================================
// 酒店客房库存 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把仓储/引擎错误转换为用户可读的错误消息
// 调用方按 kind() 分支，不解析消息文本
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::types::EntityKind;
use crate::engine::integrity::{IntegrityError, IntegrityViolation};
use crate::engine::rate_validity::DateFormatError;
use crate::engine::validation::ValidationError;
use crate::repository::error::RepositoryError;

// ==========================================
// ErrorKind - 错误类别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    Validation,
    Integrity,
    Format,
    Store,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::Validation => write!(f, "VALIDATION"),
            ErrorKind::Integrity => write!(f, "INTEGRITY"),
            ErrorKind::Format => write!(f, "FORMAT"),
            ErrorKind::Store => write!(f, "STORE"),
        }
    }
}

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效的ID: {0}（必须大于0）")]
    InvalidId(i64),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("{entity}已存在: {value}")]
    Duplicate { entity: &'static str, value: String },

    #[error("日期格式错误: {0}")]
    DateFormat(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("{0}")]
    IntegrityViolation(IntegrityViolation),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据库事务失败: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidId(_) | ApiError::ValidationError(_) | ApiError::Duplicate { .. } => {
                ErrorKind::Validation
            }
            ApiError::DateFormat(_) => ErrorKind::Format,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::IntegrityViolation(_) => ErrorKind::Integrity,
            ApiError::DatabaseError(_)
            | ApiError::DatabaseConnectionError(_)
            | ApiError::DatabaseTransactionError(_)
            | ApiError::InternalError(_)
            | ApiError::Other(_) => ErrorKind::Store,
        }
    }

    /// 活动记录未找到
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        ApiError::NotFound(format!("{}(id={})不存在或已停用", kind.label(), id))
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::DatabaseError(format!("唯一约束违反: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::DatabaseError(format!("外键约束违反: {}", msg))
            }
            RepositoryError::FieldValueError { field, message } => {
                ApiError::DatabaseError(format!("字段{}错误: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidId(id) => ApiError::InvalidId(id),
            other => ApiError::ValidationError(other.to_string()),
        }
    }
}

impl From<IntegrityError> for ApiError {
    fn from(err: IntegrityError) -> Self {
        match err {
            IntegrityError::Blocked(violation) => ApiError::IntegrityViolation(violation),
            IntegrityError::Store(e) => e.into(),
        }
    }
}

impl From<DateFormatError> for ApiError {
    fn from(err: DateFormatError) -> Self {
        ApiError::DateFormat(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::BlockingReason;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Room".to_string(),
            id: "42".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        assert_eq!(api_err.kind(), ErrorKind::NotFound);
        assert!(api_err.to_string().contains("42"));

        let api_err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        assert_eq!(api_err.kind(), ErrorKind::Store);
    }

    #[test]
    fn test_engine_error_kinds() {
        let invalid: ApiError = ValidationError::InvalidId(0).into();
        assert!(matches!(invalid, ApiError::InvalidId(0)));
        assert_eq!(invalid.kind(), ErrorKind::Validation);

        let blocked: ApiError = IntegrityError::Blocked(IntegrityViolation {
            target: EntityKind::Category,
            id: 1,
            dependent: EntityKind::Room,
            reason: BlockingReason::AssociatedRooms,
        })
        .into();
        assert_eq!(blocked.kind(), ErrorKind::Integrity);
        assert!(blocked.to_string().contains("存在关联客房"));

        let format: ApiError = DateFormatError {
            input: "32/13/2023".to_string(),
            accepted: vec!["%d/%m/%Y".to_string()],
        }
        .into();
        assert_eq!(format.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_error_kind_serializes_screaming() {
        assert_eq!(serde_json::to_string(&ErrorKind::NotFound).unwrap(), "\"NOT_FOUND\"");
        assert_eq!(ErrorKind::Integrity.to_string(), "INTEGRITY");
    }
}
