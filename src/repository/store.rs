// ==========================================
// 酒店客房库存 - 通用实体存储接口
// ==========================================
// 职责: 按 id 读取、读取全部有效记录、按谓词判断存在、保存、修改、软删除
// 红线: 所有读路径只返回 active = 1 的记录 (find_by_id 除外)
// ==========================================

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::types::EntityKind;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// ForeignKey - 引用列
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKey {
    Floor,
    Category,
    RoomState,
    Room,
}

impl ForeignKey {
    /// 对应的外键列名
    pub fn column(&self) -> &'static str {
        match self {
            ForeignKey::Floor => "floor_id",
            ForeignKey::Category => "category_id",
            ForeignKey::RoomState => "room_state_id",
            ForeignKey::Room => "room_id",
        }
    }
}

// ==========================================
// ReferencePredicate - 引用存在谓词
// ==========================================
// 语义: EXISTS(dependent WHERE foreign_key = target_id AND active = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePredicate {
    pub dependent: EntityKind,
    pub foreign_key: ForeignKey,
    pub target_id: i64,
}

impl ReferencePredicate {
    pub fn new(dependent: EntityKind, foreign_key: ForeignKey, target_id: i64) -> Self {
        Self {
            dependent,
            foreign_key,
            target_id,
        }
    }
}

// ==========================================
// ExistenceProbe - 存在性查询
// ==========================================
/// 只回答“是否存在”，不物化任何依赖行
pub trait ExistenceProbe {
    fn exists(&self, predicate: &ReferencePredicate) -> RepositoryResult<bool>;
}

/// 直接在连接（或事务）上执行
impl ExistenceProbe for Connection {
    fn exists(&self, predicate: &ReferencePredicate) -> RepositoryResult<bool> {
        // 表名/列名来自枚举常量，不拼接外部输入
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1 AND active = 1)",
            predicate.dependent.table_name(),
            predicate.foreign_key.column()
        );
        let found: bool = self.query_row(&sql, params![predicate.target_id], |row| row.get(0))?;
        Ok(found)
    }
}

/// 共享连接上的存在性查询（每次查询单独加锁）
pub struct SharedConnectionProbe {
    conn: Arc<Mutex<Connection>>,
}

impl SharedConnectionProbe {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl ExistenceProbe for SharedConnectionProbe {
    fn exists(&self, predicate: &ReferencePredicate) -> RepositoryResult<bool> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        conn.exists(predicate)
    }
}

// ==========================================
// EntityStore - 实体存储
// ==========================================
/// 每种实体一个实现；读取/软删除由默认方法按表名统一实现，
/// 写入 (insert/update) 由各仓储给出列映射
pub trait EntityStore {
    type Entity;

    /// 实体种类（决定表名）
    const KIND: EntityKind;

    /// SELECT 列清单，顺序与 map_row 对齐
    const COLUMNS: &'static str;

    fn shared_conn(&self) -> &Arc<Mutex<Connection>>;

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Self::Entity>;

    /// 保存新记录，返回分配的 id
    fn insert(&self, entity: &Self::Entity) -> RepositoryResult<i64>;

    /// 按 id 修改有效记录（不改 active），返回受影响行数; 已停用记录返回 0
    fn update(&self, entity: &Self::Entity) -> RepositoryResult<usize>;

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.shared_conn()
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按 id 查询（不区分是否有效）
    fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Self::Entity>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::COLUMNS,
            Self::KIND.table_name()
        );
        let entity = conn
            .query_row(&sql, params![id], |row| Self::map_row(row))
            .optional()?;
        Ok(entity)
    }

    /// 按 id 查询有效记录
    fn find_active_by_id(&self, id: i64) -> RepositoryResult<Option<Self::Entity>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1 AND active = 1",
            Self::COLUMNS,
            Self::KIND.table_name()
        );
        let entity = conn
            .query_row(&sql, params![id], |row| Self::map_row(row))
            .optional()?;
        Ok(entity)
    }

    /// 查询全部有效记录（按存储顺序）
    fn find_all_active(&self) -> RepositoryResult<Vec<Self::Entity>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE active = 1 ORDER BY id ASC",
            Self::COLUMNS,
            Self::KIND.table_name()
        );
        let mut stmt = conn.prepare(&sql)?;
        let entities = stmt
            .query_map([], |row| Self::map_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entities)
    }

    /// 按谓词判断是否存在有效依赖记录
    fn exists(&self, predicate: &ReferencePredicate) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        conn.exists(predicate)
    }

    /// 软删除（active 置 0）
    ///
    /// # 返回
    /// - Ok(true): 本次由有效变为停用
    /// - Ok(false): 记录不存在或已停用
    fn deactivate(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        deactivate_row(&conn, Self::KIND, id)
    }

    /// 在同一事务内先执行检查、再软删除
    ///
    /// check 返回 Err 时事务回滚，active 不变。
    /// check 拿到的是事务内连接，不得再回头锁共享连接。
    fn deactivate_guarded<E, F>(&self, id: i64, check: F) -> Result<bool, E>
    where
        F: FnOnce(&Connection) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        check(&*tx)?;

        let changed = deactivate_row(&tx, Self::KIND, id)?;
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(changed)
    }
}

/// 软删除单行
pub(crate) fn deactivate_row(conn: &Connection, kind: EntityKind, id: i64) -> RepositoryResult<bool> {
    let sql = format!(
        "UPDATE {} SET active = 0 WHERE id = ?1 AND active = 1",
        kind.table_name()
    );
    let rows = conn.execute(&sql, params![id])?;
    Ok(rows > 0)
}

/// 有效记录中是否已存在同值（去首尾空白、忽略 ASCII 大小写）
///
/// exclude_id 用于修改场景排除自身
pub(crate) fn exists_active_value(
    conn: &Connection,
    kind: EntityKind,
    column: &'static str,
    value: &str,
    exclude_id: Option<i64>,
) -> RepositoryResult<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE active = 1 AND LOWER(TRIM({})) = LOWER(TRIM(?1)) AND id != ?2)",
        kind.table_name(),
        column
    );
    let found: bool = conn.query_row(&sql, params![value, exclude_id.unwrap_or(0)], |row| row.get(0))?;
    Ok(found)
}
